//! Request and response models for the render API.

use serde::{Deserialize, Serialize};

use super::composer::{RenderedEmail, Section};
use super::context::RenderContext;
use super::html::SafeHtml;
use super::preheader::normalise_preheader;

/// Request to render an email
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RenderEmailRequest {
    /// Emit a full HTML document rather than a fragment
    pub complete_html: bool,

    /// Embed the preview iframe resize script
    pub preview_mode: bool,

    /// Preview text; whitespace is collapsed and the result capped at 256 characters
    pub preheader: Option<String>,

    pub default_banner: bool,
    pub brand_banner: bool,
    pub brand_colour: Option<String>,
    pub brand_logo: Option<String>,
    pub brand_text: Option<String>,
    pub brand_name: Option<String>,
    pub no_branding: bool,
    pub ga_pixel_url: Option<String>,
    pub ga4_open_email_event_url: Option<String>,

    /// Pre-rendered HTML body
    pub body: String,
}

impl RenderEmailRequest {
    /// Convert into a render context.
    ///
    /// Render endpoints sit behind API key authentication and their callers
    /// produce the body markup, so the body is accepted as trusted here.
    /// Previews never carry a preheader.
    pub fn into_context(self) -> RenderContext {
        let preheader = match (self.preview_mode, self.preheader) {
            (false, Some(text)) => normalise_preheader(&text),
            _ => String::new(),
        };

        RenderContext {
            complete_html: self.complete_html,
            preview_mode: self.preview_mode,
            preheader,
            default_banner: self.default_banner,
            brand_banner: self.brand_banner,
            brand_colour: self.brand_colour,
            brand_logo: self.brand_logo,
            brand_text: self.brand_text,
            brand_name: self.brand_name,
            no_branding: self.no_branding,
            ga_pixel_url: self.ga_pixel_url,
            ga4_open_email_event_url: self.ga4_open_email_event_url,
            body: SafeHtml::trusted(self.body),
        }
    }
}

/// Rendered email together with the sections that were emitted
#[derive(Debug, Serialize)]
pub struct RenderEmailResponse {
    pub html: String,
    pub sections: Vec<Section>,
    /// Length of `html` in bytes
    pub length: usize,
}

impl From<RenderedEmail> for RenderEmailResponse {
    fn from(rendered: RenderedEmail) -> Self {
        Self {
            length: rendered.html.len(),
            html: rendered.html,
            sections: rendered.sections,
        }
    }
}
