//! Per-message branding and content options consumed by the composer.

use super::branding::{
    BANNER_LOGO_HEIGHT, BLOCK_LOGO_HEIGHT, DEFAULT_BRAND_COLOUR, LOGO_HEIGHT_WITH_TEXT,
};
use super::html::SafeHtml;

/// Which structural block a brand logo is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoPlacement {
    /// Inside the full-width coloured brand banner
    Banner,
    /// Standalone content-width logo block
    Block,
}

/// Everything the composer needs to render one email.
///
/// Absent optional values and empty strings are treated alike: the matching
/// section is simply left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Emit a full document (doctype, head, body) instead of a fragment
    pub complete_html: bool,

    /// Embed the iframe resize script; only meaningful with `complete_html`
    pub preview_mode: bool,

    /// Hidden preview text shown by mail clients
    pub preheader: String,

    /// Render the platform's own header banner
    pub default_banner: bool,

    /// Render the full-width organisation banner
    pub brand_banner: bool,

    /// Organisation colour; see [`RenderContext::brand_colour_or_default`]
    pub brand_colour: Option<String>,

    /// Organisation logo URL
    pub brand_logo: Option<String>,

    /// Organisation display text
    pub brand_text: Option<String>,

    /// Logo alt text, used only when there is no brand text
    pub brand_name: Option<String>,

    /// Emit the body a second time with no wrapper
    pub no_branding: bool,

    /// First-party open-tracking pixel URL
    pub ga_pixel_url: Option<String>,

    /// Analytics open-event pixel URL
    pub ga4_open_email_event_url: Option<String>,

    /// Pre-rendered message content
    pub body: SafeHtml,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl RenderContext {
    /// Start building a context around a trusted body
    pub fn builder(body: SafeHtml) -> RenderContextBuilder {
        RenderContextBuilder::new(body)
    }

    pub fn brand_logo(&self) -> Option<&str> {
        present(&self.brand_logo)
    }

    pub fn brand_text(&self) -> Option<&str> {
        present(&self.brand_text)
    }

    pub fn brand_name(&self) -> Option<&str> {
        present(&self.brand_name)
    }

    pub fn ga_pixel_url(&self) -> Option<&str> {
        present(&self.ga_pixel_url)
    }

    pub fn ga4_open_email_event_url(&self) -> Option<&str> {
        present(&self.ga4_open_email_event_url)
    }

    /// Colour set by the caller, with no fallback
    pub fn explicit_brand_colour(&self) -> Option<&str> {
        present(&self.brand_colour)
    }

    /// Banner background colour, falling back to [`DEFAULT_BRAND_COLOUR`]
    pub fn brand_colour_or_default(&self) -> &str {
        self.explicit_brand_colour().unwrap_or(DEFAULT_BRAND_COLOUR)
    }

    /// Logo alt text: the brand name when there is no brand text, otherwise empty
    pub fn logo_alt_text(&self) -> &str {
        match self.brand_text() {
            Some(_) => "",
            None => self.brand_name().unwrap_or(""),
        }
    }

    /// Logo height in pixels for the given placement
    pub fn logo_height(&self, placement: LogoPlacement) -> u32 {
        if self.brand_text().is_some() {
            return LOGO_HEIGHT_WITH_TEXT;
        }
        match placement {
            LogoPlacement::Banner => BANNER_LOGO_HEIGHT,
            LogoPlacement::Block => BLOCK_LOGO_HEIGHT,
        }
    }
}

/// Builder for [`RenderContext`]
#[derive(Debug, Clone)]
pub struct RenderContextBuilder {
    context: RenderContext,
}

impl RenderContextBuilder {
    pub fn new(body: SafeHtml) -> Self {
        Self {
            context: RenderContext {
                body,
                ..RenderContext::default()
            },
        }
    }

    pub fn complete_html(mut self, enabled: bool) -> Self {
        self.context.complete_html = enabled;
        self
    }

    pub fn preview_mode(mut self, enabled: bool) -> Self {
        self.context.preview_mode = enabled;
        self
    }

    pub fn preheader(mut self, preheader: impl Into<String>) -> Self {
        self.context.preheader = preheader.into();
        self
    }

    pub fn default_banner(mut self, enabled: bool) -> Self {
        self.context.default_banner = enabled;
        self
    }

    pub fn brand_banner(mut self, enabled: bool) -> Self {
        self.context.brand_banner = enabled;
        self
    }

    pub fn brand_colour(mut self, colour: impl Into<String>) -> Self {
        self.context.brand_colour = Some(colour.into());
        self
    }

    pub fn brand_logo(mut self, url: impl Into<String>) -> Self {
        self.context.brand_logo = Some(url.into());
        self
    }

    pub fn brand_text(mut self, text: impl Into<String>) -> Self {
        self.context.brand_text = Some(text.into());
        self
    }

    pub fn brand_name(mut self, name: impl Into<String>) -> Self {
        self.context.brand_name = Some(name.into());
        self
    }

    pub fn no_branding(mut self, enabled: bool) -> Self {
        self.context.no_branding = enabled;
        self
    }

    pub fn ga_pixel_url(mut self, url: impl Into<String>) -> Self {
        self.context.ga_pixel_url = Some(url.into());
        self
    }

    pub fn ga4_open_email_event_url(mut self, url: impl Into<String>) -> Self {
        self.context.ga4_open_email_event_url = Some(url.into());
        self
    }

    pub fn build(self) -> RenderContext {
        self.context
    }
}
