//! Email composition.
//!
//! Sections are appended in a fixed order:
//!
//! 1. document shell (and preview script) when `complete_html` is set
//! 2. preheader, always
//! 3. platform banner
//! 4. brand banner, or else the standalone brand logo block
//! 5. main content, followed by the unbranded body copy when requested
//! 6. tracking pixels
//! 7. document close

use serde::Serialize;

use super::branding::*;
use super::context::{LogoPlacement, RenderContext};
use super::html::escape_html;

/// A structural block of the rendered email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    DocumentShell,
    PreviewScript,
    Preheader,
    DefaultBanner,
    BrandBanner,
    BrandLogo,
    Content,
    UnbrandedBody,
    GaPixel,
    Ga4Pixel,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::DocumentShell => "document_shell",
            Section::PreviewScript => "preview_script",
            Section::Preheader => "preheader",
            Section::DefaultBanner => "default_banner",
            Section::BrandBanner => "brand_banner",
            Section::BrandLogo => "brand_logo",
            Section::Content => "content",
            Section::UnbrandedBody => "unbranded_body",
            Section::GaPixel => "ga_pixel",
            Section::Ga4Pixel => "ga4_pixel",
        }
    }
}

/// Output of [`compose`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub html: String,
    /// Sections in the order they were emitted
    pub sections: Vec<Section>,
}

impl RenderedEmail {
    pub fn contains(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }
}

/// Render an email to its final markup
pub fn render(context: &RenderContext) -> String {
    compose(context).html
}

/// Render an email and report which sections were emitted
pub fn compose(context: &RenderContext) -> RenderedEmail {
    let mut writer = EmailWriter::with_capacity(context.body.len() + 8 * 1024);

    if context.complete_html {
        writer.document_open(context.preview_mode);
    }

    writer.preheader(&context.preheader);

    if context.default_banner {
        writer.default_banner();
    }

    if context.brand_banner {
        writer.brand_banner(context);
    } else if let Some(logo) = context.brand_logo() {
        writer.brand_logo_block(context, logo);
    }

    writer.content(context);

    if context.no_branding {
        writer.unbranded_body(context);
    }

    if let Some(url) = context.ga_pixel_url() {
        writer.ga_pixel(url);
    }
    if let Some(url) = context.ga4_open_email_event_url() {
        writer.ga4_pixel(url);
    }

    if context.complete_html {
        writer.push(DOCUMENT_CLOSE);
    }

    let rendered = writer.finish();
    tracing::debug!(
        sections = rendered.sections.len(),
        bytes = rendered.html.len(),
        complete_html = context.complete_html,
        "Composed email"
    );
    rendered
}

struct EmailWriter {
    html: String,
    sections: Vec<Section>,
}

impl EmailWriter {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            html: String::with_capacity(capacity),
            sections: Vec::new(),
        }
    }

    fn push(&mut self, markup: &str) {
        self.html.push_str(markup);
    }

    fn mark(&mut self, section: Section) {
        self.sections.push(section);
    }

    fn finish(self) -> RenderedEmail {
        RenderedEmail {
            html: self.html,
            sections: self.sections,
        }
    }

    fn document_open(&mut self, preview_mode: bool) {
        self.mark(Section::DocumentShell);
        self.push(DOCUMENT_HEAD_OPEN);
        if preview_mode {
            self.mark(Section::PreviewScript);
            self.push(PREVIEW_RESIZE_SCRIPT);
        }
        self.push(DOCUMENT_BODY_OPEN);
    }

    fn preheader(&mut self, preheader: &str) {
        self.mark(Section::Preheader);
        self.push(&format!(
            "<span style=\"{}\">{}</span>\n",
            PREHEADER_STYLE,
            escape_html(preheader)
        ));
    }

    fn default_banner(&mut self) {
        self.mark(Section::DefaultBanner);
        self.push(FULL_WIDTH_TABLE_OPEN);
        self.push(&format!(
            "  <tr>\n    <td width=\"100%\" height=\"{}\" bgcolor=\"{}\" valign=\"middle\">\n",
            DEFAULT_BANNER_HEIGHT, DEFAULT_BANNER_COLOUR
        ));
        self.push(MSO_TABLE_OPEN);
        self.push(CENTRED_TABLE_OPEN);
        self.push(&format!(
            "  <tr>\n    <td style=\"padding: 16px 10px;\" valign=\"middle\">{}</td>\n  </tr>\n",
            logo_img(DEFAULT_BANNER_LOGO_URL, DEFAULT_BANNER_LOGO_ALT, DEFAULT_BANNER_LOGO_HEIGHT)
        ));
        self.push(TABLE_CLOSE);
        self.push(MSO_TABLE_CLOSE);
        self.push("    </td>\n  </tr>\n");
        self.push(TABLE_CLOSE);
    }

    fn brand_banner(&mut self, context: &RenderContext) {
        self.mark(Section::BrandBanner);
        self.push(FULL_WIDTH_TABLE_OPEN);
        self.push(&format!(
            "  <tr>\n    <td width=\"100%\" height=\"{}\" bgcolor=\"{}\" valign=\"middle\">\n",
            BRAND_BANNER_HEIGHT,
            escape_html(context.brand_colour_or_default())
        ));
        self.push(MSO_TABLE_OPEN);
        self.push(CENTRED_TABLE_OPEN);
        self.push("  <tr>\n");
        if let Some(logo) = context.brand_logo() {
            self.push(&format!(
                "    <td style=\"padding: 13px 10px;\" valign=\"middle\">{}</td>\n",
                logo_img(
                    &escape_html(logo),
                    &escape_html(context.logo_alt_text()),
                    context.logo_height(LogoPlacement::Banner),
                )
            ));
        }
        if let Some(text) = context.brand_text() {
            self.push(&text_cell(text, BANNER_TEXT_COLOUR));
        }
        self.push("  </tr>\n");
        self.push(TABLE_CLOSE);
        self.push(MSO_TABLE_CLOSE);
        self.push("    </td>\n  </tr>\n");
        self.push(TABLE_CLOSE);
        self.push(SPACER_ROW);
    }

    fn brand_logo_block(&mut self, context: &RenderContext, logo: &str) {
        self.mark(Section::BrandLogo);
        let accent = context
            .explicit_brand_colour()
            .map(|colour| {
                format!(
                    "border-left: {}px solid {};",
                    BRAND_ACCENT_BORDER_WIDTH,
                    escape_html(colour)
                )
            })
            .unwrap_or_default();

        self.push(MSO_TABLE_OPEN);
        self.push(CENTRED_TABLE_OPEN);
        self.push("  <tr>\n");
        self.push(&format!(
            "    <td style=\"padding: 10px 10px 0;{}\" valign=\"middle\">{}</td>\n",
            accent,
            logo_img(
                &escape_html(logo),
                &escape_html(context.logo_alt_text()),
                context.logo_height(LogoPlacement::Block),
            )
        ));
        if let Some(text) = context.brand_text() {
            self.push(&text_cell(text, BODY_TEXT_COLOUR));
        }
        self.push("  </tr>\n");
        self.push(TABLE_CLOSE);
        self.push(MSO_TABLE_CLOSE);
        self.push(SPACER_ROW);
    }

    fn content(&mut self, context: &RenderContext) {
        self.mark(Section::Content);
        self.push(MSO_TABLE_OPEN);
        self.push(CENTRED_TABLE_OPEN);
        self.push(&format!("  <tr>\n    <td style=\"{}\">\n", CONTENT_CELL_STYLE));
        self.push(context.body.as_str());
        self.push("\n    </td>\n  </tr>\n");
        self.push(TABLE_CLOSE);
        self.push(MSO_TABLE_CLOSE);
    }

    fn unbranded_body(&mut self, context: &RenderContext) {
        self.mark(Section::UnbrandedBody);
        self.push(context.body.as_str());
        self.push("\n");
    }

    fn ga_pixel(&mut self, url: &str) {
        self.mark(Section::GaPixel);
        self.push(&format!(
            "<img id=\"{}\" src=\"{}\" width=\"1\" height=\"1\" border=\"0\" style=\"display: block;\">\n",
            GA_PIXEL_ID,
            escape_html(url)
        ));
    }

    fn ga4_pixel(&mut self, url: &str) {
        self.mark(Section::Ga4Pixel);
        self.push(&format!(
            "<img id=\"{}\" src=\"{}\" alt=\"\" width=\"1\" height=\"1\" border=\"0\" style=\"display: block;\">\n",
            GA4_PIXEL_ID,
            escape_html(url)
        ));
    }
}

/// `src` and `alt` must already be escaped
fn logo_img(src: &str, alt: &str, height: u32) -> String {
    format!(
        "<img src=\"{}\" alt=\"{}\" height=\"{}\" border=\"0\" style=\"display: block;border: 0;\">",
        src, alt, height
    )
}

fn text_cell(text: &str, colour: &str) -> String {
    format!(
        "    <td width=\"100%\" style=\"padding: 0 10px;font-family: Helvetica, Arial, sans-serif;font-size: 16px;font-weight: 700;line-height: 1.315789474;color: {};\" valign=\"middle\">{}</td>\n",
        colour,
        escape_html(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::SafeHtml;

    fn hello() -> SafeHtml {
        SafeHtml::trusted("<p>Hello</p>")
    }

    #[test]
    fn test_fragment_has_no_document_shell() {
        let html = render(&RenderContext::builder(hello()).build());

        assert!(!html.contains("<html"));
        assert!(!html.contains("<head>"));
        assert!(!html.contains("</body>"));
        assert!(html.starts_with("<span style="));
    }

    #[test]
    fn test_complete_document_wraps_content() {
        let html = render(&RenderContext::builder(hello()).complete_html(true).build());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_preview_script_needs_complete_html() {
        let preview = compose(
            &RenderContext::builder(hello())
                .complete_html(true)
                .preview_mode(true)
                .build(),
        );
        assert!(preview.contains(Section::PreviewScript));
        assert!(preview.html.contains("<script"));

        let fragment = compose(&RenderContext::builder(hello()).preview_mode(true).build());
        assert!(!fragment.contains(Section::PreviewScript));
        assert!(!fragment.html.contains("<script"));
    }

    #[test]
    fn test_preheader_always_emitted() {
        let empty = render(&RenderContext::builder(hello()).build());
        assert!(empty.contains(&format!("<span style=\"{}\"></span>", PREHEADER_STYLE)));

        let text = render(
            &RenderContext::builder(hello())
                .preheader("Your <order> shipped")
                .build(),
        );
        assert!(text.contains("Your &lt;order&gt; shipped</span>"));
    }

    #[test]
    fn test_preheader_follows_body_tag() {
        let html = render(
            &RenderContext::builder(hello())
                .complete_html(true)
                .preheader("content")
                .build(),
        );
        assert!(html.contains(
            "<body style=\"mso-line-height-rule: exactly;font-family: Helvetica, Arial, sans-serif;font-size: 16px;Margin: 0;color:#323A45;\">\n\n<span style=\"display: none;font-size: 1px;color: #fff; max-height: 0;\">content</span>"
        ));
    }

    #[test]
    fn test_section_order() {
        let rendered = compose(
            &RenderContext::builder(hello())
                .complete_html(true)
                .default_banner(true)
                .brand_banner(true)
                .no_branding(true)
                .ga_pixel_url("https://example.com/p.gif")
                .ga4_open_email_event_url("https://example.com/ga4")
                .build(),
        );

        assert_eq!(
            rendered.sections,
            vec![
                Section::DocumentShell,
                Section::Preheader,
                Section::DefaultBanner,
                Section::BrandBanner,
                Section::Content,
                Section::UnbrandedBody,
                Section::GaPixel,
                Section::Ga4Pixel,
            ]
        );
    }

    #[test]
    fn test_brand_banner_takes_precedence_over_logo_block() {
        let rendered = compose(
            &RenderContext::builder(hello())
                .brand_banner(true)
                .brand_logo("https://example.com/logo.png")
                .build(),
        );

        assert!(rendered.contains(Section::BrandBanner));
        assert!(!rendered.contains(Section::BrandLogo));
        assert_eq!(rendered.html.matches("https://example.com/logo.png").count(), 1);
    }

    #[test]
    fn test_brand_banner_without_logo_or_text() {
        let html = render(&RenderContext::builder(hello()).brand_banner(true).build());

        assert!(html.contains("bgcolor=\"#323A45\""));
        assert!(html.contains("height=\"53\""));
        assert!(html.contains(
            "role=\"presentation\" width=\"100%\" style=\"border-collapse: collapse;min-width: 100%;width: 100% !important;\""
        ));
        assert!(!html.contains("<img"));
        assert!(html.contains(SPACER_ROW));
    }

    #[test]
    fn test_logo_block_border_only_with_explicit_colour() {
        let plain = render(
            &RenderContext::builder(hello())
                .brand_logo("https://example.com/logo.png")
                .build(),
        );
        assert!(!plain.contains("border-left"));
        assert!(plain.contains("height=\"108\""));

        let accented = render(
            &RenderContext::builder(hello())
                .brand_logo("https://example.com/logo.png")
                .brand_colour("#f00")
                .build(),
        );
        assert!(accented.contains("border-left: 8px solid #f00;"));
    }

    #[test]
    fn test_brand_values_are_escaped() {
        let html = render(
            &RenderContext::builder(hello())
                .brand_banner(true)
                .brand_logo("https://example.com/logo.png?a=1&b=2")
                .brand_text("Fish & <Chips>")
                .build(),
        );

        assert!(html.contains("src=\"https://example.com/logo.png?a=1&amp;b=2\""));
        assert!(html.contains(">Fish &amp; &lt;Chips&gt;</td>"));
    }

    #[test]
    fn test_body_is_not_escaped() {
        let body = SafeHtml::trusted("<p>Hello <a href=\"https://example.com?a=1&b=2\">link</a></p>");
        let html = render(&RenderContext::builder(body.clone()).build());
        assert!(html.contains(body.as_str()));
    }

    #[test]
    fn test_content_wrapped_in_outlook_markers() {
        let html = render(&RenderContext::builder(hello()).build());
        let open = html.find(MSO_TABLE_OPEN).unwrap();
        let body = html.find("<p>Hello</p>").unwrap();
        let close = html.rfind(MSO_TABLE_CLOSE).unwrap();

        assert!(open < body);
        assert!(body < close);
    }
}
