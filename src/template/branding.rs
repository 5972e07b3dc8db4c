//! Fixed markup, colours and dimensions shared by every rendered email.

/// Banner background used when a brand banner has no colour of its own
pub const DEFAULT_BRAND_COLOUR: &str = "#323A45";

/// Width literal shared by every constant below that needs it
macro_rules! content_width {
    () => {
        600
    };
}

/// Maximum width of every centred content table, in pixels
pub const CONTENT_WIDTH: u32 = content_width!();

// Platform header banner
pub const DEFAULT_BANNER_HEIGHT: u32 = 80;
pub const DEFAULT_BANNER_LOGO_HEIGHT: u32 = 48;
pub const DEFAULT_BANNER_COLOUR: &str = "#003E73";
pub const DEFAULT_BANNER_LOGO_URL: &str =
    "https://dev-notifications-va-gov-assets.s3.amazonaws.com/img/vanotify-header-logo.png";
pub const DEFAULT_BANNER_LOGO_ALT: &str = "U.S. Department of Veterans Affairs";

// Organisation branding
pub const BRAND_BANNER_HEIGHT: u32 = 53;
pub const BRAND_SPACER_HEIGHT: u32 = 20;
pub const LOGO_HEIGHT_WITH_TEXT: u32 = 27;
pub const BANNER_LOGO_HEIGHT: u32 = 54;
pub const BLOCK_LOGO_HEIGHT: u32 = 108;
pub const BRAND_ACCENT_BORDER_WIDTH: u32 = 8;
pub const BANNER_TEXT_COLOUR: &str = "#FFFFFF";
pub const BODY_TEXT_COLOUR: &str = "#323A45";

/// `id` attribute of the first-party open-tracking pixel
pub const GA_PIXEL_ID: &str = "ga_pixel_url";

/// `id` attribute of the analytics open-event pixel
pub const GA4_PIXEL_ID: &str = "ga4_open_email_event_url";

/// Opens a fixed-width table that only Outlook and old IE engines see.
///
/// Must stay byte-for-byte identical; those clients match on it literally.
pub const MSO_TABLE_OPEN: &str = concat!(
    "<!--[if (gte mso 9)|(IE)]>\n",
    r#"  <table width=""#,
    content_width!(),
    r#"" align="center" cellpadding="0" cellspacing="0" border="0" style="border-collapse: collapse;width: "#,
    content_width!(),
    "px;\">\n",
    "    <tr>\n",
    "      <td>\n",
    "<![endif]-->\n",
);

/// Closes [`MSO_TABLE_OPEN`]
pub const MSO_TABLE_CLOSE: &str = r#"<!--[if (gte mso 9)|(IE)]>
      </td>
    </tr>
  </table>
<![endif]-->
"#;

pub const DOCUMENT_HEAD_OPEN: &str = concat!(
    r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta http-equiv="Content-Type" content="text/html; charset=UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="format-detection" content="telephone=no">
  <title>Page title</title>
  <style type="text/css">
    body { margin: 0 !important; padding: 0 !important; }
    table, td { mso-table-lspace: 0pt; mso-table-rspace: 0pt; }
    img { -ms-interpolation-mode: bicubic; }
    a { color: #004795; }
    p { Margin: 0 0 20px 0; font-size: 16px; line-height: 25px; color: #323A45; }
    .content { width: 100% !important; max-width: "#,
    content_width!(),
    r#"px; }
    @media only screen and (min-device-width: "#,
    content_width!(),
    r#"px) {
      .content { width: "#,
    content_width!(),
    r#"px !important; }
    }
    @media only screen and (max-width: 480px) {
      p, li { font-size: 18px !important; line-height: 28px !important; }
    }
  </style>
  <!--[if gte mso 12]>
  <style type="text/css">
    td { font-family: Helvetica, Arial, sans-serif !important; }
  </style>
  <![endif]-->
"#,
);

macro_rules! preview_resize_message {
    () => {
        "email-preview-resize"
    };
}

/// `type` of the message the preview script posts to its parent window.
///
/// The preview host page listens for `{ type, height }` messages with this
/// type and sizes the iframe to `height`.
pub const PREVIEW_RESIZE_MESSAGE: &str = preview_resize_message!();

/// Lets the preview page size its iframe to the rendered email.
///
/// Posts a [`PREVIEW_RESIZE_MESSAGE`] on load and on every resize.
pub const PREVIEW_RESIZE_SCRIPT: &str = concat!(
    r#"  <script type="text/javascript">
    (function () {
      function postHeight() {
        var height = document.documentElement.scrollHeight;
        window.parent.postMessage({ type: ""#,
    preview_resize_message!(),
    r#"", height: height }, "*");
      }
      window.addEventListener("load", postHeight);
      window.addEventListener("resize", postHeight);
    })();
  </script>
"#,
);

pub const DOCUMENT_BODY_OPEN: &str = r#"</head>
<body style="mso-line-height-rule: exactly;font-family: Helvetica, Arial, sans-serif;font-size: 16px;Margin: 0;color:#323A45;">

"#;

pub const DOCUMENT_CLOSE: &str = "</body>\n</html>\n";

pub const PREHEADER_STYLE: &str = "display: none;font-size: 1px;color: #fff; max-height: 0;";

/// Full-bleed table that carries a coloured banner row
pub const FULL_WIDTH_TABLE_OPEN: &str = r#"<table role="presentation" width="100%" style="border-collapse: collapse;min-width: 100%;width: 100% !important;" cellpadding="0" cellspacing="0" border="0">
"#;

/// Centred inner table used inside banners and for the logo block
pub const CENTRED_TABLE_OPEN: &str = concat!(
    r#"<table role="presentation" class="content" width="100%" style="border-collapse: collapse;max-width: "#,
    content_width!(),
    r#"px;width: 100% !important;" cellpadding="0" cellspacing="0" border="0" align="center">"#,
    "\n",
);

pub const TABLE_CLOSE: &str = "</table>\n";

pub const CONTENT_CELL_STYLE: &str = concat!(
    "font-family: Helvetica, Arial, sans-serif;font-size: 16px;line-height: 1.315789474;max-width: ",
    content_width!(),
    "px;color: #323A45;padding: 10px 10px 0;",
);

pub const SPACER_ROW: &str = r#"<table role="presentation" width="100%" style="border-collapse: collapse;" cellpadding="0" cellspacing="0" border="0">
  <tr>
    <td height="20" style="font-size: 20px;line-height: 20px;">&nbsp;</td>
  </tr>
</table>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mso_markers_pair_up() {
        assert!(MSO_TABLE_OPEN.starts_with("<!--[if (gte mso 9)|(IE)]>"));
        assert!(MSO_TABLE_OPEN.trim_end().ends_with("<![endif]-->"));
        assert!(MSO_TABLE_CLOSE.starts_with("<!--[if (gte mso 9)|(IE)]>"));
        assert!(MSO_TABLE_CLOSE.trim_end().ends_with("<![endif]-->"));
        assert!(MSO_TABLE_OPEN.contains(&format!("width=\"{}\"", CONTENT_WIDTH)));
    }

    #[test]
    fn test_content_width_used_everywhere() {
        let width = format!("{}px", CONTENT_WIDTH);
        assert!(MSO_TABLE_OPEN.contains(&width));
        assert!(DOCUMENT_HEAD_OPEN.contains(&format!("max-width: {}", width)));
        assert!(CENTRED_TABLE_OPEN.contains(&format!("max-width: {}", width)));
        assert!(CONTENT_CELL_STYLE.contains(&format!("max-width: {}", width)));
    }

    #[test]
    fn test_preview_script_posts_resize_message() {
        assert!(PREVIEW_RESIZE_SCRIPT.contains(&format!("type: \"{}\"", PREVIEW_RESIZE_MESSAGE)));
        assert!(PREVIEW_RESIZE_SCRIPT.contains("window.parent.postMessage"));
    }

    #[test]
    fn test_spacer_matches_spacer_height() {
        assert!(SPACER_ROW.contains(&format!("height=\"{}\"", BRAND_SPACER_HEIGHT)));
    }
}
