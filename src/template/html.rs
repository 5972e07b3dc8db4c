//! HTML trust boundary.
//!
//! Message bodies arrive already rendered by an upstream markdown renderer and are
//! spliced into the email verbatim. [`SafeHtml`] is the only type the composer
//! accepts for that splice, so a plain `String` can never reach it by accident.
//! Every other caller-supplied value goes through [`escape_html`].

use std::fmt;

use askama::filters::{escape, Html};

/// Pre-sanitised HTML that is emitted without escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Wrap markup the caller guarantees is safe to embed unescaped.
    ///
    /// The composer performs no sanitisation of its own; whoever calls this owns
    /// the guarantee.
    pub fn trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape a plain string for use in element content or a quoted attribute
pub fn escape_html(value: &str) -> String {
    // Escaping a `&str` cannot fail
    escape(value, Html)
        .map(|escaped| escaped.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup_characters() {
        assert_eq!(escape_html("<b>Tom & Jerry</b>"), "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
    }

    #[test]
    fn test_escape_quotes_for_attributes() {
        let escaped = escape_html(r#"x" onload="alert('hi')"#);
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
        assert!(escaped.starts_with("x&"));
    }

    #[test]
    fn test_escape_leaves_plain_text_alone() {
        assert_eq!(escape_html("Acme Council #2"), "Acme Council #2");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_safe_html_is_not_escaped() {
        let html = SafeHtml::trusted("<p>Hello &amp; welcome</p>");
        assert_eq!(html.to_string(), "<p>Hello &amp; welcome</p>");
        assert_eq!(html.as_str().len(), html.len());
        assert!(!html.is_empty());
        assert!(SafeHtml::default().is_empty());
    }
}
