//! Preheader text normalisation.

/// Mail clients show at most this many characters of preview text
pub const PREHEADER_MAX_CHARS: usize = 256;

/// Collapse whitespace runs to single spaces and cut to [`PREHEADER_MAX_CHARS`].
pub fn normalise_preheader(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let truncated: String = collapsed.chars().take(PREHEADER_MAX_CHARS).collect();
    truncated.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(
            normalise_preheader("  Hello\n\n  there,\tfriend  "),
            "Hello there, friend"
        );
    }

    #[test]
    fn test_truncates_to_limit() {
        let long = "word ".repeat(100);
        let preheader = normalise_preheader(&long);
        assert!(preheader.chars().count() <= PREHEADER_MAX_CHARS);
        assert!(!preheader.ends_with(' '));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let text = "é".repeat(300);
        assert_eq!(normalise_preheader(&text).chars().count(), PREHEADER_MAX_CHARS);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalise_preheader(""), "");
        assert_eq!(normalise_preheader(" \n "), "");
    }
}
