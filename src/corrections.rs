//! Correction notes describing what normalization changed.

/// Note emitted when the input had stray or repeated spaces.
pub const NORMALIZED_WHITESPACE: &str = "Normalized whitespace";

/// Note emitted when the input had lower-case words.
pub const STANDARDIZED_CAPITALIZATION: &str = "Standardized capitalization";

/// Compare the raw input against what normalization produces and list the
/// corrections, at most one note per category.
///
/// Words of two bytes or fewer (state codes, short numbers) are exempt from
/// the capitalization check.
pub fn track_corrections(raw: &str) -> Vec<String> {
    let mut corrections = Vec::new();

    if raw != raw.trim() || raw.contains("  ") {
        corrections.push(NORMALIZED_WHITESPACE.to_string());
    }

    let needs_capitalization = raw.split_whitespace().any(|word| {
        let cleaned = word.trim_matches([',', '.', ';', ':']);
        cleaned.len() > 2 && cleaned.as_bytes()[0].is_ascii_lowercase()
    });
    if needs_capitalization {
        corrections.push(STANDARDIZED_CAPITALIZATION.to_string());
    }

    corrections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace() {
        assert_eq!(track_corrections("  123 Main St  "), vec![NORMALIZED_WHITESPACE]);
        assert_eq!(track_corrections("123  Main St"), vec![NORMALIZED_WHITESPACE]);
    }

    #[test]
    fn test_capitalization() {
        assert_eq!(track_corrections("123 main st"), vec![STANDARDIZED_CAPITALIZATION]);
    }

    #[test]
    fn test_both_in_order() {
        assert_eq!(
            track_corrections(" 123 main street"),
            vec![NORMALIZED_WHITESPACE, STANDARDIZED_CAPITALIZATION]
        );
    }

    #[test]
    fn test_short_tokens_exempt() {
        assert!(track_corrections("123 Main St, Albany, ny").is_empty());
        assert!(track_corrections("12 St, ab").is_empty());
    }

    #[test]
    fn test_clean_input() {
        assert!(track_corrections("123 Main St").is_empty());
    }
}
