//! Search-term sanitization for list filters.
//!
//! Raw search input is reduced to word characters, whitespace, and a small
//! punctuation set before it is bound into ILIKE patterns, and runs of
//! whitespace collapse to single spaces.

/// Strip special characters and normalize spacing.
pub fn sanitize_search_term(input: &str) -> String {
    let clean: String = input
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, '_' | '-' | ',' | '.' | '@'))
        .collect();
    clean.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep only letters and numbers.
pub fn sanitize_alphanumeric(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_special_characters() {
        assert_eq!(sanitize_search_term("par%ace'tamol"), "paracetamol");
        assert_eq!(sanitize_search_term("a;b|c"), "abc");
    }

    #[test]
    fn keeps_allowed_punctuation() {
        assert_eq!(
            sanitize_search_term("clerk@example.com, box-12"),
            "clerk@example.com, box-12"
        );
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(sanitize_search_term("  main   office \t a "), "main office a");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(sanitize_search_term(""), "");
        assert_eq!(sanitize_search_term("%;'\""), "");
    }

    #[test]
    fn alphanumeric_only() {
        assert_eq!(sanitize_alphanumeric("AK-7F3D 8E2A!"), "AK7F3D8E2A");
    }
}
