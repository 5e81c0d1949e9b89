//! Lowercase filter implementation.

use crate::analysis::term_filter::TermFilter;

/// A filter that converts term text to lowercase.
///
/// Essential for case-insensitive search. ASCII-only terms take a fast path;
/// everything else goes through full Unicode lowercasing.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl TermFilter for LowercaseFilter {
    fn apply(&self, term: &str) -> String {
        if term.is_ascii() {
            term.to_ascii_lowercase()
        } else {
            term.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();

        assert_eq!(filter.apply("Hello"), "hello");
        assert_eq!(filter.apply("WORLD"), "world");
        assert_eq!(filter.apply("already"), "already");
    }

    #[test]
    fn test_lowercase_filter_unicode() {
        let filter = LowercaseFilter::new();

        assert_eq!(filter.apply("CAFÉ"), "café");
        assert_eq!(filter.apply("ÜBER"), "über");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
