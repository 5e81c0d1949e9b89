//! Stop filter implementation.
//!
//! This module provides a filter that discards common words (stop words)
//! that typically don't contribute to search relevance. Includes a default
//! English stop word list, with support for custom word lists.
//!
//! # Examples
//!
//! ```
//! use kopis::analysis::term_filter::TermFilter;
//! use kopis::analysis::term_filter::stop::StopFilter;
//!
//! let filter = StopFilter::new(); // Uses default English stop words
//!
//! // "the" is discarded as a stop word
//! assert_eq!(filter.apply("the"), "");
//! assert_eq!(filter.apply("quick"), "quick");
//! ```

use ahash::AHashSet;

use crate::analysis::term_filter::TermFilter;

/// Default English stop words list.
///
/// Common English words that are typically filtered out during indexing.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// A filter that discards stop words.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of words to discard.
    words: AHashSet<String>,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop word list.
    pub fn new() -> Self {
        Self::from_words(DEFAULT_ENGLISH_STOP_WORDS.iter().copied())
    }

    /// Create a new stop filter from a custom word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a word is in the stop list.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the stop list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the stop list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TermFilter for StopFilter {
    fn apply(&self, term: &str) -> String {
        if self.words.contains(term) {
            String::new()
        } else {
            term.to_string()
        }
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_filter_default_words() {
        let filter = StopFilter::new();

        assert_eq!(filter.apply("the"), "");
        assert_eq!(filter.apply("and"), "");
        assert_eq!(filter.apply("quick"), "quick");
        assert_eq!(filter.apply("brown"), "brown");
    }

    #[test]
    fn test_stop_filter_custom_words() {
        let filter = StopFilter::from_words(["foo", "bar"]);

        assert_eq!(filter.apply("foo"), "");
        assert_eq!(filter.apply("bar"), "");
        assert_eq!(filter.apply("the"), "the");
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_stop_filter_is_case_sensitive() {
        // Stop matching happens after lowercasing in a typical chain
        let filter = StopFilter::new();

        assert!(filter.is_stop_word("the"));
        assert!(!filter.is_stop_word("The"));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
