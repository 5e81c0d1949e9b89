//! Filter chain implementation.
//!
//! Combines multiple term filters into a single pipeline. Filters are
//! applied left to right; if any filter discards the term (returns an empty
//! string), the chain short-circuits and the term is discarded.
//!
//! # Examples
//!
//! ```
//! use kopis::analysis::term_filter::TermFilter;
//! use kopis::analysis::term_filter::chain::ChainFilter;
//! use kopis::analysis::term_filter::lowercase::LowercaseFilter;
//! use kopis::analysis::term_filter::stop::StopFilter;
//!
//! let filter = ChainFilter::new()
//!     .push(LowercaseFilter::new())
//!     .push(StopFilter::new());
//!
//! assert_eq!(filter.apply("Quick"), "quick");
//! assert_eq!(filter.apply("The"), ""); // lowercased, then stopped
//! ```

use crate::analysis::term_filter::TermFilter;

/// A filter that applies a sequence of filters in order.
#[derive(Default)]
pub struct ChainFilter {
    /// The filters to apply, in order.
    filters: Vec<Box<dyn TermFilter>>,
}

impl ChainFilter {
    /// Create a new empty filter chain.
    ///
    /// An empty chain passes every term through unchanged.
    pub fn new() -> Self {
        ChainFilter {
            filters: Vec::new(),
        }
    }

    /// Append a filter to the end of the chain.
    pub fn push<F: TermFilter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the chain.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl std::fmt::Debug for ChainFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.filters.iter().map(|filter| filter.name()).collect();
        f.debug_struct("ChainFilter").field("filters", &names).finish()
    }
}

impl TermFilter for ChainFilter {
    fn apply(&self, term: &str) -> String {
        let mut current = term.to_string();

        for filter in &self.filters {
            current = filter.apply(&current);
            if current.is_empty() {
                break;
            }
        }

        current
    }

    fn name(&self) -> &'static str {
        "chain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::term_filter::lowercase::LowercaseFilter;
    use crate::analysis::term_filter::stop::StopFilter;

    #[test]
    fn test_empty_chain_passes_through() {
        let filter = ChainFilter::new();

        assert_eq!(filter.apply("Hello"), "Hello");
        assert!(filter.is_empty());
    }

    #[test]
    fn test_chain_applies_in_order() {
        let filter = ChainFilter::new()
            .push(LowercaseFilter::new())
            .push(StopFilter::new());

        // "The" only matches the stop list after lowercasing
        assert_eq!(filter.apply("The"), "");
        assert_eq!(filter.apply("Search"), "search");
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_chain_short_circuits_on_discard() {
        let filter = ChainFilter::new()
            .push(StopFilter::from_words(["noise"]))
            .push(LowercaseFilter::new());

        assert_eq!(filter.apply("noise"), "");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(ChainFilter::new().name(), "chain");
    }
}
