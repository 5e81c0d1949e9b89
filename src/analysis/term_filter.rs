//! Term filter implementations for token normalization.
//!
//! This module provides filters that transform individual terms produced by
//! tokenizers. A filter returns the normalized term, or an empty string to
//! discard the term entirely. Discarded terms never reach the index or the
//! query pipeline, which is how stop-word elimination is implemented.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts terms to lowercase
//! - [`stop::StopFilter`] - Discards stop words
//! - [`chain::ChainFilter`] - Applies a sequence of filters in order
//!
//! # Examples
//!
//! ```
//! use kopis::analysis::term_filter::TermFilter;
//! use kopis::analysis::term_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! assert_eq!(filter.apply("Hello"), "hello");
//! ```

/// Trait for filters that normalize a single term.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use kopis::analysis::term_filter::TermFilter;
///
/// struct TruncateFilter;
///
/// impl TermFilter for TruncateFilter {
///     fn apply(&self, term: &str) -> String {
///         term.chars().take(8).collect()
///     }
///
///     fn name(&self) -> &'static str {
///         "truncate"
///     }
/// }
/// ```
pub trait TermFilter: Send + Sync {
    /// Normalize the given term.
    ///
    /// Returns the normalized form, or an empty string to discard the term.
    fn apply(&self, term: &str) -> String;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod chain;
pub mod lowercase;
pub mod stop;
