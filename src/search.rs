//! Query-time ranking over the inverted index.
//!
//! A query runs through a fixed pipeline: the analysis chain produces
//! normalized terms, each term is expanded by prefix over the trie
//! ([`expander`]), every expansion's posting list is scanned once with
//! lazy removal of deleted documents ([`scanner`]), surviving postings are
//! scored with BM25 ([`scorer`]), scores are combined per document
//! ([`aggregator`]), and the result list is built ([`collector`]).
//! [`searcher::Searcher`] drives the whole pipeline.

pub mod aggregator;
pub mod collector;
pub mod expander;
pub mod scanner;
pub mod scorer;
pub mod searcher;

pub use collector::SearchHit;
pub use scorer::Bm25Params;
pub use searcher::{SearchParams, Searcher};
