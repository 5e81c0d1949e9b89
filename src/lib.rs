//! # Kopis
//!
//! A prefix-expanding BM25 search library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - In-memory trie-shaped inverted index
//! - Prefix expansion of query terms
//! - BM25 scoring with per-field boosting
//! - Lazy compaction of deleted documents during search
//! - Flexible text analysis pipeline

pub mod analysis;
pub mod engine;
pub mod error;
pub mod index;
pub mod search;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
