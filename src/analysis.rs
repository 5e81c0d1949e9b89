//! Text analysis pipeline.
//!
//! Queries and documents pass through the same two-stage pipeline before
//! they reach the index: a [`tokenizer::Tokenizer`] splits raw text into
//! tokens, and a [`term_filter::TermFilter`] normalizes each token's text
//! (or discards it entirely, e.g. for stop words).

pub mod term_filter;
pub mod token;
pub mod tokenizer;
