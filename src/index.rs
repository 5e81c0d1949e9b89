//! In-memory inverted index.
//!
//! The index stores one trie over all indexed terms; each trie node that
//! ends a stored term carries the head of a singly linked posting list. Both
//! structures live in append-only arenas and link to each other by arena
//! index, so traversal follows the classic child/sibling/next pointer shape
//! without owning-pointer cycles.

pub mod inverted_index;
pub mod posting;
pub mod trie;
pub mod types;

pub use inverted_index::{DocEntry, IndexStats, InvertedIndex};
pub use posting::{Posting, PostingArena, PostingId};
pub use trie::{NodeId, Trie, TrieNode};
pub use types::{DocId, FieldStatistics};
