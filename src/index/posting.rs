//! Posting lists for the inverted index.
//!
//! A posting records that one document contains a given term, with one
//! term-frequency count per field. Postings for the same term form a singly
//! linked list headed at the term's trie node; list order carries no
//! guarantee (insertion prepends).

use crate::index::types::DocId;

/// Index of a posting in the posting arena.
pub type PostingId = u32;

/// One entry in a term's posting list.
#[derive(Debug, Clone)]
pub struct Posting {
    /// The document containing the term.
    pub doc_id: DocId,

    /// Term-frequency counts, one per field, aligned with the index's
    /// field statistics.
    pub freqs: Vec<u32>,

    /// Next posting for the same term, if any.
    pub next: Option<PostingId>,
}

/// Append-only arena holding every posting of the index.
///
/// Unlinking a posting from its list leaves the arena slot in place; slots
/// are only reclaimed by rebuilding the index.
#[derive(Debug, Default)]
pub struct PostingArena {
    postings: Vec<Posting>,
}

impl PostingArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        PostingArena {
            postings: Vec::new(),
        }
    }

    /// Append a posting and return its id.
    pub fn push(&mut self, posting: Posting) -> PostingId {
        let id = self.postings.len() as PostingId;
        self.postings.push(posting);
        id
    }

    /// Get a shared reference to a posting.
    pub fn get(&self, id: PostingId) -> &Posting {
        &self.postings[id as usize]
    }

    /// Get a mutable reference to a posting.
    pub fn get_mut(&mut self, id: PostingId) -> &mut Posting {
        &mut self.postings[id as usize]
    }

    /// Number of postings ever allocated, including unlinked ones.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Check whether the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
