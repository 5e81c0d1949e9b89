//! The in-memory inverted index.

use ahash::AHashMap;

use crate::error::{KopisError, Result};
use crate::index::posting::{Posting, PostingArena};
use crate::index::trie::Trie;
use crate::index::types::{DocId, FieldStatistics};

/// Stored details for one indexed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocEntry {
    /// Length of each field in terms, aligned with the index's fields.
    pub field_lengths: Vec<u32>,
}

/// Statistics about an index.
#[derive(Debug, Clone)]
pub struct IndexStats {
    /// Number of live documents in the index.
    pub doc_count: u64,

    /// Number of documents ever added, including removed ones.
    pub added_count: u64,

    /// Number of trie nodes, including the root.
    pub node_count: u64,

    /// Number of posting slots ever allocated, including unlinked ones.
    pub posting_count: u64,
}

/// A trie-shaped inverted index over a fixed set of fields.
///
/// The index owns the document collection, the term trie, and the posting
/// arena. It is created with an ordered list of field names; every document
/// supplies one value per field, in that order.
///
/// Searching mutates the index: posting-list entries for removed documents
/// are physically unlinked when a query walks over them, so the query entry
/// point takes the index by mutable reference. Callers that share an index
/// must serialize all access for the duration of a query (see
/// [`crate::engine::SearchEngine`]).
#[derive(Debug)]
pub struct InvertedIndex {
    /// Ordered field names.
    fields: Vec<String>,

    /// Live document collection.
    pub(crate) docs: AHashMap<DocId, DocEntry>,

    /// The term trie.
    pub(crate) trie: Trie,

    /// The posting arena.
    pub(crate) postings: PostingArena,

    /// Running total of field lengths, one per field.
    total_lengths: Vec<u64>,

    /// Number of documents ever added. Never decremented; average field
    /// lengths are a build-time snapshot.
    added_count: u64,
}

impl InvertedIndex {
    /// Create a new empty index over the given fields.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        let field_count = fields.len();

        InvertedIndex {
            fields,
            docs: AHashMap::new(),
            trie: Trie::new(),
            postings: PostingArena::new(),
            total_lengths: vec![0; field_count],
            added_count: 0,
        }
    }

    /// Ordered field names of this index.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Number of live documents.
    pub fn doc_count(&self) -> u64 {
        self.docs.len() as u64
    }

    /// Check whether the index holds no live documents.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Check whether a document is present in the live collection.
    pub fn contains_doc(&self, doc_id: DocId) -> bool {
        self.docs.contains_key(&doc_id)
    }

    /// Stored details for a document, if it is live.
    pub fn doc(&self, doc_id: DocId) -> Option<&DocEntry> {
        self.docs.get(&doc_id)
    }

    /// Per-field statistics for scoring.
    ///
    /// Averages are computed over every document ever added; they are not
    /// adjusted when documents are removed.
    pub fn field_statistics(&self) -> Vec<FieldStatistics> {
        self.total_lengths
            .iter()
            .map(|&total| FieldStatistics {
                avg_length: if self.added_count == 0 {
                    0.0
                } else {
                    total as f64 / self.added_count as f64
                },
            })
            .collect()
    }

    /// Index statistics.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            doc_count: self.doc_count(),
            added_count: self.added_count,
            node_count: self.trie.len() as u64,
            posting_count: self.postings.len() as u64,
        }
    }

    /// Add a document from pre-analyzed terms.
    ///
    /// `field_terms` holds the normalized terms of each field, aligned with
    /// the index's fields; field length is the term count. For each distinct
    /// term one posting is created, carrying that term's frequency in every
    /// field, and prepended to the term's posting list.
    pub fn add_document(&mut self, doc_id: DocId, field_terms: Vec<Vec<String>>) -> Result<()> {
        if field_terms.len() != self.fields.len() {
            return Err(KopisError::invalid_argument(format!(
                "expected {} fields, got {}",
                self.fields.len(),
                field_terms.len()
            )));
        }
        if self.docs.contains_key(&doc_id) {
            return Err(KopisError::index(format!(
                "document {doc_id} is already indexed"
            )));
        }

        let field_count = self.fields.len();
        let field_lengths: Vec<u32> = field_terms.iter().map(|terms| terms.len() as u32).collect();

        // Per-term frequency counts across all fields.
        let mut counts: AHashMap<&str, Vec<u32>> = AHashMap::new();
        for (field, terms) in field_terms.iter().enumerate() {
            for term in terms {
                if term.is_empty() {
                    continue;
                }
                counts.entry(term.as_str()).or_insert_with(|| vec![0; field_count])[field] += 1;
            }
        }

        for (term, freqs) in counts {
            let node = self.trie.insert(term);
            let head = self.trie.node(node).posting_head;
            let posting = self.postings.push(Posting {
                doc_id,
                freqs,
                next: head,
            });
            self.trie.node_mut(node).posting_head = Some(posting);
        }

        for (field, &length) in field_lengths.iter().enumerate() {
            self.total_lengths[field] += length as u64;
        }
        self.added_count += 1;
        self.docs.insert(doc_id, DocEntry { field_lengths });

        Ok(())
    }

    /// Remove a document from the live collection.
    ///
    /// Returns `true` if the document was present. Posting-list entries are
    /// not touched here; they are excised lazily when a query encounters
    /// them with the document in its removed set.
    pub fn remove_document(&mut self, doc_id: DocId) -> bool {
        self.docs.remove(&doc_id).is_some()
    }
}
