//! High-level search engine that combines indexing and searching.
//!
//! [`SearchEngine`] owns the inverted index, the removed-document set, and
//! the analysis chain, and serializes all access behind a lock. Searching
//! takes the WRITE lock: a query compacts posting lists as a side effect
//! (lazy deletion), so it is not a read-only operation on the index.

use std::sync::Arc;

use ahash::AHashSet;
use parking_lot::RwLock;

use crate::analysis::term_filter::TermFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;
use crate::index::inverted_index::{IndexStats, InvertedIndex};
use crate::index::types::DocId;
use crate::search::collector::SearchHit;
use crate::search::searcher::{SearchParams, Searcher};

/// A search engine over an in-memory inverted index.
///
/// Documents and queries pass through the same tokenizer and term filter,
/// so query terms meet the index in the same normalized form they were
/// stored in.
///
/// Removal is lazy: [`remove_document`](SearchEngine::remove_document)
/// drops the document from the live collection and records its id; the
/// posting-list entries are excised by later searches that walk over them.
pub struct SearchEngine {
    /// The underlying index.
    index: RwLock<InvertedIndex>,

    /// Documents removed but possibly still present in posting lists.
    removed: RwLock<AHashSet<DocId>>,

    /// Tokenizer shared between indexing and searching.
    tokenizer: Arc<dyn Tokenizer>,

    /// Term filter shared between indexing and searching.
    filter: Arc<dyn TermFilter>,

    /// The searcher for executing queries.
    searcher: Searcher,
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("tokenizer", &self.tokenizer.name())
            .field("filter", &self.filter.name())
            .field("searcher", &self.searcher)
            .finish()
    }
}

impl SearchEngine {
    /// Create a new engine over the given fields.
    pub fn new<I, S>(
        fields: I,
        tokenizer: Arc<dyn Tokenizer>,
        filter: Arc<dyn TermFilter>,
        params: SearchParams,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let searcher = Searcher::new(tokenizer.clone(), filter.clone(), params);

        SearchEngine {
            index: RwLock::new(InvertedIndex::new(fields)),
            removed: RwLock::new(AHashSet::new()),
            tokenizer,
            filter,
            searcher,
        }
    }

    /// Add a document, one raw value per field.
    ///
    /// Each value is tokenized and filtered before indexing; discarded
    /// terms do not count toward field length.
    pub fn add_document(&self, doc_id: DocId, field_values: &[&str]) -> Result<()> {
        let mut field_terms = Vec::with_capacity(field_values.len());

        for value in field_values {
            let mut terms = Vec::new();
            for token in self.tokenizer.tokenize(value)? {
                let term = self.filter.apply(&token.text);
                if !term.is_empty() {
                    terms.push(term);
                }
            }
            field_terms.push(terms);
        }

        self.index.write().add_document(doc_id, field_terms)
    }

    /// Remove a document.
    ///
    /// Returns `true` if the document was live. The id is remembered so
    /// that later searches excise its posting entries on contact.
    pub fn remove_document(&self, doc_id: DocId) -> bool {
        let mut index = self.index.write();
        if index.remove_document(doc_id) {
            self.removed.write().insert(doc_id);
            true
        } else {
            false
        }
    }

    /// Execute a free-text query.
    ///
    /// Holds the write lock for the whole call: the query may compact
    /// posting lists, so it requires exclusive access to the index.
    pub fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        let mut index = self.index.write();
        let removed = self.removed.read();
        let removed_set = (!removed.is_empty()).then_some(&*removed);

        self.searcher.search(&mut index, query, removed_set)
    }

    /// Number of live documents.
    pub fn doc_count(&self) -> u64 {
        self.index.read().doc_count()
    }

    /// Check whether the engine holds no live documents.
    pub fn is_empty(&self) -> bool {
        self.index.read().is_empty()
    }

    /// Index statistics.
    pub fn stats(&self) -> IndexStats {
        self.index.read().stats()
    }
}
