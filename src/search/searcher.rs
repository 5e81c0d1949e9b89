//! Query execution over an inverted index.

use std::sync::Arc;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::analysis::term_filter::TermFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{KopisError, Result};
use crate::index::inverted_index::InvertedIndex;
use crate::index::types::DocId;
use crate::search::aggregator::ScoreAggregator;
use crate::search::collector::{SearchHit, collect_hits};
use crate::search::expander::expand_prefix;
use crate::search::scanner::scan_postings;
use crate::search::scorer::{Bm25Params, Bm25Scorer, expansion_boost};

/// Configuration for search operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// Multiplier per field, aligned with the index's fields. Must match
    /// the index's field count.
    pub field_boosts: Vec<f64>,

    /// BM25 ranking constants.
    pub bm25: Bm25Params,

    /// Maximum number of hits to return. `None` returns every
    /// positive-scoring document.
    pub max_docs: Option<usize>,
}

impl SearchParams {
    /// Create search parameters with the given per-field boosts and
    /// default BM25 constants.
    pub fn new(field_boosts: Vec<f64>) -> Self {
        SearchParams {
            field_boosts,
            bm25: Bm25Params::default(),
            max_docs: None,
        }
    }

    /// Set the BM25 ranking constants.
    pub fn bm25(mut self, bm25: Bm25Params) -> Self {
        self.bm25 = bm25;
        self
    }

    /// Set the maximum number of hits to return.
    pub fn max_docs(mut self, max_docs: usize) -> Self {
        self.max_docs = Some(max_docs);
        self
    }
}

/// Executes free-text queries against an [`InvertedIndex`].
///
/// Query tokens are implicitly OR-combined: a document matching any term
/// is a candidate, and matches on several terms add up.
pub struct Searcher {
    tokenizer: Arc<dyn Tokenizer>,
    filter: Arc<dyn TermFilter>,
    params: SearchParams,
}

impl std::fmt::Debug for Searcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher")
            .field("tokenizer", &self.tokenizer.name())
            .field("filter", &self.filter.name())
            .field("params", &self.params)
            .finish()
    }
}

impl Searcher {
    /// Create a new searcher.
    pub fn new(
        tokenizer: Arc<dyn Tokenizer>,
        filter: Arc<dyn TermFilter>,
        params: SearchParams,
    ) -> Self {
        Searcher {
            tokenizer,
            filter,
            params,
        }
    }

    /// The configured search parameters.
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Execute a free-text query.
    ///
    /// Takes the index by mutable reference because scanning compacts
    /// posting lists: entries for documents in `removed` are physically
    /// unlinked as they are encountered. Callers sharing an index across
    /// threads must hold exclusive access for the whole call.
    ///
    /// Returns hits ordered by descending score (ties on ascending
    /// document id), containing only documents with a strictly positive
    /// score.
    pub fn search(
        &self,
        index: &mut InvertedIndex,
        query: &str,
        removed: Option<&AHashSet<DocId>>,
    ) -> Result<Vec<SearchHit>> {
        if self.params.field_boosts.len() != index.field_count() {
            return Err(KopisError::invalid_argument(format!(
                "expected {} field boosts, got {}",
                index.field_count(),
                self.params.field_boosts.len()
            )));
        }

        // Averages are a build-time snapshot; compaction does not move them
        let stats = index.field_statistics();
        let mut aggregator = ScoreAggregator::new();

        for token in self.tokenizer.tokenize(query)? {
            let term = self.filter.apply(&token.text);
            if term.is_empty() {
                continue;
            }

            aggregator.start_term();

            for (expanded, node) in expand_prefix(&index.trie, &term) {
                let survivors = scan_postings(index, node, removed);
                let doc_freq = survivors.len() as u64;
                if doc_freq == 0 {
                    continue;
                }

                let scorer = Bm25Scorer::new(
                    self.params.bm25,
                    index.doc_count(),
                    doc_freq,
                    expansion_boost(&term, &expanded),
                );

                for posting_id in survivors {
                    let posting = index.postings.get(posting_id);
                    let Some(doc) = index.doc(posting.doc_id) else {
                        continue;
                    };

                    let contribution = scorer.score(
                        &posting.freqs,
                        &doc.field_lengths,
                        &stats,
                        &self.params.field_boosts,
                    );
                    if contribution > 0.0 {
                        aggregator.accumulate(posting.doc_id, contribution);
                    }
                }
            }
        }

        Ok(collect_hits(aggregator.into_totals(), self.params.max_docs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::term_filter::lowercase::LowercaseFilter;
    use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn searcher(field_boosts: Vec<f64>) -> Searcher {
        Searcher::new(
            Arc::new(WhitespaceTokenizer::new()),
            Arc::new(LowercaseFilter::new()),
            SearchParams::new(field_boosts),
        )
    }

    fn two_doc_index() -> InvertedIndex {
        let mut index = InvertedIndex::new(["title", "text"]);
        index
            .add_document(
                1,
                vec![terms(&["a", "b", "c"]), terms(&["hello", "world"])],
            )
            .unwrap();
        index
            .add_document(
                2,
                vec![terms(&["c", "d", "e"]), terms(&["lorem", "ipsum"])],
            )
            .unwrap();
        index
    }

    #[test]
    fn test_single_term_single_match() {
        let mut index = two_doc_index();

        let hits = searcher(vec![1.0, 1.0])
            .search(&mut index, "a", None)
            .unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].doc_id, 1);
        assert!(hits[0].score > 0.0);
    }

    #[test]
    fn test_shared_term_matches_both() {
        let mut index = two_doc_index();

        let hits = searcher(vec![1.0, 1.0])
            .search(&mut index, "c", None)
            .unwrap();

        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| h.score > 0.0));
    }

    #[test]
    fn test_terms_are_or_combined() {
        let mut index = two_doc_index();

        let hits = searcher(vec![1.0, 1.0])
            .search(&mut index, "a d", None)
            .unwrap();

        let mut ids: Vec<DocId> = hits.iter().map(|h| h.doc_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_empty_query() {
        let mut index = two_doc_index();

        let hits = searcher(vec![1.0, 1.0])
            .search(&mut index, "   ", None)
            .unwrap();

        assert!(hits.is_empty());
    }

    #[test]
    fn test_unknown_term() {
        let mut index = two_doc_index();

        let hits = searcher(vec![1.0, 1.0])
            .search(&mut index, "zzz", None)
            .unwrap();

        assert!(hits.is_empty());
    }

    #[test]
    fn test_boost_count_mismatch_fails_fast() {
        let mut index = two_doc_index();

        let result = searcher(vec![1.0]).search(&mut index, "a", None);
        assert!(result.is_err());
    }

    #[test]
    fn test_prefix_expansion_finds_extensions() {
        let mut index = InvertedIndex::new(["body"]);
        index.add_document(1, vec![terms(&["search"])]).unwrap();
        index.add_document(2, vec![terms(&["searching"])]).unwrap();

        let hits = searcher(vec![1.0]).search(&mut index, "sear", None).unwrap();

        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_exact_match_outranks_expansion() {
        let mut index = InvertedIndex::new(["body"]);
        index.add_document(1, vec![terms(&["search"])]).unwrap();
        index.add_document(2, vec![terms(&["searching"])]).unwrap();

        let hits = searcher(vec![1.0])
            .search(&mut index, "search", None)
            .unwrap();

        // Document 1 holds the exact term (boost 1.0); document 2 only the
        // penalized expansion
        assert_eq!(hits[0].doc_id, 1);
        assert_eq!(hits[1].doc_id, 2);
        assert!(hits[0].score > hits[1].score);
    }

    #[test]
    fn test_removed_document_never_returned() {
        let mut index = two_doc_index();
        index.remove_document(1);
        let removed = AHashSet::from_iter([1]);

        let hits = searcher(vec![1.0, 1.0])
            .search(&mut index, "a", Some(&removed))
            .unwrap();

        assert!(hits.is_empty());
    }

    #[test]
    fn test_repeated_query_after_compaction_is_stable() {
        let mut index = two_doc_index();
        index.remove_document(1);
        let removed = AHashSet::from_iter([1]);
        let searcher = searcher(vec![1.0, 1.0]);

        let first = searcher.search(&mut index, "c", Some(&removed)).unwrap();
        let second = searcher.search(&mut index, "c", Some(&removed)).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].doc_id, 2);
    }

    #[test]
    fn test_max_docs_limits_results() {
        let mut index = two_doc_index();

        let searcher = Searcher::new(
            Arc::new(WhitespaceTokenizer::new()),
            Arc::new(LowercaseFilter::new()),
            SearchParams::new(vec![1.0, 1.0]).max_docs(1),
        );

        let hits = searcher.search(&mut index, "c", None).unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_higher_term_frequency_ranks_first() {
        let mut index = InvertedIndex::new(["body"]);
        index
            .add_document(1, vec![terms(&["rust", "rust", "rust", "go"])])
            .unwrap();
        index
            .add_document(2, vec![terms(&["rust", "go", "go", "go"])])
            .unwrap();

        let hits = searcher(vec![1.0]).search(&mut index, "rust", None).unwrap();

        assert_eq!(hits[0].doc_id, 1);
        assert!(hits[0].score > hits[1].score);
    }
}
