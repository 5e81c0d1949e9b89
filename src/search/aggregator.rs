//! Score aggregation across query terms and their expansions.

use ahash::AHashMap;

use crate::index::types::DocId;

/// Combines per-expansion contributions into one score per document.
///
/// Contributions from different original query terms add up (the query's
/// tokens are OR-combined). Within one original term, a document is
/// credited only once: the credit is the maximum single contribution seen
/// across that term's expansions, never their sum. This keeps a term that
/// expands to many near-duplicate variants from dominating the score
/// through sheer expansion count.
#[derive(Debug, Default)]
pub struct ScoreAggregator {
    /// Running total per document.
    totals: AHashMap<DocId, f64>,

    /// Credit already given per document for the current original term.
    credited: AHashMap<DocId, f64>,
}

impl ScoreAggregator {
    /// Create a new empty aggregator.
    pub fn new() -> Self {
        ScoreAggregator {
            totals: AHashMap::new(),
            credited: AHashMap::new(),
        }
    }

    /// Begin accumulating a new original query term.
    ///
    /// Resets the per-term credit tracking; totals carry over.
    pub fn start_term(&mut self) {
        self.credited.clear();
    }

    /// Fold in one expansion's contribution for a document.
    pub fn accumulate(&mut self, doc_id: DocId, contribution: f64) {
        match self.credited.get_mut(&doc_id) {
            None => {
                self.credited.insert(doc_id, contribution);
                *self.totals.entry(doc_id).or_insert(0.0) += contribution;
            }
            Some(credit) => {
                // Keep the best single expansion for this term
                if contribution > *credit {
                    *self.totals.entry(doc_id).or_insert(0.0) += contribution - *credit;
                    *credit = contribution;
                }
            }
        }
    }

    /// Number of documents with an accumulated score.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Check whether no document has been credited yet.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Consume the aggregator, yielding the per-document totals.
    pub fn into_totals(self) -> AHashMap<DocId, f64> {
        self.totals
    }
}
