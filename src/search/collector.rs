//! Result collection and ordering.

use std::cmp::Ordering;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::index::types::DocId;

/// One ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// The matching document.
    pub doc_id: DocId,

    /// Aggregate relevance score, strictly positive.
    pub score: f64,
}

/// Drain aggregated scores into a ranked result list.
///
/// Documents are ordered by descending score; equal scores tie-break on
/// ascending document id so results are deterministic. Only documents with
/// a strictly positive score are returned. `max_docs` caps the list length
/// when set.
pub fn collect_hits(totals: AHashMap<DocId, f64>, max_docs: Option<usize>) -> Vec<SearchHit> {
    let mut hits: Vec<SearchHit> = totals
        .into_iter()
        .filter(|&(_, score)| score > 0.0)
        .map(|(doc_id, score)| SearchHit { doc_id, score })
        .collect();

    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.doc_id.cmp(&b.doc_id))
    });

    if let Some(limit) = max_docs {
        hits.truncate(limit);
    }

    hits
}
