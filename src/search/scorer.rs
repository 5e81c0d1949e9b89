//! BM25 scoring for ranking search results.

use serde::{Deserialize, Serialize};

use crate::index::types::FieldStatistics;

/// BM25 ranking constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Params {
    /// Term-frequency saturation parameter.
    pub k1: f64,
    /// Field-length normalization parameter.
    pub b: f64,
}

impl Bm25Params {
    /// Create BM25 parameters.
    pub fn new(k1: f64, b: f64) -> Self {
        Bm25Params { k1, b }
    }
}

impl Default for Bm25Params {
    fn default() -> Self {
        Bm25Params { k1: 1.2, b: 0.75 }
    }
}

/// Inverse document frequency of a term.
///
/// `idf = ln(1 + (N - df + 0.5) / (df + 0.5))`
///
/// The `1 +` offset keeps the value non-negative for terms occurring in
/// most documents, unlike classic BM25 idf which goes negative there. The
/// `+0.5` offsets keep the formula defined even with zero live documents.
pub fn idf(total_docs: u64, doc_freq: u64) -> f64 {
    let n = total_docs as f64;
    let df = doc_freq as f64;

    (1.0 + (n - df + 0.5) / (df + 0.5)).ln()
}

/// Boost applied to an expanded term's contribution.
///
/// The exact original term gets 1.0. Longer expansions get
/// `ln(1 + 1/(1 + lengthDiff))`, a decaying bonus strictly between 0 and 1
/// that penalizes less specific matches.
pub fn expansion_boost(original: &str, expanded: &str) -> f64 {
    if original == expanded {
        return 1.0;
    }

    let diff = expanded
        .chars()
        .count()
        .saturating_sub(original.chars().count());

    (1.0 + 1.0 / (1.0 + diff as f64)).ln()
}

/// Scores documents for one expanded term.
///
/// Created once per (original term, expansion) pair; the idf and expansion
/// boost are fixed for every document the expansion matches.
#[derive(Debug, Clone)]
pub struct Bm25Scorer {
    params: Bm25Params,
    idf: f64,
    expansion_boost: f64,
}

impl Bm25Scorer {
    /// Create a scorer for an expanded term.
    pub fn new(params: Bm25Params, total_docs: u64, doc_freq: u64, expansion_boost: f64) -> Self {
        Bm25Scorer {
            params,
            idf: idf(total_docs, doc_freq),
            expansion_boost,
        }
    }

    /// The idf component of this scorer.
    pub fn idf(&self) -> f64 {
        self.idf
    }

    /// Saturated term frequency for one field.
    ///
    /// `tf' = (k1 + 1)·tf / (k1·((1 - b) + b·len/avg) + tf)`
    ///
    /// Callers must skip fields with `tf == 0`; for any field with a
    /// nonzero frequency the average length is necessarily positive.
    fn field_tf(&self, tf: f64, field_length: f64, avg_length: f64) -> f64 {
        let Bm25Params { k1, b } = self.params;
        let norm = (1.0 - b) + b * (field_length / avg_length);

        ((k1 + 1.0) * tf) / (k1 * norm + tf)
    }

    /// Score one document's contribution for this expanded term.
    ///
    /// Sums the per-field contributions `tf'·idf·fieldBoost·expansionBoost`
    /// over every field where the term occurs.
    pub fn score(
        &self,
        freqs: &[u32],
        field_lengths: &[u32],
        stats: &[FieldStatistics],
        field_boosts: &[f64],
    ) -> f64 {
        let mut total = 0.0;

        for (field, &tf) in freqs.iter().enumerate() {
            if tf == 0 {
                continue;
            }

            let tf = self.field_tf(
                tf as f64,
                field_lengths[field] as f64,
                stats[field].avg_length,
            );
            total += tf * self.idf * field_boosts[field] * self.expansion_boost;
        }

        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(avgs: &[f64]) -> Vec<FieldStatistics> {
        avgs.iter().map(|&avg_length| FieldStatistics { avg_length }).collect()
    }

    #[test]
    fn test_idf_is_never_negative() {
        // A term occurring in every document still gets a positive idf
        assert!(idf(100, 100) > 0.0);
        assert!(idf(1, 1) > 0.0);
    }

    #[test]
    fn test_idf_decreases_with_doc_freq() {
        assert!(idf(100, 1) > idf(100, 10));
        assert!(idf(100, 10) > idf(100, 100));
    }

    #[test]
    fn test_idf_defined_with_zero_docs() {
        let value = idf(0, 0);
        assert!(value.is_finite());
        assert!(value > 0.0);
    }

    #[test]
    fn test_expansion_boost_exact_term() {
        assert_eq!(expansion_boost("rust", "rust"), 1.0);
    }

    #[test]
    fn test_expansion_boost_decays_with_length() {
        let one = expansion_boost("rust", "rusty");
        let three = expansion_boost("rust", "rustier!");

        assert!(one > 0.0 && one < 1.0);
        assert!(three > 0.0);
        assert!(one > three);
    }

    #[test]
    fn test_score_is_zero_without_occurrences() {
        let scorer = Bm25Scorer::new(Bm25Params::default(), 10, 2, 1.0);

        let score = scorer.score(&[0, 0], &[5, 5], &stats(&[5.0, 5.0]), &[1.0, 1.0]);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_score_increases_with_term_frequency() {
        let scorer = Bm25Scorer::new(Bm25Params::default(), 10, 2, 1.0);
        let field_stats = stats(&[5.0]);

        let one = scorer.score(&[1], &[5], &field_stats, &[1.0]);
        let two = scorer.score(&[2], &[5], &field_stats, &[1.0]);
        let three = scorer.score(&[3], &[5], &field_stats, &[1.0]);

        assert!(two > one);
        assert!(three > two);
    }

    #[test]
    fn test_score_saturates() {
        let scorer = Bm25Scorer::new(Bm25Params::default(), 10, 2, 1.0);
        let field_stats = stats(&[5.0]);

        let low = scorer.score(&[2], &[5], &field_stats, &[1.0])
            - scorer.score(&[1], &[5], &field_stats, &[1.0]);
        let high = scorer.score(&[10], &[5], &field_stats, &[1.0])
            - scorer.score(&[9], &[5], &field_stats, &[1.0]);

        // Each additional occurrence is worth less than the previous one
        assert!(high < low);
    }

    #[test]
    fn test_longer_fields_score_lower() {
        let scorer = Bm25Scorer::new(Bm25Params::default(), 10, 2, 1.0);
        let field_stats = stats(&[5.0]);

        let short = scorer.score(&[1], &[3], &field_stats, &[1.0]);
        let long = scorer.score(&[1], &[20], &field_stats, &[1.0]);

        assert!(short > long);
    }

    #[test]
    fn test_field_boost_scales_contribution() {
        let scorer = Bm25Scorer::new(Bm25Params::default(), 10, 2, 1.0);
        let field_stats = stats(&[5.0]);

        let plain = scorer.score(&[1], &[5], &field_stats, &[1.0]);
        let boosted = scorer.score(&[1], &[5], &field_stats, &[2.0]);

        assert!((boosted - plain * 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_multi_field_contributions_sum() {
        let scorer = Bm25Scorer::new(Bm25Params::default(), 10, 2, 1.0);
        let field_stats = stats(&[5.0, 5.0]);

        let first = scorer.score(&[1, 0], &[5, 5], &field_stats, &[1.0, 1.0]);
        let second = scorer.score(&[0, 1], &[5, 5], &field_stats, &[1.0, 1.0]);
        let both = scorer.score(&[1, 1], &[5, 5], &field_stats, &[1.0, 1.0]);

        assert!((both - (first + second)).abs() < 1e-12);
    }

    #[test]
    fn test_default_params() {
        let params = Bm25Params::default();

        assert_eq!(params.k1, 1.2);
        assert_eq!(params.b, 0.75);
    }
}
