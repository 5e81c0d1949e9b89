//! Type definitions shared across the index module.

use serde::{Deserialize, Serialize};

/// Identifier of an indexed document.
pub type DocId = u64;

/// Per-field statistics used for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldStatistics {
    /// Average field length across the document collection, in terms.
    ///
    /// This is a build-time snapshot: it reflects every document ever added
    /// and is never adjusted when documents are removed.
    pub avg_length: f64,
}
