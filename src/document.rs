//! Document identifiers, statuses, and ranked search hits.

use serde::{Deserialize, Serialize};

/// Identifier of a document, assigned by the caller.
///
/// Ids are validated to be non-negative on insertion; the signed type exists
/// so that a negative id can be rejected with a proper error instead of
/// silently wrapping.
pub type DocumentId = i64;

/// Lifecycle status of a document.
///
/// The status is immutable after insertion. `Removed` is a caller-assignable
/// status value and is distinct from physical removal from the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentStatus {
    /// The document is current and searchable by default.
    Actual,
    /// The document is kept but considered irrelevant.
    Irrelevant,
    /// The document is banned from default result sets.
    Banned,
    /// The document is marked as removed by the caller.
    Removed,
}

/// A single ranked search hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier of the matched document.
    pub id: DocumentId,

    /// Accumulated TF-IDF relevance score.
    pub relevance: f64,

    /// Average rating of the document.
    pub rating: i32,
}

impl Document {
    /// Create a new search hit.
    pub fn new(id: DocumentId, relevance: f64, rating: i32) -> Self {
        Document {
            id,
            relevance,
            rating,
        }
    }
}
