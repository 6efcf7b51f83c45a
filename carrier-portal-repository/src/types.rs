//! Request and response types for index store operations.

use serde_json::Value;

/// A document ready to be written into an index instance.
///
/// The `id` becomes the persisted document identifier and `body` is stored as
/// the document source exactly as it was parsed from the input.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexDocument {
    /// The persisted document identifier.
    pub id: String,
    /// The full document source.
    pub body: Value,
}

impl IndexDocument {
    /// Create a new document.
    pub fn new(id: impl Into<String>, body: Value) -> Self {
        Self {
            id: id.into(),
            body,
        }
    }
}

/// A single document the store refused during a bulk insert.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkItemFailure {
    /// Identifier of the rejected document.
    pub id: String,
    /// Reason reported by the store.
    pub reason: String,
}

/// Summary of a bulk insert containing aggregate statistics and the failures.
///
/// A bulk request can be accepted as a whole while individual documents in it
/// are rejected. This struct exposes both so that callers can decide whether
/// a partial success is acceptable.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkInsertSummary {
    /// Total number of documents in the request.
    pub total: usize,
    /// Number of documents written.
    pub succeeded: usize,
    /// Number of documents rejected.
    pub failed: usize,
    /// Individual failures, in request order.
    pub failures: Vec<BulkItemFailure>,
}

impl BulkInsertSummary {
    /// Summary of a request in which every document was written.
    pub fn all_succeeded(total: usize) -> Self {
        Self {
            total,
            succeeded: total,
            failed: 0,
            failures: Vec::new(),
        }
    }

    /// Build a summary from the total document count and the rejected items.
    pub fn from_failures(total: usize, failures: Vec<BulkItemFailure>) -> Self {
        let failed = failures.len();
        Self {
            total,
            succeeded: total.saturating_sub(failed),
            failed,
            failures,
        }
    }

    /// Whether every document in the request was written.
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}
