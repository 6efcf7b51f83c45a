//! Error types for an index load.

use carrier_portal_repository::{BulkInsertSummary, StoreError};
use thiserror::Error;

/// Errors that can occur while rebuilding an index.
///
/// Line numbers are 1-based and count every input line, blank ones included.
#[derive(Error, Debug)]
pub enum LoadError {
    /// An input line is not a JSON object.
    #[error("Invalid document on line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// A document has no identifier field.
    #[error("Document on line {line} has no '{field}' field")]
    MissingIdentifier { line: usize, field: String },

    /// A document's identifier cannot be used as a document ID.
    #[error("Document on line {line} has an unusable '{field}' value: {value}")]
    InvalidIdentifier {
        line: usize,
        field: String,
        value: String,
    },

    /// Reading the input failed.
    #[error("Input error: {0}")]
    InputError(String),

    /// The store rejected some documents of a bulk insert.
    #[error("Bulk insert into '{index}' rejected {failed} of {total} documents: {first_reason}")]
    PartialBulkError {
        index: String,
        failed: usize,
        total: usize,
        first_reason: String,
    },

    /// Error from the index store.
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}

impl LoadError {
    /// Create a parse error for the given input line.
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: msg.into(),
        }
    }

    /// Create a partial bulk error from an incomplete bulk summary.
    pub fn partial_bulk(index: impl Into<String>, summary: &BulkInsertSummary) -> Self {
        let first_reason = summary
            .failures
            .first()
            .map(|failure| format!("{}: {}", failure.id, failure.reason))
            .unwrap_or_else(|| "no reason reported".to_string());

        Self::PartialBulkError {
            index: index.into(),
            failed: summary.failed,
            total: summary.total,
            first_reason,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        Self::InputError(err.to_string())
    }
}
