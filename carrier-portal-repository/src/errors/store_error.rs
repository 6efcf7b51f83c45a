//! Index store error types.
//!
//! This module defines the unified error type for every call made against the
//! document store while rebuilding an index: connection setup, index and
//! alias management, and bulk insertion.

use thiserror::Error;

/// Unified errors from index store operations.
///
/// Used by the `IndexStore` trait for all backend calls. Every variant carries
/// a human readable message that includes the index or alias involved, so a
/// failed run can be diagnosed from the log line alone.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Failed to establish a connection to the store.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Failed to create an index instance.
    #[error("Index creation error: {0}")]
    IndexCreationError(String),

    /// The bulk request itself was rejected or could not be sent.
    #[error("Bulk insert error: {0}")]
    BulkInsertError(String),

    /// Failed to read or update an alias.
    #[error("Alias error: {0}")]
    AliasError(String),

    /// Failed to refresh an index instance.
    #[error("Refresh error: {0}")]
    RefreshError(String),

    /// Failed to delete an index instance.
    #[error("Index deletion error: {0}")]
    IndexDeletionError(String),

    /// Failed to parse a response from the store.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl StoreError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an index creation error.
    pub fn index_creation(msg: impl Into<String>) -> Self {
        Self::IndexCreationError(msg.into())
    }

    /// Create a bulk insert error.
    pub fn bulk_insert(msg: impl Into<String>) -> Self {
        Self::BulkInsertError(msg.into())
    }

    /// Create an alias error.
    pub fn alias(msg: impl Into<String>) -> Self {
        Self::AliasError(msg.into())
    }

    /// Create a refresh error.
    pub fn refresh(msg: impl Into<String>) -> Self {
        Self::RefreshError(msg.into())
    }

    /// Create an index deletion error.
    pub fn index_deletion(msg: impl Into<String>) -> Self {
        Self::IndexDeletionError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}
