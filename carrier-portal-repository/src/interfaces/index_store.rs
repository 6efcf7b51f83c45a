//! Index store trait definition.
//!
//! This module defines the abstract interface for the index and alias
//! operations needed to rebuild a search index behind an alias, allowing for
//! different backend implementations (OpenSearch, Elasticsearch, mocks).

use std::collections::BTreeSet;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::StoreError;
use crate::types::{BulkInsertSummary, IndexDocument};

/// Abstracts the underlying document store (OpenSearch, Elasticsearch, etc.).
///
/// Implementations are injected into the index swap loader, which calls the
/// operations strictly one after another. Each method performs a single
/// attempt; retrying is left to the transport configuration of the
/// implementation.
///
/// All methods return `Result<T, StoreError>` for consistent error handling
/// across different backend implementations.
#[async_trait]
pub trait IndexStore: Send + Sync {
    /// Get the names of the indices an alias currently points to.
    ///
    /// An alias that does not exist yet is not an error: the returned set is
    /// simply empty.
    ///
    /// # Arguments
    ///
    /// * `alias` - The alias name
    ///
    /// # Returns
    ///
    /// * `Ok(BTreeSet<String>)` - The backing index names (possibly empty)
    /// * `Err(StoreError)` - If the store could not be queried
    async fn get_alias_targets(&self, alias: &str) -> Result<BTreeSet<String>, StoreError>;

    /// Create a new, empty index with the given settings and mappings.
    ///
    /// # Arguments
    ///
    /// * `index` - The name of the index to create
    /// * `schema` - Settings/mappings body, passed through untouched
    async fn create_index(&self, index: &str, schema: &Value) -> Result<(), StoreError>;

    /// Insert documents into an index in a single bulk request.
    ///
    /// Documents are written with their `id` as the persisted identifier and
    /// `body` as the source. The summary reports per-document outcomes; it is
    /// up to the caller to decide how to treat partial failures.
    ///
    /// # Returns
    ///
    /// * `Ok(BulkInsertSummary)` - Aggregate and per-document failures
    /// * `Err(StoreError)` - If the bulk request failed entirely
    async fn bulk_insert(
        &self,
        index: &str,
        documents: &[IndexDocument],
    ) -> Result<BulkInsertSummary, StoreError>;

    /// Make every document inserted so far visible to searches.
    ///
    /// Stores without a refresh concept can rely on the default no-op.
    async fn refresh_index(&self, _index: &str) -> Result<(), StoreError> {
        Ok(())
    }

    /// Point an alias at an index.
    ///
    /// After a successful call the alias resolves to `index` alone. The
    /// change must be atomic for readers: they resolve the alias either to
    /// its previous targets or to `index`, never to both.
    ///
    /// # Arguments
    ///
    /// * `index` - The index the alias should resolve to
    /// * `alias` - The alias name
    async fn put_alias(&self, index: &str, alias: &str) -> Result<(), StoreError>;

    /// Delete an index and every document in it.
    async fn delete_index(&self, index: &str) -> Result<(), StoreError>;
}
