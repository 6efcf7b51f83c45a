//! OpenSearch store implementation.
//!
//! This module provides the concrete implementation of `IndexStore`
//! using the OpenSearch Rust crate.

use std::collections::BTreeSet;

use async_trait::async_trait;
use opensearch::{
    http::request::JsonBody,
    http::response::Response,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{
        IndicesCreateParts, IndicesDeleteParts, IndicesGetAliasParts, IndicesRefreshParts,
    },
    BulkParts, OpenSearch,
};
use serde_json::{json, Value};
use tracing::{debug, error, info};
use url::Url;

use crate::errors::StoreError;
use crate::interfaces::IndexStore;
use crate::opensearch::responses::{parse_alias_targets, summarize_bulk_response};
use crate::types::{BulkInsertSummary, IndexDocument};

/// OpenSearch store implementation.
///
/// Every operation is a single HTTP call; there is no retry layer.
///
/// # Example
///
/// ```ignore
/// use carrier_portal_repository::{IndexStore, OpenSearchStore};
///
/// let store = OpenSearchStore::new("http://localhost:9200")?;
/// let targets = store.get_alias_targets("vessels").await?;
/// ```
pub struct OpenSearchStore {
    client: OpenSearch,
}

impl OpenSearchStore {
    /// Create a new OpenSearch store for the specified URL.
    ///
    /// No request is sent here; an unreachable server is reported by the
    /// first operation.
    ///
    /// # Arguments
    ///
    /// * `url` - The OpenSearch server URL (e.g., "http://localhost:9200")
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchStore)` - A new store instance
    /// * `Err(StoreError)` - If the URL is invalid or the transport cannot be built
    pub fn new(url: &str) -> Result<Self, StoreError> {
        let parsed_url = Url::parse(url).map_err(|e| StoreError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| StoreError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(url = %url, "Created OpenSearch store");

        Ok(Self { client })
    }

    /// Build the NDJSON body of a `_bulk` request.
    ///
    /// The target index is part of the request path, so each action line only
    /// carries the document ID.
    fn bulk_body(documents: &[IndexDocument]) -> Vec<JsonBody<Value>> {
        let mut body: Vec<JsonBody<Value>> = Vec::with_capacity(documents.len() * 2);
        for document in documents {
            body.push(json!({"index": {"_id": document.id}}).into());
            body.push(document.body.clone().into());
        }
        body
    }

    /// Build the `_aliases` actions that move `alias` onto `index`.
    ///
    /// The removals and the addition are applied by the store as one atomic
    /// change, so a reader resolving the alias never sees both generations.
    fn alias_swap_actions(
        index: &str,
        alias: &str,
        current_targets: &BTreeSet<String>,
    ) -> Vec<Value> {
        let mut actions: Vec<Value> = current_targets
            .iter()
            .filter(|target| target.as_str() != index)
            .map(|target| json!({"remove": {"index": target, "alias": alias}}))
            .collect();
        actions.push(json!({"add": {"index": index, "alias": alias}}));
        actions
    }

    /// Read the body of an unsuccessful response for diagnostics.
    async fn failure_body(response: Response) -> String {
        response.text().await.unwrap_or_default()
    }
}

#[async_trait]
impl IndexStore for OpenSearchStore {
    async fn get_alias_targets(&self, alias: &str) -> Result<BTreeSet<String>, StoreError> {
        let response = self
            .client
            .indices()
            .get_alias(IndicesGetAliasParts::Name(&[alias]))
            .send()
            .await
            .map_err(|e| StoreError::alias(format!("Failed to get alias '{}': {}", alias, e)))?;

        let status = response.status_code();

        // 404 means the alias has never been created
        if status.as_u16() == 404 {
            debug!(alias = %alias, "Alias does not exist");
            return Ok(BTreeSet::new());
        }

        if !status.is_success() {
            let error_body = Self::failure_body(response).await;
            error!(alias = %alias, status = %status, body = %error_body, "Get alias request failed");
            return Err(StoreError::alias(format!(
                "Get alias '{}' failed with status {}: {}",
                alias, status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| StoreError::parse(e.to_string()))?;

        parse_alias_targets(alias, &body)
    }

    async fn create_index(&self, index: &str, schema: &Value) -> Result<(), StoreError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .body(schema.clone())
            .send()
            .await
            .map_err(|e| {
                StoreError::index_creation(format!("Failed to create index '{}': {}", index, e))
            })?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = Self::failure_body(response).await;
            error!(index = %index, status = %status, body = %error_body, "Create index request failed");
            return Err(StoreError::index_creation(format!(
                "Create index '{}' failed with status {}: {}",
                index, status, error_body
            )));
        }

        debug!(index = %index, "Index created");
        Ok(())
    }

    async fn bulk_insert(
        &self,
        index: &str,
        documents: &[IndexDocument],
    ) -> Result<BulkInsertSummary, StoreError> {
        if documents.is_empty() {
            return Ok(BulkInsertSummary::all_succeeded(0));
        }

        let response = self
            .client
            .bulk(BulkParts::Index(index))
            .body(Self::bulk_body(documents))
            .send()
            .await
            .map_err(|e| {
                StoreError::bulk_insert(format!("Failed to send bulk request to '{}': {}", index, e))
            })?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = Self::failure_body(response).await;
            error!(index = %index, status = %status, body = %error_body, "Bulk request failed");
            return Err(StoreError::bulk_insert(format!(
                "Bulk insert into '{}' failed with status {}: {}",
                index, status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| StoreError::parse(e.to_string()))?;

        let summary = summarize_bulk_response(documents.len(), &body);
        debug!(
            index = %index,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "Bulk request completed"
        );
        Ok(summary)
    }

    async fn refresh_index(&self, index: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .indices()
            .refresh(IndicesRefreshParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| StoreError::refresh(format!("Failed to refresh '{}': {}", index, e)))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = Self::failure_body(response).await;
            error!(index = %index, status = %status, body = %error_body, "Refresh request failed");
            return Err(StoreError::refresh(format!(
                "Refresh of '{}' failed with status {}: {}",
                index, status, error_body
            )));
        }

        Ok(())
    }

    async fn put_alias(&self, index: &str, alias: &str) -> Result<(), StoreError> {
        let current_targets = self.get_alias_targets(alias).await?;
        let actions = Self::alias_swap_actions(index, alias, &current_targets);

        let response = self
            .client
            .indices()
            .update_aliases()
            .body(json!({ "actions": actions }))
            .send()
            .await
            .map_err(|e| {
                StoreError::alias(format!(
                    "Failed to point alias '{}' at '{}': {}",
                    alias, index, e
                ))
            })?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = Self::failure_body(response).await;
            error!(
                index = %index,
                alias = %alias,
                status = %status,
                body = %error_body,
                "Update aliases request failed"
            );
            return Err(StoreError::alias(format!(
                "Pointing alias '{}' at '{}' failed with status {}: {}",
                alias, index, status, error_body
            )));
        }

        debug!(index = %index, alias = %alias, "Alias updated");
        Ok(())
    }

    async fn delete_index(&self, index: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| {
                StoreError::index_deletion(format!("Failed to delete index '{}': {}", index, e))
            })?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = Self::failure_body(response).await;
            error!(index = %index, status = %status, body = %error_body, "Delete index request failed");
            return Err(StoreError::index_deletion(format!(
                "Delete index '{}' failed with status {}: {}",
                index, status, error_body
            )));
        }

        debug!(index = %index, "Index deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_url() {
        let result = OpenSearchStore::new("not a url");
        assert!(matches!(result, Err(StoreError::ConnectionError(_))));
    }

    #[test]
    fn test_new_accepts_valid_url() {
        assert!(OpenSearchStore::new("http://localhost:9200").is_ok());
    }

    #[test]
    fn test_bulk_body_pairs_action_and_source() {
        let documents = vec![
            IndexDocument::new("V1", json!({"vesselId": "V1", "flag": "XX"})),
            IndexDocument::new("V2", json!({"vesselId": "V2"})),
        ];

        let body = OpenSearchStore::bulk_body(&documents);
        assert_eq!(body.len(), 4);
    }

    #[test]
    fn test_alias_swap_actions_first_run() {
        let actions = OpenSearchStore::alias_swap_actions("vessels-2", "vessels", &BTreeSet::new());
        assert_eq!(
            actions,
            vec![json!({"add": {"index": "vessels-2", "alias": "vessels"}})]
        );
    }

    #[test]
    fn test_alias_swap_actions_replaces_previous_generation() {
        let current: BTreeSet<String> = ["vessels-1".to_string(), "vessels-2".to_string()]
            .into_iter()
            .collect();

        let actions = OpenSearchStore::alias_swap_actions("vessels-2", "vessels", &current);
        assert_eq!(
            actions,
            vec![
                json!({"remove": {"index": "vessels-1", "alias": "vessels"}}),
                json!({"add": {"index": "vessels-2", "alias": "vessels"}}),
            ]
        );
    }
}
