//! Parsing of OpenSearch response bodies.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::errors::StoreError;
use crate::types::{BulkInsertSummary, BulkItemFailure};

/// Extract the index names from a `GET /_alias/{alias}` response.
///
/// The body is an object keyed by index name:
/// `{"vessels-2024-01-01-00-00-00": {"aliases": {"vessels": {}}}}`.
pub(crate) fn parse_alias_targets(
    alias: &str,
    body: &Value,
) -> Result<BTreeSet<String>, StoreError> {
    let indices = body.as_object().ok_or_else(|| {
        StoreError::parse(format!(
            "Unexpected alias response for '{}': {}",
            alias, body
        ))
    })?;

    Ok(indices.keys().cloned().collect())
}

/// Build a summary from a `_bulk` response body.
///
/// Only `index` actions are sent, so each item is read from its `index` key.
pub(crate) fn summarize_bulk_response(total: usize, body: &Value) -> BulkInsertSummary {
    let has_errors = body.get("errors").and_then(Value::as_bool).unwrap_or(false);
    if !has_errors {
        return BulkInsertSummary::all_succeeded(total);
    }

    let mut failures: Vec<BulkItemFailure> = body
        .get("items")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(item_failure).collect())
        .unwrap_or_default();

    if failures.is_empty() {
        // errors=true without any item error still fails the request
        failures.push(BulkItemFailure {
            id: String::new(),
            reason: "bulk response reported errors without item details".to_string(),
        });
    }

    BulkInsertSummary::from_failures(total, failures)
}

fn item_failure(item: &Value) -> Option<BulkItemFailure> {
    let result = item.get("index")?;
    let error = result.get("error")?;

    let id = result
        .get("_id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let reason = match (
        error.get("type").and_then(Value::as_str),
        error.get("reason").and_then(Value::as_str),
    ) {
        (Some(kind), Some(reason)) => format!("{}: {}", kind, reason),
        (None, Some(reason)) => reason.to_string(),
        _ => error.to_string(),
    };

    Some(BulkItemFailure { id, reason })
}
