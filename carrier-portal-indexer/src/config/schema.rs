//! Resolution of the index schema argument.

use std::fs;

use serde_json::Value;
use tracing::debug;

use crate::IndexingError;

/// Resolve the schema argument into the index settings and mappings.
///
/// An argument starting with `{` (after trimming) is parsed as inline JSON;
/// anything else is read as the path of a JSON file. The schema must be a
/// JSON object.
///
/// # Returns
///
/// * `Ok(Value)` - The schema body to create each index with
/// * `Err(IndexingError)` - If the file cannot be read or the JSON is invalid
pub fn resolve_schema(definition: &str) -> Result<Value, IndexingError> {
    let trimmed = definition.trim();

    let (source, text) = if trimmed.starts_with('{') {
        ("inline schema".to_string(), trimmed.to_string())
    } else {
        let text = fs::read_to_string(trimmed).map_err(|e| {
            IndexingError::config(format!("Failed to read schema file '{}': {}", trimmed, e))
        })?;
        (format!("schema file '{}'", trimmed), text)
    };

    let schema: Value = serde_json::from_str(&text)
        .map_err(|e| IndexingError::config(format!("Invalid JSON in {}: {}", source, e)))?;

    if !schema.is_object() {
        return Err(IndexingError::config(format!(
            "Invalid {}: expected a JSON object",
            source
        )));
    }

    debug!(source = %source, "Resolved index schema");
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::env;

    #[test]
    fn test_inline_schema() {
        let schema = resolve_schema(r#"  {"mappings": {"properties": {"vesselId": {"type": "keyword"}}}}"#)
            .unwrap();

        assert_eq!(
            schema,
            json!({"mappings": {"properties": {"vesselId": {"type": "keyword"}}}})
        );
    }

    #[test]
    fn test_schema_file() {
        let path = env::temp_dir().join(format!("vessel-schema-{}.json", std::process::id()));
        fs::write(&path, r#"{"settings": {"number_of_shards": 1}}"#).unwrap();

        let schema = resolve_schema(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(schema, json!({"settings": {"number_of_shards": 1}}));
    }

    #[test]
    fn test_missing_schema_file() {
        let result = resolve_schema("/nonexistent/vessel-schema.json");
        assert!(matches!(result, Err(IndexingError::ConfigError(_))));
    }

    #[test]
    fn test_invalid_inline_schema() {
        let result = resolve_schema("{\"mappings\": ");
        assert!(matches!(result, Err(IndexingError::ConfigError(_))));
    }
}
