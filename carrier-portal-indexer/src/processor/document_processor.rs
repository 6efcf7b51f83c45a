//! Document processor implementation.

use serde_json::Value;
use tracing::trace;

use crate::config::DEFAULT_ID_FIELD;
use crate::errors::LoadError;
use carrier_portal_repository::IndexDocument;

/// Processor that maps input lines to index documents.
///
/// The identifier is read from a configurable top-level field; the whole
/// parsed object, identifier included, becomes the document body.
#[derive(Debug, Clone)]
pub struct DocumentProcessor {
    id_field: String,
}

impl DocumentProcessor {
    /// Create a processor reading identifiers from `id_field`.
    pub fn new(id_field: impl Into<String>) -> Self {
        Self {
            id_field: id_field.into(),
        }
    }

    /// Process a single input line.
    ///
    /// # Arguments
    ///
    /// * `line_number` - 1-based position of the line, used in errors
    /// * `line` - The raw line
    ///
    /// # Returns
    ///
    /// * `Ok(Some(IndexDocument))` - The document to insert
    /// * `Ok(None)` - The line is blank
    /// * `Err(LoadError)` - The line is not a JSON object or has no usable identifier
    pub fn process_line(
        &self,
        line_number: usize,
        line: &str,
    ) -> Result<Option<IndexDocument>, LoadError> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        let body: Value =
            serde_json::from_str(line).map_err(|e| LoadError::parse(line_number, e.to_string()))?;

        let Some(object) = body.as_object() else {
            return Err(LoadError::parse(line_number, "expected a JSON object"));
        };

        let id = match object.get(&self.id_field) {
            None => {
                return Err(LoadError::MissingIdentifier {
                    line: line_number,
                    field: self.id_field.clone(),
                })
            }
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            Some(other) => {
                return Err(LoadError::InvalidIdentifier {
                    line: line_number,
                    field: self.id_field.clone(),
                    value: other.to_string(),
                })
            }
        };

        trace!(line = line_number, id = %id, "Processed document");
        Ok(Some(IndexDocument::new(id, body)))
    }
}

impl Default for DocumentProcessor {
    fn default() -> Self {
        Self::new(DEFAULT_ID_FIELD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identifier_mapping() {
        let processor = DocumentProcessor::default();

        let document = processor
            .process_line(1, r#"{"vesselId":"V1","flag":"XX"}"#)
            .unwrap()
            .unwrap();

        assert_eq!(document.id, "V1");
        assert_eq!(document.body, json!({"vesselId": "V1", "flag": "XX"}));
    }

    #[test]
    fn test_numeric_identifier() {
        let processor = DocumentProcessor::new("mmsi");

        let document = processor
            .process_line(1, r#"{"mmsi": 412440000, "name": "CARRIER"}"#)
            .unwrap()
            .unwrap();

        assert_eq!(document.id, "412440000");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let processor = DocumentProcessor::default();

        assert!(processor.process_line(1, "").unwrap().is_none());
        assert!(processor.process_line(2, "   \t").unwrap().is_none());
    }

    #[test]
    fn test_invalid_json_names_line() {
        let processor = DocumentProcessor::default();

        match processor.process_line(4, "{\"vesselId\": ").unwrap_err() {
            LoadError::ParseError { line, .. } => assert_eq!(line, 4),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_is_rejected() {
        let processor = DocumentProcessor::default();

        match processor.process_line(2, "[1, 2]").unwrap_err() {
            LoadError::ParseError { line, message } => {
                assert_eq!(line, 2);
                assert_eq!(message, "expected a JSON object");
            }
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_identifier() {
        let processor = DocumentProcessor::default();

        match processor.process_line(3, r#"{"flag": "XX"}"#).unwrap_err() {
            LoadError::MissingIdentifier { line, field } => {
                assert_eq!(line, 3);
                assert_eq!(field, "vesselId");
            }
            other => panic!("Expected MissingIdentifier, got {:?}", other),
        }
    }

    #[test]
    fn test_unusable_identifiers() {
        let processor = DocumentProcessor::default();

        for line in [
            r#"{"vesselId": null}"#,
            r#"{"vesselId": true}"#,
            r#"{"vesselId": ["V1"]}"#,
            r#"{"vesselId": {"id": "V1"}}"#,
            r#"{"vesselId": ""}"#,
        ] {
            let result = processor.process_line(1, line);
            assert!(
                matches!(result, Err(LoadError::InvalidIdentifier { .. })),
                "{} should be rejected",
                line
            );
        }
    }
}
