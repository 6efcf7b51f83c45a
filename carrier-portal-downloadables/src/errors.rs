//! Error types for the CSV exports.

use thiserror::Error;

/// Errors that can occur while converting event records to CSV.
#[derive(Error, Debug)]
pub enum DownloadableError {
    /// A record, or a JSON document embedded in it, could not be decoded.
    #[error("Invalid JSON in {context}: {source}")]
    JsonError {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The record has fewer vessels than the event type requires.
    #[error("Event {event_id} has no vessel at position {position}")]
    MissingVessel { event_id: String, position: usize },

    /// A field the event type requires is null or absent.
    #[error("Event {event_id} is missing {field}")]
    MissingField { event_id: String, field: String },

    /// Failed to write a CSV row.
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Failed to read input or write output.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The process environment could not be set up.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DownloadableError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a JSON error for the given context.
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonError {
            context: context.into(),
            source,
        }
    }

    /// Create a missing vessel error.
    pub fn missing_vessel(event_id: impl Into<String>, position: usize) -> Self {
        Self::MissingVessel {
            event_id: event_id.into(),
            position,
        }
    }

    /// Create a missing field error.
    pub fn missing_field(event_id: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            event_id: event_id.into(),
            field: field.into(),
        }
    }
}
