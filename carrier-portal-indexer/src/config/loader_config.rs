//! Settings of a single load run.

use serde_json::Value;

/// Default document field holding the document identifier.
pub const DEFAULT_ID_FIELD: &str = "vesselId";

/// Default number of documents sent per bulk request.
pub const DEFAULT_BULK_CHUNK_SIZE: usize = 500;

/// Configuration for the index swap loader.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderConfig {
    /// Alias readers query; also the prefix of every index instance name.
    pub alias: String,
    /// Settings and mappings used to create each new index instance.
    pub schema: Value,
    /// Document field used as the document identifier.
    pub id_field: String,
    /// Number of documents sent per bulk request.
    pub bulk_chunk_size: usize,
}

impl LoaderConfig {
    /// Create a configuration with the default identifier field and chunk size.
    pub fn new(alias: impl Into<String>, schema: Value) -> Self {
        Self {
            alias: alias.into(),
            schema,
            id_field: DEFAULT_ID_FIELD.to_string(),
            bulk_chunk_size: DEFAULT_BULK_CHUNK_SIZE,
        }
    }

    /// Use another document field as the identifier.
    pub fn with_id_field(mut self, id_field: impl Into<String>) -> Self {
        self.id_field = id_field.into();
        self
    }

    /// Send bulk requests of at most `bulk_chunk_size` documents.
    ///
    /// A size of zero is treated as one.
    pub fn with_bulk_chunk_size(mut self, bulk_chunk_size: usize) -> Self {
        self.bulk_chunk_size = bulk_chunk_size.max(1);
        self
    }
}
