//! Dependency initialization and wiring for the loader binary.

use std::sync::Arc;
use tracing::info;

use super::args::LoaderArgs;
use super::loader_config::LoaderConfig;
use super::schema::resolve_schema;
use crate::loader::IndexSwapLoader;
use crate::IndexingError;
use carrier_portal_repository::OpenSearchStore;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured loader ready to run.
    pub loader: IndexSwapLoader,
}

impl Dependencies {
    /// Initialize all dependencies from the command line arguments.
    ///
    /// No request is sent to the store here; an unreachable store surfaces as
    /// a load error on the first operation.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If the arguments or the schema are invalid
    pub fn new(args: &LoaderArgs) -> Result<Self, IndexingError> {
        if args.alias.trim().is_empty() {
            return Err(IndexingError::config("Alias must not be empty"));
        }
        if args.id_field.is_empty() {
            return Err(IndexingError::config("Identifier field must not be empty"));
        }

        info!(
            store_url = %args.store_url,
            alias = %args.alias,
            id_field = %args.id_field,
            bulk_chunk_size = args.bulk_chunk_size,
            "Initializing dependencies"
        );

        let schema = resolve_schema(&args.schema)?;

        let store = OpenSearchStore::new(&args.store_url).map_err(|e| {
            IndexingError::config(format!("Failed to create OpenSearch store: {}", e))
        })?;

        let config = LoaderConfig::new(&args.alias, schema)
            .with_id_field(&args.id_field)
            .with_bulk_chunk_size(args.bulk_chunk_size);

        let loader = IndexSwapLoader::new(Arc::new(store), config);

        Ok(Self { loader })
    }
}
