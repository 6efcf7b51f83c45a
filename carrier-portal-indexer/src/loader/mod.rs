//! Loader module for the index swap loader.
//!
//! Builds a new index instance next to the one the alias currently points at,
//! fills it, and only then moves the alias over. Readers keep querying the
//! previous generation until the swap and never see a partially loaded index.

use std::fmt::Display;
use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error, info, instrument};

use crate::config::LoaderConfig;
use crate::errors::LoadError;
use crate::processor::DocumentProcessor;
use carrier_portal_repository::{instance_name, IndexDocument, IndexStore};

/// Outcome of a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Name of the index the alias now points to.
    pub index_name: String,
    /// Number of documents written into it.
    pub documents_loaded: usize,
    /// Previous generations that were deleted, in deletion order.
    pub retired_indices: Vec<String>,
}

/// Loader that rebuilds an index and swaps it in behind an alias.
///
/// A run goes through these steps, strictly in order:
///
/// 1. Look up the indices the alias currently points to
/// 2. Create a new, timestamp-named index with the configured schema
/// 3. Bulk-load every input document into it, then refresh it
/// 4. Point the alias at it
/// 5. Delete the indices found in step 1
///
/// A failure in step 3 or 4 deletes the new index again before the error is
/// returned, leaving the alias untouched.
pub struct IndexSwapLoader {
    store: Arc<dyn IndexStore>,
    config: LoaderConfig,
    processor: DocumentProcessor,
}

impl IndexSwapLoader {
    /// Create a new loader over the given store.
    pub fn new(store: Arc<dyn IndexStore>, config: LoaderConfig) -> Self {
        let processor = DocumentProcessor::new(config.id_field.clone());
        Self {
            store,
            config,
            processor,
        }
    }

    /// The loader configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Rebuild the index from `input`, naming the new instance after the
    /// current local time.
    pub async fn run<R>(&self, input: R) -> Result<LoadReport, LoadError>
    where
        R: AsyncBufRead + Unpin,
    {
        self.run_at(input, &Local::now()).await
    }

    /// Rebuild the index from `input`, naming the new instance after
    /// `created_at`.
    ///
    /// # Arguments
    ///
    /// * `input` - Newline-delimited JSON documents
    /// * `created_at` - Timestamp embedded in the new index name
    ///
    /// # Returns
    ///
    /// * `Ok(LoadReport)` - The alias points at the new index and the
    ///   previous generations are gone
    /// * `Err(LoadError)` - The first error encountered
    #[instrument(skip(self, input, created_at), fields(alias = %self.config.alias))]
    pub async fn run_at<R, Tz>(
        &self,
        input: R,
        created_at: &DateTime<Tz>,
    ) -> Result<LoadReport, LoadError>
    where
        R: AsyncBufRead + Unpin,
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let alias = self.config.alias.as_str();
        let index_name = instance_name(alias, created_at);

        let old_indices = self.store.get_alias_targets(alias).await?;
        if old_indices.is_empty() {
            info!(alias = %alias, "Alias does not point to any index yet");
        } else {
            info!(alias = %alias, indices = ?old_indices, "Alias currently points to existing indices");
        }

        info!(index = %index_name, "Creating new index");
        self.store
            .create_index(&index_name, &self.config.schema)
            .await?;

        let documents_loaded = match self.load_and_swap(&index_name, input).await {
            Ok(documents_loaded) => documents_loaded,
            Err(e) => {
                error!(index = %index_name, error = %e, "Import failed, removing new index");
                if let Err(cleanup_error) = self.store.delete_index(&index_name).await {
                    error!(
                        index = %index_name,
                        error = %cleanup_error,
                        "Failed to remove new index after import failure"
                    );
                }
                return Err(e);
            }
        };

        let mut retired_indices = Vec::with_capacity(old_indices.len());
        for old_index in old_indices {
            if old_index == index_name {
                continue;
            }
            info!(index = %old_index, "Removing previous index");
            self.store.delete_index(&old_index).await?;
            retired_indices.push(old_index);
        }

        info!(
            index = %index_name,
            documents = documents_loaded,
            retired = retired_indices.len(),
            "Index promoted"
        );

        Ok(LoadReport {
            index_name,
            documents_loaded,
            retired_indices,
        })
    }

    /// Fill the new index and point the alias at it.
    async fn load_and_swap<R>(&self, index_name: &str, input: R) -> Result<usize, LoadError>
    where
        R: AsyncBufRead + Unpin,
    {
        let documents_loaded = self.load(index_name, input).await?;

        self.store.refresh_index(index_name).await?;

        info!(index = %index_name, alias = %self.config.alias, "Updating alias to new index");
        self.store.put_alias(index_name, &self.config.alias).await?;

        Ok(documents_loaded)
    }

    /// Stream the input into the index, one bulk request per chunk.
    async fn load<R>(&self, index_name: &str, input: R) -> Result<usize, LoadError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut chunk: Vec<IndexDocument> = Vec::with_capacity(self.config.bulk_chunk_size);
        let mut line_number = 0;
        let mut documents_loaded = 0;

        while let Some(line) = lines.next_line().await? {
            line_number += 1;

            if let Some(document) = self.processor.process_line(line_number, &line)? {
                chunk.push(document);
            }

            if chunk.len() >= self.config.bulk_chunk_size {
                documents_loaded += self.flush(index_name, &mut chunk).await?;
            }
        }

        documents_loaded += self.flush(index_name, &mut chunk).await?;

        debug!(
            index = %index_name,
            lines = line_number,
            documents = documents_loaded,
            "Input exhausted"
        );
        Ok(documents_loaded)
    }

    /// Send the pending chunk and clear it.
    ///
    /// Any rejected document fails the whole load.
    async fn flush(
        &self,
        index_name: &str,
        chunk: &mut Vec<IndexDocument>,
    ) -> Result<usize, LoadError> {
        if chunk.is_empty() {
            return Ok(0);
        }

        let summary = self.store.bulk_insert(index_name, chunk.as_slice()).await?;

        if !summary.is_complete() {
            for failure in &summary.failures {
                error!(
                    index = %index_name,
                    document_id = %failure.id,
                    reason = %failure.reason,
                    "Document rejected"
                );
            }
            return Err(LoadError::partial_bulk(index_name, &summary));
        }

        let count = chunk.len();
        chunk.clear();

        debug!(index = %index_name, count = count, "Bulk chunk written");
        Ok(count)
    }
}
