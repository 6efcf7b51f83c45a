//! # Carrier Portal Indexer
//!
//! Rebuilds the vessel search index from newline-delimited JSON and promotes
//! it behind a stable alias, so that readers never see a half-loaded index.
//!
//! ## Architecture
//!
//! A run follows the Processor-Loader pattern:
//!
//! 1. **Processor**: Turns each input line into an identified document
//! 2. **Loader**: Creates a fresh index, bulk-loads it, swaps the alias and
//!    retires the previous generation
//!
//! ## Modules
//!
//! - [`config`]: Loader settings, schema resolution and dependency wiring
//! - [`processor`]: Maps input lines to documents
//! - [`loader`]: The index swap loader
//! - [`errors`]: Error types for a load

pub mod config;
pub mod errors;
pub mod loader;
pub mod processor;

pub use config::{Dependencies, LoaderArgs, LoaderConfig};
pub use errors::LoadError;
pub use loader::{IndexSwapLoader, LoadReport};
pub use processor::DocumentProcessor;

use thiserror::Error;

/// Errors that can occur during loader initialization or execution.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Load error.
    #[error("Load error: {0}")]
    LoadError(#[from] LoadError),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
