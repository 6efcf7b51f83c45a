//! # Carrier Portal Repository
//!
//! This crate provides the store abstraction used to (re)build the vessel
//! search index. It includes the error type, the `IndexStore` trait describing
//! the index/alias operations a loader needs, index-instance naming, and a
//! concrete implementation for OpenSearch.

pub mod errors;
pub mod interfaces;
pub mod naming;
pub mod opensearch;
pub mod types;

pub use errors::StoreError;
pub use interfaces::IndexStore;
pub use naming::{instance_name, INDEX_TIMESTAMP_FORMAT};
pub use opensearch::OpenSearchStore;
pub use types::{BulkInsertSummary, BulkItemFailure, IndexDocument};
