//! OpenSearch implementation of the index store.
//!
//! This module provides a concrete implementation of `IndexStore`
//! using OpenSearch as the backend.

mod responses;
mod store;

pub use store::OpenSearchStore;
