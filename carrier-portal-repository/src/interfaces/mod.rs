//! Interface definitions for the index store.
//!
//! This module defines the abstract `IndexStore` trait so that the loader can
//! be driven against OpenSearch in production and an in-memory mock in tests.

mod index_store;

pub use index_store::IndexStore;
