//! Error types for the carrier portal repository.
//!
//! This module provides a unified error type for all index store operations.

mod store_error;

pub use store_error::StoreError;
