//! Configuration for the index swap loader.

mod args;
mod dependencies;
mod loader_config;
mod schema;

pub use args::LoaderArgs;
pub use dependencies::Dependencies;
pub use loader_config::{LoaderConfig, DEFAULT_BULK_CHUNK_SIZE, DEFAULT_ID_FIELD};
pub use schema::resolve_schema;
