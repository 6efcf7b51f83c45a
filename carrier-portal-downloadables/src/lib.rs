//! # Carrier Portal Downloadables
//!
//! Converts newline-delimited JSON event records into CSV.
//!
//! ## Exports
//!
//! - Public downloads: one file per event type ([`encounter`], [`loitering`],
//!   [`port`]) sharing the column set in [`fields`]. Multi-valued columns are
//!   joined with `|`.
//! - Relational rows ([`events`]): the record columns plus the mean position
//!   as a WKT `POINT(lon lat)`, ready for a `COPY` into the events table.
//!
//! [`export`] drives a converter over an input stream.

pub mod cells;
pub mod encounter;
pub mod errors;
pub mod events;
pub mod export;
pub mod fields;
pub mod loitering;
pub mod port;
mod vessels;

pub use errors::DownloadableError;
pub use export::{write_downloadable, write_relational_events, EventKind};
pub use fields::{DownloadableRow, FIELD_NAMES};
