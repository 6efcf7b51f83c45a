//! # Carrier Portal Shared
//!
//! This crate defines the event records produced by the vessel event
//! pipeline (encounters, loitering, port visits) and the JSON blobs embedded
//! in them. The records are consumed by the downloadable CSV exports.

pub mod types;

pub use types::event_info::{Anchorage, EncounterInfo, LoiteringInfo, PortVisitInfo, Regions};
pub use types::event_record::EventRecord;
pub use types::event_vessel::{EventVessel, PortRef, VesselAuthorization, CARRIER_VESSEL_TYPE};
