//! This module defines the event record and the structures decoded from its
//! embedded `event_vessels` and `event_info` JSON strings.

pub mod event_info;
pub mod event_record;
pub mod event_vessel;
