//! Record accessors shared by the converters.

use carrier_portal_shared::{EventRecord, EventVessel, PortRef};
use serde::de::DeserializeOwned;

use crate::cells::cell;
use crate::errors::DownloadableError;

/// Event id of a record, as used in diagnostics.
pub(crate) fn event_id(record: &EventRecord) -> String {
    cell(&record.event_id)
}

/// Decode the embedded vessel list of a record.
pub(crate) fn decode_vessels(record: &EventRecord) -> Result<Vec<EventVessel>, DownloadableError> {
    record
        .vessels()
        .map_err(|e| DownloadableError::json(format!("event_vessels of {}", event_id(record)), e))
}

/// Decode the embedded event info of a record.
pub(crate) fn decode_info<T: DeserializeOwned>(record: &EventRecord) -> Result<T, DownloadableError> {
    record
        .info()
        .map_err(|e| DownloadableError::json(format!("event_info of {}", event_id(record)), e))
}

/// Get the vessel at `position`, failing when the event has fewer vessels.
pub(crate) fn vessel_at<'a>(
    record: &EventRecord,
    vessels: &'a [EventVessel],
    position: usize,
) -> Result<&'a EventVessel, DownloadableError> {
    vessels
        .get(position)
        .ok_or_else(|| DownloadableError::missing_vessel(event_id(record), position))
}

/// Get a port reference that the export requires to be present.
pub(crate) fn required_port<'a>(
    record: &EventRecord,
    port: Option<&'a PortRef>,
    field: &str,
) -> Result<&'a PortRef, DownloadableError> {
    port.ok_or_else(|| DownloadableError::missing_field(event_id(record), field))
}
