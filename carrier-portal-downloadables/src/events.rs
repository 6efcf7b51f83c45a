//! Relational event rows.
//!
//! Rows for the events table: the record columns as they are, with the
//! embedded JSON documents kept as text, plus the mean position as a WKT
//! point. No header is written.

use carrier_portal_shared::EventRecord;
use serde_json::Value;

use crate::cells::cell;

/// Number of columns of a relational event row.
pub const RELATIONAL_COLUMN_COUNT: usize = 8;

/// Encode a position as a WKT point. WKT orders coordinates `lon lat`.
pub fn wkt_point(lon: &Value, lat: &Value) -> String {
    format!("POINT({} {})", cell(lon), cell(lat))
}

/// Convert a record into a relational event row.
///
/// Columns: `event_id, event_type, vessel_id, event_start, event_end,
/// event_info, event_vessels, mean_position`.
pub fn record_to_row(record: &EventRecord) -> [String; RELATIONAL_COLUMN_COUNT] {
    [
        cell(&record.event_id),
        cell(&record.event_type),
        cell(&record.vessel_id),
        cell(&record.event_start),
        record.event_end.as_ref().map(cell).unwrap_or_default(),
        record.event_info.clone(),
        record.event_vessels.clone(),
        wkt_point(&record.lon_mean, &record.lat_mean),
    ]
}
