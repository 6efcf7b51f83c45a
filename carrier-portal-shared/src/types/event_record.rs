//! Event record type.
//!
//! One record is one line of the newline-delimited JSON event export. Scalar
//! columns are kept as raw JSON values so that they can be written out
//! exactly as they were received; the vessel list and the event info are JSON
//! documents embedded as strings.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::event_vessel::EventVessel;

/// A single vessel event as exported by the events pipeline.
///
/// # Fields
///
/// - `event_id`: Unique identifier of the event
/// - `event_type`: `encounter`, `loitering` or `port`
/// - `vessel_id`: Identifier of the main vessel
/// - `event_start` / `event_end`: Event time range
/// - `lat_mean` / `lon_mean`: Mean position of the event
/// - `event_info`: JSON object with the type specific information
/// - `event_vessels`: JSON array of the vessels involved, main vessel first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventRecord {
    pub event_id: Value,
    pub event_type: Value,
    pub vessel_id: Value,
    pub event_start: Value,
    #[serde(default)]
    pub event_end: Option<Value>,
    pub lat_mean: Value,
    pub lon_mean: Value,
    pub event_info: String,
    pub event_vessels: String,
}

impl EventRecord {
    /// Parse a record from one line of the event export.
    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }

    /// Decode the embedded vessel list.
    pub fn vessels(&self) -> Result<Vec<EventVessel>, serde_json::Error> {
        serde_json::from_str(&self.event_vessels)
    }

    /// Decode the embedded event info into the structure of the event type.
    pub fn info<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.event_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::event_info::PortVisitInfo;
    use serde_json::json;

    fn port_line() -> String {
        json!({
            "event_id": "e1",
            "event_type": "port",
            "vessel_id": "v1",
            "event_start": "2020-01-01 00:00:00 UTC",
            "event_end": null,
            "lat_mean": -12.5,
            "lon_mean": 130.25,
            "event_info": json!({
                "anchorage_lat": -12.4,
                "anchorage_lon": 130.8,
                "anchorage": {"flag": "AUS", "name": "DARWIN"}
            }).to_string(),
            "event_vessels": json!([{"id": "v1", "type": "carrier", "ssvid": "123", "name": "A", "flag": "PAN"}]).to_string()
        })
        .to_string()
    }

    #[test]
    fn test_parse_record_and_embedded_blobs() {
        let record = EventRecord::from_json_line(&port_line()).unwrap();
        assert_eq!(record.event_id, json!("e1"));
        assert_eq!(record.event_end, None);
        assert_eq!(record.lat_mean, json!(-12.5));

        let vessels = record.vessels().unwrap();
        assert_eq!(vessels.len(), 1);
        assert!(vessels[0].is_carrier());

        let info: PortVisitInfo = record.info().unwrap();
        assert_eq!(info.anchorage.name, json!("DARWIN"));
    }

    #[test]
    fn test_missing_event_end_defaults_to_none() {
        let mut value: Value = serde_json::from_str(&port_line()).unwrap();
        value.as_object_mut().unwrap().remove("event_end");

        let record: EventRecord = serde_json::from_value(value).unwrap();
        assert!(record.event_end.is_none());
    }

    #[test]
    fn test_missing_embedded_blob_is_an_error() {
        let line = json!({"event_id": "e1", "event_info": "{}"}).to_string();
        assert!(EventRecord::from_json_line(&line).is_err());
    }

    #[test]
    fn test_invalid_embedded_vessels() {
        let mut record = EventRecord::from_json_line(&port_line()).unwrap();
        record.event_vessels = "not json".to_string();
        assert!(record.vessels().is_err());
    }
}
