//! Encounter download.
//!
//! Only encounters led by a carrier are published. The first vessel of the
//! event is the carrier, the second one the vessel it encountered.

use carrier_portal_shared::{EncounterInfo, EventRecord, EventVessel};

use crate::cells::{cell, join_optional, join_values};
use crate::errors::DownloadableError;
use crate::fields::DownloadableRow;
use crate::vessels::{decode_info, decode_vessels, required_port, vessel_at};

/// Value of the `type` column.
pub const EVENT_TYPE: &str = "encounter";

/// Map the internal authorization status to the published one.
///
/// `unauthorized` is published as `unknown`: the absence of an authorization
/// record does not prove the vessel is unauthorized.
pub fn public_authorization_status(status: Option<&str>) -> String {
    match status {
        Some("unauthorized") => "unknown".to_string(),
        Some(status) => status.to_string(),
        None => String::new(),
    }
}

/// Convert an encounter record into a download row.
///
/// # Returns
///
/// * `Ok(Some(row))` - The row to publish
/// * `Ok(None)` - If the first vessel is not a carrier
/// * `Err(DownloadableError)` - If the record lacks a field the row needs
pub fn record_to_row(record: &EventRecord) -> Result<Option<DownloadableRow>, DownloadableError> {
    let vessels = decode_vessels(record)?;

    let main_vessel = vessel_at(record, &vessels, 0)?;
    if !main_vessel.is_carrier() {
        return Ok(None);
    }
    let other_vessel = vessel_at(record, &vessels, 1)?;

    let info: EncounterInfo = decode_info(record)?;

    let main = VesselColumns::new(record, main_vessel, "vessel")?;
    let other = VesselColumns::new(record, other_vessel, "encountered_vessel")?;

    Ok(Some(DownloadableRow {
        id: cell(&record.event_id),
        event_type: EVENT_TYPE.to_string(),
        start: cell(&record.event_start),
        end: record.event_end.as_ref().map(cell).unwrap_or_default(),
        lat: cell(&record.lat_mean),
        lon: cell(&record.lon_mean),
        vessel_id: main.id,
        vessel_type: main.vessel_type,
        vessel_mmsi: main.mmsi,
        vessel_name: main.name,
        vessel_flag: main.flag,
        vessel_origin_port_country: main.origin_country,
        vessel_origin_port_name: main.origin_name,
        vessel_destination_port_country: main.destination_country,
        vessel_destination_port_name: main.destination_name,
        vessel_authorizations_authorized: main.authorized,
        vessel_authorizations_unknown: main.unknown,
        median_speed_knots: cell(&info.median_speed_knots),
        elevation_m: cell(&info.elevation_m),
        distance_from_shore_m: cell(&info.distance_from_shore_m),
        distance_from_port_m: cell(&info.distance_from_port_m),
        regions_eez: join_optional(info.regions.eez.as_ref()),
        regions_rfmo: join_optional(info.regions.rfmo.as_ref()),
        encounter_median_distance_km: cell(&info.median_distance_km),
        encounter_authorization_status: public_authorization_status(
            info.authorization_status.as_deref(),
        ),
        encountered_vessel_id: other.id,
        encountered_vessel_type: other.vessel_type,
        encountered_vessel_mmsi: other.mmsi,
        encountered_vessel_name: other.name,
        encountered_vessel_flag: other.flag,
        encountered_vessel_origin_port_country: other.origin_country,
        encountered_vessel_origin_port_name: other.origin_name,
        encountered_vessel_destination_port_country: other.destination_country,
        encountered_vessel_destination_port_name: other.destination_name,
        encountered_vessel_authorizations_authorized: other.authorized,
        encountered_vessel_authorizations_unknown: other.unknown,
        ..Default::default()
    }))
}

/// The per-vessel columns, published once for each side of the encounter.
struct VesselColumns {
    id: String,
    vessel_type: String,
    mmsi: String,
    name: String,
    flag: String,
    origin_country: String,
    origin_name: String,
    destination_country: String,
    destination_name: String,
    authorized: String,
    unknown: String,
}

impl VesselColumns {
    fn new(
        record: &EventRecord,
        vessel: &EventVessel,
        role: &str,
    ) -> Result<Self, DownloadableError> {
        let origin = required_port(
            record,
            vessel.origin_port.as_ref(),
            &format!("{}.origin_port", role),
        )?;
        let destination = required_port(
            record,
            vessel.destination_port.as_ref(),
            &format!("{}.destination_port", role),
        )?;

        Ok(Self {
            id: cell(&vessel.id),
            vessel_type: vessel.vessel_type.clone(),
            mmsi: cell(&vessel.ssvid),
            name: cell(&vessel.name),
            flag: cell(&vessel.flag),
            origin_country: cell(&origin.iso),
            origin_name: cell(&origin.label),
            destination_country: cell(&destination.iso),
            destination_name: cell(&destination.label),
            authorized: join_values(&vessel.authorized_rfmos()),
            unknown: join_values(&vessel.unknown_rfmos()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn vessel(id: &str, vessel_type: &str, authorizations: Value) -> Value {
        json!({
            "id": id,
            "type": vessel_type,
            "ssvid": "412000000",
            "name": format!("{} NAME", id),
            "flag": "PAN",
            "origin_port": {"iso": "CHN", "label": "ZHOUSHAN"},
            "destination_port": {"iso": "MUS", "label": "PORT LOUIS"},
            "authorizations": authorizations
        })
    }

    fn record(vessels: Value, info: Value) -> EventRecord {
        serde_json::from_value(json!({
            "event_id": "enc-1",
            "event_type": "encounter",
            "vessel_id": "carrier-1",
            "event_start": "2019-06-01 10:00:00 UTC",
            "event_end": "2019-06-01 14:00:00 UTC",
            "lat_mean": -20.5,
            "lon_mean": 60.25,
            "event_info": info.to_string(),
            "event_vessels": vessels.to_string()
        }))
        .unwrap()
    }

    fn info(status: Value) -> Value {
        json!({
            "median_speed_knots": 1.2,
            "elevation_m": -4500,
            "distance_from_shore_m": 500000,
            "distance_from_port_m": 700000,
            "regions": {"eez": null, "rfmo": ["IOTC", "SIOFA"]},
            "median_distance_km": 0.04,
            "authorization_status": status
        })
    }

    #[test]
    fn test_authorizations_joined_with_pipe() {
        let vessels = json!([
            vessel(
                "carrier-1",
                "carrier",
                json!([
                    {"rfmo": "WCPFC", "is_authorized": true},
                    {"rfmo": "IOTC", "is_authorized": true}
                ])
            ),
            vessel("fishing-1", "fishing", json!([])),
        ]);

        let row = record_to_row(&record(vessels, info(json!("authorized"))))
            .unwrap()
            .unwrap();

        assert_eq!(row.vessel_authorizations_authorized, "WCPFC|IOTC");
        assert_eq!(row.vessel_authorizations_unknown, "");
        assert_eq!(row.encountered_vessel_authorizations_authorized, "");
    }

    #[test]
    fn test_row_columns() {
        let vessels = json!([
            vessel(
                "carrier-1",
                "carrier",
                json!([
                    {"rfmo": "IOTC", "is_authorized": false},
                    {"rfmo": null, "is_authorized": true}
                ])
            ),
            vessel(
                "fishing-1",
                "fishing",
                json!([{"rfmo": "SIOFA", "is_authorized": true}])
            ),
        ]);

        let row = record_to_row(&record(vessels, info(json!("unauthorized"))))
            .unwrap()
            .unwrap();

        assert_eq!(row.id, "enc-1");
        assert_eq!(row.event_type, "encounter");
        assert_eq!(row.end, "2019-06-01 14:00:00 UTC");
        assert_eq!(row.lat, "-20.5");
        assert_eq!(row.lon, "60.25");
        assert_eq!(row.vessel_id, "carrier-1");
        assert_eq!(row.vessel_type, "carrier");
        assert_eq!(row.vessel_mmsi, "412000000");
        assert_eq!(row.vessel_origin_port_country, "CHN");
        assert_eq!(row.vessel_destination_port_name, "PORT LOUIS");
        assert_eq!(row.vessel_authorizations_authorized, "");
        assert_eq!(row.vessel_authorizations_unknown, "IOTC");
        assert_eq!(row.elevation_m, "-4500");
        assert_eq!(row.regions_eez, "");
        assert_eq!(row.regions_rfmo, "IOTC|SIOFA");
        assert_eq!(row.encounter_median_distance_km, "0.04");
        assert_eq!(row.encounter_authorization_status, "unknown");
        assert_eq!(row.encountered_vessel_id, "fishing-1");
        assert_eq!(row.encountered_vessel_type, "fishing");
        assert_eq!(row.encountered_vessel_authorizations_authorized, "SIOFA");
        assert_eq!(row.loitering_hours, "");
        assert_eq!(row.port_name, "");
    }

    #[test]
    fn test_non_carrier_encounters_are_skipped() {
        let vessels = json!([
            vessel("fishing-1", "fishing", json!([])),
            vessel("carrier-1", "carrier", json!([])),
        ]);

        let row = record_to_row(&record(vessels, info(json!("authorized")))).unwrap();
        assert!(row.is_none());
    }

    #[test]
    fn test_missing_encountered_vessel() {
        let vessels = json!([vessel("carrier-1", "carrier", json!([]))]);

        let result = record_to_row(&record(vessels, info(json!("authorized"))));
        assert!(matches!(
            result.unwrap_err(),
            DownloadableError::MissingVessel { position: 1, .. }
        ));
    }

    #[test]
    fn test_missing_origin_port() {
        let mut carrier = vessel("carrier-1", "carrier", json!([]));
        carrier["origin_port"] = Value::Null;
        let vessels = json!([carrier, vessel("fishing-1", "fishing", json!([]))]);

        let result = record_to_row(&record(vessels, info(json!("authorized"))));
        match result.unwrap_err() {
            DownloadableError::MissingField { event_id, field } => {
                assert_eq!(event_id, "enc-1");
                assert_eq!(field, "vessel.origin_port");
            }
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_public_authorization_status() {
        assert_eq!(public_authorization_status(Some("unauthorized")), "unknown");
        assert_eq!(public_authorization_status(Some("partially")), "partially");
        assert_eq!(public_authorization_status(None), "");
    }
}
