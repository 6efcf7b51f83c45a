//! Column set of the public event downloads.
//!
//! All three event types are published with the same header so the files
//! can be concatenated; columns that do not apply to an event type are left
//! empty.

use serde::Serialize;

/// Header of the public downloads, in column order.
pub const FIELD_NAMES: [&str; 42] = [
    "id",
    "type",
    "start",
    "end",
    "lat",
    "lon",
    "vessel.id",
    "vessel.type",
    "vessel.mmsi",
    "vessel.name",
    "vessel.flag",
    "vessel.origin_port.country",
    "vessel.origin_port.name",
    "vessel.destination_port.country",
    "vessel.destination_port.name",
    "vessel.authorizations.authorized",
    "vessel.authorizations.unknown",
    "median_speed_knots",
    "elevation_m",
    "distance_from_shore_m",
    "distance_from_port_m",
    "regions.eez",
    "regions.rfmo",
    "encounter.median_distance_km",
    "encounter.authorization_status",
    "encounter.encountered_vessel.id",
    "encounter.encountered_vessel.type",
    "encounter.encountered_vessel.mmsi",
    "encounter.encountered_vessel.name",
    "encounter.encountered_vessel.flag",
    "encounter.encountered_vessel.origin_port.country",
    "encounter.encountered_vessel.origin_port.name",
    "encounter.encountered_vessel.destination_port.country",
    "encounter.encountered_vessel.destination_port.name",
    "encounter.encountered_vessel.authorizations.authorized",
    "encounter.encountered_vessel.authorizations.unknown",
    "loitering.total_distance_km",
    "loitering.loitering_hours",
    "port.lat",
    "port.lon",
    "port.country",
    "port.name",
];

/// One row of a public download.
///
/// Field order must follow [`FIELD_NAMES`]: rows are serialized without
/// headers and the header is written separately.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DownloadableRow {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub start: String,
    pub end: String,
    pub lat: String,
    pub lon: String,
    #[serde(rename = "vessel.id")]
    pub vessel_id: String,
    #[serde(rename = "vessel.type")]
    pub vessel_type: String,
    #[serde(rename = "vessel.mmsi")]
    pub vessel_mmsi: String,
    #[serde(rename = "vessel.name")]
    pub vessel_name: String,
    #[serde(rename = "vessel.flag")]
    pub vessel_flag: String,
    #[serde(rename = "vessel.origin_port.country")]
    pub vessel_origin_port_country: String,
    #[serde(rename = "vessel.origin_port.name")]
    pub vessel_origin_port_name: String,
    #[serde(rename = "vessel.destination_port.country")]
    pub vessel_destination_port_country: String,
    #[serde(rename = "vessel.destination_port.name")]
    pub vessel_destination_port_name: String,
    #[serde(rename = "vessel.authorizations.authorized")]
    pub vessel_authorizations_authorized: String,
    #[serde(rename = "vessel.authorizations.unknown")]
    pub vessel_authorizations_unknown: String,
    pub median_speed_knots: String,
    pub elevation_m: String,
    pub distance_from_shore_m: String,
    pub distance_from_port_m: String,
    #[serde(rename = "regions.eez")]
    pub regions_eez: String,
    #[serde(rename = "regions.rfmo")]
    pub regions_rfmo: String,
    #[serde(rename = "encounter.median_distance_km")]
    pub encounter_median_distance_km: String,
    #[serde(rename = "encounter.authorization_status")]
    pub encounter_authorization_status: String,
    #[serde(rename = "encounter.encountered_vessel.id")]
    pub encountered_vessel_id: String,
    #[serde(rename = "encounter.encountered_vessel.type")]
    pub encountered_vessel_type: String,
    #[serde(rename = "encounter.encountered_vessel.mmsi")]
    pub encountered_vessel_mmsi: String,
    #[serde(rename = "encounter.encountered_vessel.name")]
    pub encountered_vessel_name: String,
    #[serde(rename = "encounter.encountered_vessel.flag")]
    pub encountered_vessel_flag: String,
    #[serde(rename = "encounter.encountered_vessel.origin_port.country")]
    pub encountered_vessel_origin_port_country: String,
    #[serde(rename = "encounter.encountered_vessel.origin_port.name")]
    pub encountered_vessel_origin_port_name: String,
    #[serde(rename = "encounter.encountered_vessel.destination_port.country")]
    pub encountered_vessel_destination_port_country: String,
    #[serde(rename = "encounter.encountered_vessel.destination_port.name")]
    pub encountered_vessel_destination_port_name: String,
    #[serde(rename = "encounter.encountered_vessel.authorizations.authorized")]
    pub encountered_vessel_authorizations_authorized: String,
    #[serde(rename = "encounter.encountered_vessel.authorizations.unknown")]
    pub encountered_vessel_authorizations_unknown: String,
    #[serde(rename = "loitering.total_distance_km")]
    pub loitering_total_distance_km: String,
    #[serde(rename = "loitering.loitering_hours")]
    pub loitering_hours: String,
    #[serde(rename = "port.lat")]
    pub port_lat: String,
    #[serde(rename = "port.lon")]
    pub port_lon: String,
    #[serde(rename = "port.country")]
    pub port_country: String,
    #[serde(rename = "port.name")]
    pub port_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_serializes_in_header_order() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(DownloadableRow::default()).unwrap();
        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        let header = output.lines().next().unwrap();
        assert_eq!(header, FIELD_NAMES.join(","));
    }

    #[test]
    fn test_default_row_is_all_empty() {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.serialize(DownloadableRow::default()).unwrap();
        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        assert_eq!(output.trim_end(), ",".repeat(FIELD_NAMES.len() - 1));
    }
}
