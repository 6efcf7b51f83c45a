//! Loitering download.
//!
//! Loitering events involve a single carrier. Its origin and destination
//! ports are taken from the event info, not from the vessel.

use carrier_portal_shared::{EventRecord, LoiteringInfo, CARRIER_VESSEL_TYPE};

use crate::cells::{cell, join_optional};
use crate::errors::DownloadableError;
use crate::fields::DownloadableRow;
use crate::vessels::{decode_info, decode_vessels, vessel_at};

/// Value of the `type` column.
pub const EVENT_TYPE: &str = "loitering";

/// Convert a loitering record into a download row.
pub fn record_to_row(record: &EventRecord) -> Result<Option<DownloadableRow>, DownloadableError> {
    let vessels = decode_vessels(record)?;
    let main_vessel = vessel_at(record, &vessels, 0)?;

    let info: LoiteringInfo = decode_info(record)?;

    Ok(Some(DownloadableRow {
        id: cell(&record.event_id),
        event_type: EVENT_TYPE.to_string(),
        start: cell(&record.event_start),
        end: record.event_end.as_ref().map(cell).unwrap_or_default(),
        lat: cell(&record.lat_mean),
        lon: cell(&record.lon_mean),
        vessel_id: cell(&main_vessel.id),
        vessel_type: CARRIER_VESSEL_TYPE.to_string(),
        vessel_mmsi: cell(&main_vessel.ssvid),
        vessel_name: cell(&main_vessel.name),
        vessel_flag: cell(&main_vessel.flag),
        vessel_origin_port_country: cell(&info.origin_port.iso),
        vessel_origin_port_name: cell(&info.origin_port.label),
        vessel_destination_port_country: cell(&info.destination_port.iso),
        vessel_destination_port_name: cell(&info.destination_port.label),
        median_speed_knots: cell(&info.median_speed_knots),
        elevation_m: cell(&info.elevation_m),
        distance_from_shore_m: cell(&info.distance_from_shore_m),
        distance_from_port_m: cell(&info.distance_from_port_m),
        regions_rfmo: join_optional(info.regions.rfmo.as_ref()),
        loitering_total_distance_km: cell(&info.total_distance_km),
        loitering_hours: cell(&info.loitering_hours),
        ..Default::default()
    }))
}
