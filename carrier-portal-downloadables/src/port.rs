//! Port visit download.

use carrier_portal_shared::{EventRecord, PortVisitInfo, CARRIER_VESSEL_TYPE};

use crate::cells::cell;
use crate::errors::DownloadableError;
use crate::fields::DownloadableRow;
use crate::vessels::{decode_info, decode_vessels, vessel_at};

/// Value of the `type` column.
pub const EVENT_TYPE: &str = "port";

/// Convert a port visit record into a download row.
pub fn record_to_row(record: &EventRecord) -> Result<Option<DownloadableRow>, DownloadableError> {
    let vessels = decode_vessels(record)?;
    let main_vessel = vessel_at(record, &vessels, 0)?;

    let info: PortVisitInfo = decode_info(record)?;

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
        port_lat: cell(&info.anchorage_lat),
        port_lon: cell(&info.anchorage_lon),
        port_country: cell(&info.anchorage.flag),
        port_name: cell(&info.anchorage.name),
        ..Default::default()
    }))
}
