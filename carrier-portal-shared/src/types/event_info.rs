//! Event info structures, one per event type.
//!
//! Numeric measurements stay raw JSON values; the exports write them back out
//! unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::event_vessel::PortRef;

/// Regions an event took place in. Either list may be `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Regions {
    #[serde(default)]
    pub eez: Option<Vec<String>>,
    #[serde(default)]
    pub rfmo: Option<Vec<String>>,
}

/// Info of an encounter between a carrier and another vessel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EncounterInfo {
    pub median_speed_knots: Value,
    pub elevation_m: Value,
    pub distance_from_shore_m: Value,
    pub distance_from_port_m: Value,
    pub regions: Regions,
    pub median_distance_km: Value,
    #[serde(default)]
    pub authorization_status: Option<String>,
}

/// Info of a loitering event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoiteringInfo {
    pub origin_port: PortRef,
    pub destination_port: PortRef,
    pub median_speed_knots: Value,
    pub elevation_m: Value,
    pub distance_from_shore_m: Value,
    pub distance_from_port_m: Value,
    pub regions: Regions,
    pub total_distance_km: Value,
    pub loitering_hours: Value,
}

/// Anchorage a port visit happened at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Anchorage {
    #[serde(default)]
    pub flag: Value,
    #[serde(default)]
    pub name: Value,
}

/// Info of a port visit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortVisitInfo {
    pub anchorage_lat: Value,
    pub anchorage_lon: Value,
    pub anchorage: Anchorage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encounter_info_null_regions() {
        let info: EncounterInfo = serde_json::from_value(json!({
            "median_speed_knots": 0.5,
            "elevation_m": -4000,
            "distance_from_shore_m": 200000,
            "distance_from_port_m": 300000,
            "regions": {"eez": null, "rfmo": ["IOTC"]},
            "median_distance_km": 0.03,
            "authorization_status": "unauthorized"
        }))
        .unwrap();

        assert!(info.regions.eez.is_none());
        assert_eq!(info.regions.rfmo, Some(vec!["IOTC".to_string()]));
    }

    #[test]
    fn test_loitering_info_requires_ports() {
        let result: Result<LoiteringInfo, _> = serde_json::from_value(json!({
            "median_speed_knots": 1.0,
            "elevation_m": 0,
            "distance_from_shore_m": 0,
            "distance_from_port_m": 0,
            "regions": {},
            "total_distance_km": 3.2,
            "loitering_hours": 4.5
        }));
        assert!(result.is_err());
    }
}
