//! Vessel entries of the embedded `event_vessels` array.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Vessel type of the carrier vessels the portal publishes.
pub const CARRIER_VESSEL_TYPE: &str = "carrier";

/// A port reference, as attached to vessels and loitering events.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PortRef {
    /// ISO3 country code of the port.
    #[serde(default)]
    pub iso: Value,
    /// Port label.
    #[serde(default)]
    pub label: Value,
}

/// Authorization of a vessel by one RFMO.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VesselAuthorization {
    /// The RFMO the authorization applies to; entries without one are ignored.
    #[serde(default)]
    pub rfmo: Option<String>,
    /// Whether the vessel is known to be authorized by the RFMO.
    #[serde(default)]
    pub is_authorized: Option<bool>,
}

/// A vessel involved in an event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventVessel {
    pub id: Value,
    #[serde(rename = "type")]
    pub vessel_type: String,
    #[serde(default)]
    pub ssvid: Value,
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub flag: Value,
    #[serde(default)]
    pub origin_port: Option<PortRef>,
    #[serde(default)]
    pub destination_port: Option<PortRef>,
    #[serde(default)]
    pub authorizations: Vec<VesselAuthorization>,
}

impl EventVessel {
    /// Whether this vessel is a carrier.
    pub fn is_carrier(&self) -> bool {
        self.vessel_type == CARRIER_VESSEL_TYPE
    }

    /// RFMOs that authorize this vessel, in input order.
    pub fn authorized_rfmos(&self) -> Vec<&str> {
        self.rfmos_where(|authorized| authorized)
    }

    /// RFMOs for which the authorization of this vessel is unknown, in input order.
    pub fn unknown_rfmos(&self) -> Vec<&str> {
        self.rfmos_where(|authorized| !authorized)
    }

    fn rfmos_where(&self, keep: impl Fn(bool) -> bool) -> Vec<&str> {
        self.authorizations
            .iter()
            .filter_map(|auth| {
                let rfmo = auth.rfmo.as_deref()?;
                keep(auth.is_authorized.unwrap_or(false)).then_some(rfmo)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vessel(authorizations: Value) -> EventVessel {
        serde_json::from_value(json!({
            "id": "v1",
            "type": "carrier",
            "ssvid": "412000000",
            "name": "CARRIER ONE",
            "flag": "PAN",
            "authorizations": authorizations
        }))
        .unwrap()
    }

    #[test]
    fn test_rfmo_split() {
        let vessel = vessel(json!([
            {"rfmo": "WCPFC", "is_authorized": true},
            {"rfmo": "ICCAT", "is_authorized": false},
            {"rfmo": "IOTC", "is_authorized": true},
            {"rfmo": null, "is_authorized": true}
        ]));

        assert_eq!(vessel.authorized_rfmos(), vec!["WCPFC", "IOTC"]);
        assert_eq!(vessel.unknown_rfmos(), vec!["ICCAT"]);
    }

    #[test]
    fn test_null_authorization_flag_is_unknown() {
        let vessel = vessel(json!([{"rfmo": "SPRFMO", "is_authorized": null}]));
        assert!(vessel.authorized_rfmos().is_empty());
        assert_eq!(vessel.unknown_rfmos(), vec!["SPRFMO"]);
    }

    #[test]
    fn test_optional_fields_default() {
        let vessel: EventVessel =
            serde_json::from_value(json!({"id": "v2", "type": "fishing"})).unwrap();
        assert!(!vessel.is_carrier());
        assert!(vessel.origin_port.is_none());
        assert!(vessel.authorizations.is_empty());
        assert_eq!(vessel.flag, Value::Null);
    }
}
