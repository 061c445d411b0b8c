//! Response models for the ATTOM API.
//!
//! Every response is a best-effort partial decode: all fields are optional
//! and unknown fields are ignored, so a schema change on the server side
//! degrades to `None` rather than a decode failure.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub mod area;
pub mod property;
pub mod school;
pub mod status;

pub use area::{
    Area, AreaResponse, Community, CommunityResponse, PoiResponse, PointOfInterest, SalesTrend,
    SalesTrendResponse,
};
pub use property::{
    Address, Assessment, Avm, Building, Identifier, Location, Lot, Preforeclosure,
    PreforeclosureResponse, Property, PropertyResponse, Sale, Summary,
};
pub use school::{School, SchoolDistrict, SchoolDistrictResponse, SchoolResponse};
pub use status::Status;

/// Custom deserializer: accepts a JSON number or a numeric string.
///
/// The API renders coordinates and some amounts as strings
/// (`"latitude": "34.0522"`) and others as numbers; anything that is not a
/// number becomes `None` instead of failing the whole response.
pub(crate) fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => Ok(n.as_f64()),
        Value::String(s) => Ok(s.trim().parse::<f64>().ok()),
        _ => Ok(None),
    }
}

/// Same as [`deserialize_lenient_f64`] for integral values such as ids.
pub(crate) fn deserialize_lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => Ok(n.as_u64()),
        Value::String(s) => Ok(s.trim().parse::<u64>().ok()),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "deserialize_lenient_f64", default)]
        value: Option<f64>,
        #[serde(deserialize_with = "deserialize_lenient_u64", default)]
        id: Option<u64>,
    }

    #[test]
    fn test_lenient_numbers() {
        let probe: Probe = serde_json::from_str(r#"{"value": "34.0522", "id": "156"}"#).unwrap();
        assert_eq!(probe.value, Some(34.0522));
        assert_eq!(probe.id, Some(156));

        let probe: Probe = serde_json::from_str(r#"{"value": -118.5, "id": 7}"#).unwrap();
        assert_eq!(probe.value, Some(-118.5));
        assert_eq!(probe.id, Some(7));

        let probe: Probe = serde_json::from_str(r#"{"value": "n/a", "id": null}"#).unwrap();
        assert_eq!(probe.value, None);
        assert_eq!(probe.id, None);

        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe.value, None);
        assert_eq!(probe.id, None);
    }
}
