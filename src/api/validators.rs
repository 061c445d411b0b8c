//! Identifier preconditions checked before a request leaves the process.
//!
//! Each endpoint carries one [`Requirement`]. It is evaluated once against
//! the fully assembled [`Params`]; a rejection means no request is sent.

use crate::api::options::Params;
use crate::error::ApiError;

/// Which parameter combination an endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Always satisfied.
    None,
    /// `attomid`, `id`, `address` or `address1`, or `fips` with `APN`.
    PropertyIdentifier,
    /// `address` or `address1`, or `latitude` with `longitude`.
    GeoContext,
    /// Every listed key.
    AllOf(&'static [&'static str]),
    /// Any property identifier, `postalcode`, or `latitude` with
    /// `longitude` and `radius`.
    Snapshot,
}

impl Requirement {
    /// Check `params`, returning [`ApiError::MissingParameter`] describing
    /// the accepted combinations when none is present.
    pub fn check(&self, params: &Params) -> Result<(), ApiError> {
        match self {
            Requirement::None => Ok(()),
            Requirement::PropertyIdentifier => require_property_identifier(params),
            Requirement::GeoContext => ensure_geo_context(params),
            Requirement::AllOf(keys) => require_all(params, keys),
            Requirement::Snapshot => require_snapshot_identifier(params),
        }
    }
}

fn has_any(params: &Params, keys: &[&str]) -> bool {
    keys.iter().any(|key| params.contains(key))
}

fn has_all(params: &Params, keys: &[&str]) -> bool {
    keys.iter().all(|key| params.contains(key))
}

fn missing(description: &str) -> ApiError {
    ApiError::MissingParameter(description.to_string())
}

pub fn require_property_identifier(params: &Params) -> Result<(), ApiError> {
    if has_any(params, &["attomid", "id", "address", "address1"])
        || has_all(params, &["fips", "APN"])
    {
        return Ok(());
    }
    Err(missing(
        "one of attomid, id, address, address1, or both fips and APN",
    ))
}

pub fn ensure_geo_context(params: &Params) -> Result<(), ApiError> {
    if has_any(params, &["address", "address1"]) || has_all(params, &["latitude", "longitude"]) {
        return Ok(());
    }
    Err(missing("address, address1, or both latitude and longitude"))
}

pub fn require_all(params: &Params, keys: &[&str]) -> Result<(), ApiError> {
    if has_all(params, keys) {
        return Ok(());
    }
    Err(ApiError::MissingParameter(keys.join(" and ")))
}

pub fn require_snapshot_identifier(params: &Params) -> Result<(), ApiError> {
    if has_any(params, &["attomid", "id", "address", "address1", "postalcode"])
        || has_all(params, &["fips", "APN"])
    {
        return Ok(());
    }
    if has_all(params, &["latitude", "longitude"]) {
        if params.contains("radius") {
            return Ok(());
        }
        return Err(missing("radius (required with latitude and longitude)"));
    }
    Err(missing(
        "one of attomid, id, address, address1, postalcode, both fips and APN, \
         or latitude, longitude and radius",
    ))
}
