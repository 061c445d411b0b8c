//! Endpoint catalog.
//!
//! Every operation the client exposes maps to one fixed [`Endpoint`]: a path
//! and the [`Requirement`] its parameters must meet. The mapping is a plain
//! `match`, so it is immutable and checked for completeness at compile time.
//! The typed methods live in the submodules, grouped by API family.

use crate::api::validators::Requirement;

mod area;
mod assessment;
mod events;
mod property;
mod sale;
mod school;
mod valuation;

const GEO_ID_V4: &[&str] = &["geoIdV4"];
const GEO_ID: &[&str] = &["geoid"];
const SCHOOL_ID: &[&str] = &["schoolId"];
const ADDRESS_PAIR: &[&str] = &["address1", "address2"];
const STATE_ID: &[&str] = &["stateId"];
const GEOGRAPHY_TYPE: &[&str] = &["geographyTypeAbbreviation"];

/// Path and parameter requirement of one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub requirement: Requirement,
}

impl Endpoint {
    const fn new(path: &'static str, requirement: Requirement) -> Self {
        Endpoint { path, requirement }
    }

    /// Substitute `{name}` placeholders in the path.
    pub fn expand(&self, args: &[(&str, &str)]) -> String {
        let mut path = self.path.to_string();
        for (name, value) in args {
            path = path.replace(&format!("{{{}}}", name), value);
        }
        path
    }
}

/// Name of the first `{name}` placeholder left in `path`, if any.
pub fn unfilled_placeholder(path: &str) -> Option<&str> {
    let start = path.find('{')? + 1;
    let len = path[start..].find('}')?;
    Some(&path[start..start + len])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // Property
    PropertyId,
    PropertyAddress,
    PropertySnapshot,
    PropertyDetail,
    PropertyBasicProfile,
    PropertyExpandedProfile,
    PropertyDetailWithSchools,
    PropertyDetailMortgage,
    PropertyDetailOwner,
    PropertyDetailMortgageOwner,
    BuildingPermits,
    Preforeclosure,
    TransportationNoise,
    SalesComparablesByPropId,
    // Assessment
    AssessmentSnapshot,
    AssessmentDetail,
    AssessmentHistoryDetail,
    // Sale
    SaleSnapshot,
    SaleDetail,
    SalesHistorySnapshot,
    SalesHistoryDetail,
    SalesHistoryBasic,
    SalesHistoryExpanded,
    // Valuation
    AvmSnapshot,
    AvmDetail,
    AvmHistoryDetail,
    AttomAvmDetail,
    HomeEquity,
    RentalAvm,
    // Events
    AllEventsSnapshot,
    AllEventsDetail,
    // Area
    BoundaryDetail,
    HierarchyLookup,
    StateLookup,
    CountyLookup,
    CbsaLookup,
    GeoIdLookup,
    GeoIdLegacyLookup,
    LocationLookup,
    Community,
    PoiSearch,
    PoiCategoryLookup,
    SalesTrend,
    SalesTrendSnapshot,
    // School
    SchoolProfile,
    SchoolDistrict,
    SchoolSearch,
    SchoolSnapshot,
    SchoolDetail,
    SchoolDistrictDetail,
}

impl Operation {
    pub const ALL: &'static [Operation] = &[
        Operation::PropertyId,
        Operation::PropertyAddress,
        Operation::PropertySnapshot,
        Operation::PropertyDetail,
        Operation::PropertyBasicProfile,
        Operation::PropertyExpandedProfile,
        Operation::PropertyDetailWithSchools,
        Operation::PropertyDetailMortgage,
        Operation::PropertyDetailOwner,
        Operation::PropertyDetailMortgageOwner,
        Operation::BuildingPermits,
        Operation::Preforeclosure,
        Operation::TransportationNoise,
        Operation::SalesComparablesByPropId,
        Operation::AssessmentSnapshot,
        Operation::AssessmentDetail,
        Operation::AssessmentHistoryDetail,
        Operation::SaleSnapshot,
        Operation::SaleDetail,
        Operation::SalesHistorySnapshot,
        Operation::SalesHistoryDetail,
        Operation::SalesHistoryBasic,
        Operation::SalesHistoryExpanded,
        Operation::AvmSnapshot,
        Operation::AvmDetail,
        Operation::AvmHistoryDetail,
        Operation::AttomAvmDetail,
        Operation::HomeEquity,
        Operation::RentalAvm,
        Operation::AllEventsSnapshot,
        Operation::AllEventsDetail,
        Operation::BoundaryDetail,
        Operation::HierarchyLookup,
        Operation::StateLookup,
        Operation::CountyLookup,
        Operation::CbsaLookup,
        Operation::GeoIdLookup,
        Operation::GeoIdLegacyLookup,
        Operation::LocationLookup,
        Operation::Community,
        Operation::PoiSearch,
        Operation::PoiCategoryLookup,
        Operation::SalesTrend,
        Operation::SalesTrendSnapshot,
        Operation::SchoolProfile,
        Operation::SchoolDistrict,
        Operation::SchoolSearch,
        Operation::SchoolSnapshot,
        Operation::SchoolDetail,
        Operation::SchoolDistrictDetail,
    ];

    pub const fn endpoint(self) -> Endpoint {
        use Requirement::{AllOf, GeoContext, PropertyIdentifier, Snapshot};

        match self {
            Operation::PropertyId => Endpoint::new("/propertyapi/v1.0.0/property/id", Snapshot),
            Operation::PropertyAddress => {
                Endpoint::new("/propertyapi/v1.0.0/property/address", Snapshot)
            }
            Operation::PropertySnapshot => {
                Endpoint::new("/propertyapi/v1.0.0/property/snapshot", Snapshot)
            }
            Operation::PropertyDetail => {
                Endpoint::new("/propertyapi/v1.0.0/property/detail", PropertyIdentifier)
            }
            Operation::PropertyBasicProfile => {
                Endpoint::new("/propertyapi/v1.0.0/property/basicprofile", PropertyIdentifier)
            }
            Operation::PropertyExpandedProfile => Endpoint::new(
                "/propertyapi/v1.0.0/property/expandedprofile",
                PropertyIdentifier,
            ),
            Operation::PropertyDetailWithSchools => Endpoint::new(
                "/propertyapi/v1.0.0/property/detailwithschools",
                PropertyIdentifier,
            ),
            Operation::PropertyDetailMortgage => Endpoint::new(
                "/propertyapi/v1.0.0/property/detailmortgage",
                PropertyIdentifier,
            ),
            Operation::PropertyDetailOwner => {
                Endpoint::new("/propertyapi/v1.0.0/property/detailowner", PropertyIdentifier)
            }
            Operation::PropertyDetailMortgageOwner => Endpoint::new(
                "/propertyapi/v1.0.0/property/detailmortgageowner",
                PropertyIdentifier,
            ),
            Operation::BuildingPermits => Endpoint::new(
                "/propertyapi/v1.0.0/property/buildingpermits",
                PropertyIdentifier,
            ),
            Operation::Preforeclosure => {
                Endpoint::new("/property/v3/preforeclosuredetails", AllOf(ADDRESS_PAIR))
            }
            Operation::TransportationNoise => {
                Endpoint::new("/propertyapi/v1.0.0/transportationnoise", GeoContext)
            }
            Operation::SalesComparablesByPropId => {
                Endpoint::new("/property/v2/salescomparables/propid/{propId}", Requirement::None)
            }
            Operation::AssessmentSnapshot => {
                Endpoint::new("/propertyapi/v1.0.0/assessment/snapshot", Snapshot)
            }
            Operation::AssessmentDetail => {
                Endpoint::new("/propertyapi/v1.0.0/assessment/detail", PropertyIdentifier)
            }
            Operation::AssessmentHistoryDetail => Endpoint::new(
                "/propertyapi/v1.0.0/assessmenthistory/detail",
                PropertyIdentifier,
            ),
            Operation::SaleSnapshot => Endpoint::new("/propertyapi/v1.0.0/sale/snapshot", Snapshot),
            Operation::SaleDetail => {
                Endpoint::new("/propertyapi/v1.0.0/sale/detail", PropertyIdentifier)
            }
            Operation::SalesHistorySnapshot => {
                Endpoint::new("/propertyapi/v1.0.0/saleshistory/snapshot", Snapshot)
            }
            Operation::SalesHistoryDetail => {
                Endpoint::new("/propertyapi/v1.0.0/saleshistory/detail", PropertyIdentifier)
            }
            Operation::SalesHistoryBasic => Endpoint::new(
                "/propertyapi/v1.0.0/saleshistory/basichistory",
                PropertyIdentifier,
            ),
            Operation::SalesHistoryExpanded => Endpoint::new(
                "/propertyapi/v1.0.0/saleshistory/expandedhistory",
                PropertyIdentifier,
            ),
            Operation::AvmSnapshot => Endpoint::new("/propertyapi/v1.0.0/avm/snapshot", Snapshot),
            Operation::AvmDetail => {
                Endpoint::new("/propertyapi/v1.0.0/avm/detail", PropertyIdentifier)
            }
            Operation::AvmHistoryDetail => {
                Endpoint::new("/propertyapi/v1.0.0/avmhistory/detail", PropertyIdentifier)
            }
            Operation::AttomAvmDetail => {
                Endpoint::new("/propertyapi/v1.0.0/attomavm/detail", PropertyIdentifier)
            }
            Operation::HomeEquity => {
                Endpoint::new("/propertyapi/v1.0.0/valuation/homeequity", PropertyIdentifier)
            }
            Operation::RentalAvm => {
                Endpoint::new("/propertyapi/v1.0.0/valuation/rentalavm", PropertyIdentifier)
            }
            Operation::AllEventsSnapshot => {
                Endpoint::new("/propertyapi/v1.0.0/allevents/snapshot", Snapshot)
            }
            Operation::AllEventsDetail => {
                Endpoint::new("/propertyapi/v1.0.0/allevents/detail", PropertyIdentifier)
            }
            Operation::BoundaryDetail => Endpoint::new("/v4/area/boundary/detail", AllOf(GEO_ID_V4)),
            Operation::HierarchyLookup => Endpoint::new("/v4/area/hierarchy/lookup", GeoContext),
            Operation::StateLookup => Endpoint::new("/areaapi/v2.0.0/state/lookup", Requirement::None),
            Operation::CountyLookup => {
                Endpoint::new("/areaapi/v2.0.0/county/lookup", AllOf(STATE_ID))
            }
            Operation::CbsaLookup => Endpoint::new("/areaapi/v2.0.0/cbsa/lookup", Requirement::None),
            Operation::GeoIdLookup => Endpoint::new("/v4/area/geoid/lookup", AllOf(GEO_ID_V4)),
            Operation::GeoIdLegacyLookup => {
                Endpoint::new("/v4/area/geoid/legacylookup", AllOf(GEO_ID))
            }
            Operation::LocationLookup => {
                Endpoint::new("/v4/location/lookup", AllOf(GEOGRAPHY_TYPE))
            }
            Operation::Community => Endpoint::new("/v4/neighborhood/community", AllOf(GEO_ID_V4)),
            Operation::PoiSearch => Endpoint::new("/v4/neighborhood/poi", GeoContext),
            Operation::PoiCategoryLookup => {
                Endpoint::new("/v4/neighborhood/poi/categorylookup", Requirement::None)
            }
            Operation::SalesTrend => {
                Endpoint::new("/v4/transaction/salestrend", AllOf(GEO_ID_V4))
            }
            Operation::SalesTrendSnapshot => {
                Endpoint::new("/propertyapi/v1.0.0/salestrend/snapshot", AllOf(GEO_ID))
            }
            Operation::SchoolProfile => Endpoint::new("/v4/school/profile", AllOf(SCHOOL_ID)),
            Operation::SchoolDistrict => Endpoint::new("/v4/school/district", AllOf(GEO_ID_V4)),
            Operation::SchoolSearch => Endpoint::new("/v4/school/search", GeoContext),
            Operation::SchoolSnapshot => {
                Endpoint::new("/propertyapi/v1.0.0/school/snapshot", GeoContext)
            }
            Operation::SchoolDetail => {
                Endpoint::new("/propertyapi/v1.0.0/school/detail", AllOf(&["id"]))
            }
            Operation::SchoolDistrictDetail => {
                Endpoint::new("/propertyapi/v1.0.0/school/districtdetail", AllOf(&["id"]))
            }
        }
    }
}
