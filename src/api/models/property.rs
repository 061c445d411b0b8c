use super::status::Status;
use super::{deserialize_lenient_f64, deserialize_lenient_u64};
use serde::{Deserialize, Serialize};

/// Envelope shared by the property, assessment, sale, sales history, AVM,
/// valuation and event endpoints. Which sections of each [`Property`] are
/// filled depends on the endpoint and its verbosity tier.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PropertyResponse {
    pub status: Option<Status>,
    #[serde(default)]
    pub property: Vec<Property>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Property {
    pub identifier: Option<Identifier>,
    pub address: Option<Address>,
    pub location: Option<Location>,
    pub summary: Option<Summary>,
    pub lot: Option<Lot>,
    pub building: Option<Building>,
    pub assessment: Option<Assessment>,
    pub sale: Option<Sale>,
    pub avm: Option<Avm>,
    #[serde(rename = "salehistory", default)]
    pub sale_history: Vec<Sale>,
    #[serde(rename = "assessmenthistory", default)]
    pub assessment_history: Vec<Assessment>,
    pub vintage: Option<Vintage>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Identifier {
    #[serde(rename = "Id", deserialize_with = "deserialize_lenient_u64", default)]
    pub id: Option<u64>,
    #[serde(rename = "attomId", deserialize_with = "deserialize_lenient_u64", default)]
    pub attom_id: Option<u64>,
    pub fips: Option<String>,
    pub apn: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Address {
    pub country: Option<String>,
    #[serde(rename = "countrySubd")]
    pub country_subdivision: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub locality: Option<String>,
    #[serde(rename = "oneLine")]
    pub one_line: Option<String>,
    pub postal1: Option<String>,
    pub postal2: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Location {
    pub accuracy: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient_f64", default)]
    pub latitude: Option<f64>,
    #[serde(deserialize_with = "deserialize_lenient_f64", default)]
    pub longitude: Option<f64>,
    #[serde(deserialize_with = "deserialize_lenient_f64", default)]
    pub distance: Option<f64>,
    pub geoid: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Summary {
    #[serde(rename = "propclass")]
    pub property_class: Option<String>,
    #[serde(rename = "proptype")]
    pub property_type: Option<String>,
    #[serde(rename = "propLandUse")]
    pub land_use: Option<String>,
    #[serde(rename = "propIndicator")]
    pub property_indicator: Option<String>,
    #[serde(rename = "yearbuilt", deserialize_with = "deserialize_lenient_u64", default)]
    pub year_built: Option<u64>,
    #[serde(rename = "absenteeInd")]
    pub absentee_indicator: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Lot {
    #[serde(rename = "lotnum")]
    pub lot_number: Option<String>,
    #[serde(rename = "lotsize1", deserialize_with = "deserialize_lenient_f64", default)]
    pub size_acres: Option<f64>,
    #[serde(rename = "lotsize2", deserialize_with = "deserialize_lenient_f64", default)]
    pub size_sqft: Option<f64>,
    #[serde(rename = "zoningType")]
    pub zoning_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Building {
    pub size: Option<BuildingSize>,
    pub rooms: Option<Rooms>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BuildingSize {
    #[serde(rename = "bldgsize", deserialize_with = "deserialize_lenient_f64", default)]
    pub building_size: Option<f64>,
    #[serde(rename = "livingsize", deserialize_with = "deserialize_lenient_f64", default)]
    pub living_size: Option<f64>,
    #[serde(rename = "universalsize", deserialize_with = "deserialize_lenient_f64", default)]
    pub universal_size: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Rooms {
    #[serde(rename = "bathstotal", deserialize_with = "deserialize_lenient_f64", default)]
    pub baths_total: Option<f64>,
    #[serde(deserialize_with = "deserialize_lenient_u64", default)]
    pub beds: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Assessment {
    pub assessed: Option<AssessedValues>,
    pub market: Option<MarketValues>,
    pub tax: Option<Tax>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AssessedValues {
    #[serde(rename = "assdttlvalue", deserialize_with = "deserialize_lenient_f64", default)]
    pub total: Option<f64>,
    #[serde(rename = "assdlandvalue", deserialize_with = "deserialize_lenient_f64", default)]
    pub land: Option<f64>,
    #[serde(rename = "assdimprvalue", deserialize_with = "deserialize_lenient_f64", default)]
    pub improvements: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MarketValues {
    #[serde(rename = "mktttlvalue", deserialize_with = "deserialize_lenient_f64", default)]
    pub total: Option<f64>,
    #[serde(rename = "mktlandvalue", deserialize_with = "deserialize_lenient_f64", default)]
    pub land: Option<f64>,
    #[serde(rename = "mktimprvalue", deserialize_with = "deserialize_lenient_f64", default)]
    pub improvements: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Tax {
    #[serde(rename = "taxamt", deserialize_with = "deserialize_lenient_f64", default)]
    pub amount: Option<f64>,
    #[serde(rename = "taxyear", deserialize_with = "deserialize_lenient_u64", default)]
    pub year: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Sale {
    #[serde(rename = "saleSearchDate")]
    pub search_date: Option<String>,
    #[serde(rename = "saleTransDate")]
    pub transaction_date: Option<String>,
    pub amount: Option<SaleAmount>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SaleAmount {
    #[serde(rename = "saleamt", deserialize_with = "deserialize_lenient_f64", default)]
    pub sale_amount: Option<f64>,
    #[serde(rename = "salerecdate")]
    pub recording_date: Option<String>,
    #[serde(rename = "saletranstype")]
    pub transaction_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Avm {
    #[serde(rename = "eventDate")]
    pub event_date: Option<String>,
    pub amount: Option<AvmAmount>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AvmAmount {
    #[serde(deserialize_with = "deserialize_lenient_f64", default)]
    pub value: Option<f64>,
    #[serde(deserialize_with = "deserialize_lenient_f64", default)]
    pub high: Option<f64>,
    #[serde(deserialize_with = "deserialize_lenient_f64", default)]
    pub low: Option<f64>,
    #[serde(deserialize_with = "deserialize_lenient_f64", default)]
    pub scr: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Vintage {
    #[serde(rename = "lastModified")]
    pub last_modified: Option<String>,
    #[serde(rename = "pubDate")]
    pub pub_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PreforeclosureResponse {
    pub status: Option<Status>,
    #[serde(default)]
    pub preforeclosure: Vec<Preforeclosure>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Preforeclosure {
    #[serde(rename = "recordingDate")]
    pub recording_date: Option<String>,
    #[serde(rename = "documentType")]
    pub document_type: Option<String>,
    #[serde(rename = "defaultAmount", deserialize_with = "deserialize_lenient_f64", default)]
    pub default_amount: Option<f64>,
    #[serde(rename = "auctionDate")]
    pub auction_date: Option<String>,
}
