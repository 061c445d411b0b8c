use super::deserialize_lenient_f64;
use super::status::Status;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Geographic areas returned by the boundary, hierarchy and lookup endpoints.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AreaResponse {
    pub status: Option<Status>,
    #[serde(default)]
    pub area: Vec<Area>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Area {
    #[serde(rename = "geoIdV4")]
    pub geo_id_v4: Option<String>,
    #[serde(rename = "geoId")]
    pub geo_id: Option<String>,
    #[serde(rename = "geographyName")]
    pub name: Option<String>,
    #[serde(rename = "geographyTypeAbbreviation")]
    pub type_abbreviation: Option<String>,
    #[serde(rename = "geographyTypeName")]
    pub type_name: Option<String>,
    #[serde(rename = "stateId")]
    pub state_id: Option<String>,
    /// Boundary geometry as returned by the server (WKT or GeoJSON).
    pub boundary: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CommunityResponse {
    pub status: Option<Status>,
    pub community: Option<Community>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Community {
    pub geography: Option<Area>,
    pub demographics: Option<Value>,
    pub crime: Option<Value>,
    #[serde(rename = "naturalDisasters")]
    pub natural_disasters: Option<Value>,
    pub climate: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PoiResponse {
    pub status: Option<Status>,
    #[serde(default)]
    pub poi: Vec<PointOfInterest>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PointOfInterest {
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "lineOfBusiness")]
    pub line_of_business: Option<String>,
    pub address: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient_f64", default)]
    pub latitude: Option<f64>,
    #[serde(deserialize_with = "deserialize_lenient_f64", default)]
    pub longitude: Option<f64>,
    #[serde(deserialize_with = "deserialize_lenient_f64", default)]
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SalesTrendResponse {
    pub status: Option<Status>,
    #[serde(rename = "salesTrends", default)]
    pub sales_trends: Vec<SalesTrend>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SalesTrend {
    #[serde(rename = "dateRange")]
    pub date_range: Option<Value>,
    #[serde(rename = "homeSaleCount", deserialize_with = "deserialize_lenient_f64", default)]
    pub home_sale_count: Option<f64>,
    #[serde(rename = "avgSalePrice", deserialize_with = "deserialize_lenient_f64", default)]
    pub average_sale_price: Option<f64>,
    #[serde(rename = "medSalePrice", deserialize_with = "deserialize_lenient_f64", default)]
    pub median_sale_price: Option<f64>,
}
