use super::status::Status;
use super::{deserialize_lenient_f64, deserialize_lenient_u64};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SchoolResponse {
    pub status: Option<Status>,
    #[serde(default)]
    pub school: Vec<School>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct School {
    #[serde(rename = "schoolId")]
    pub school_id: Option<String>,
    #[serde(rename = "schoolName")]
    pub name: Option<String>,
    #[serde(rename = "schoolType")]
    pub school_type: Option<String>,
    #[serde(rename = "gradeLevel")]
    pub grade_level: Option<String>,
    #[serde(rename = "districtName")]
    pub district_name: Option<String>,
    #[serde(rename = "studentCount", deserialize_with = "deserialize_lenient_u64", default)]
    pub student_count: Option<u64>,
    #[serde(rename = "schoolRating")]
    pub rating: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient_f64", default)]
    pub latitude: Option<f64>,
    #[serde(deserialize_with = "deserialize_lenient_f64", default)]
    pub longitude: Option<f64>,
    #[serde(deserialize_with = "deserialize_lenient_f64", default)]
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SchoolDistrictResponse {
    pub status: Option<Status>,
    #[serde(default)]
    pub district: Vec<SchoolDistrict>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SchoolDistrict {
    #[serde(rename = "districtId")]
    pub district_id: Option<String>,
    #[serde(rename = "districtName")]
    pub name: Option<String>,
    #[serde(rename = "schoolCount", deserialize_with = "deserialize_lenient_u64", default)]
    pub school_count: Option<u64>,
    #[serde(rename = "geoIdV4")]
    pub geo_id_v4: Option<String>,
}
