use super::Operation;
use crate::api::client::AttomClient;
use crate::api::models::{SchoolDistrictResponse, SchoolResponse};
use crate::api::options::{self, Params, QueryOption};
use crate::error::ApiError;

impl AttomClient {
    pub async fn school_profile(
        &self,
        school_id: &str,
        opts: &[QueryOption],
    ) -> Result<SchoolResponse, ApiError> {
        let params = AttomClient::assemble(&[options::school_id(school_id)], opts);
        self.fetch(Operation::SchoolProfile, &params).await
    }

    /// District covering the area `geo_id_v4`.
    pub async fn school_district(
        &self,
        geo_id_v4: &str,
        opts: &[QueryOption],
    ) -> Result<SchoolDistrictResponse, ApiError> {
        let params = AttomClient::assemble(&[options::geo_id_v4(geo_id_v4)], opts);
        self.fetch(Operation::SchoolDistrict, &params).await
    }

    /// Schools near an address or point.
    pub async fn school_search(&self, opts: &[QueryOption]) -> Result<SchoolResponse, ApiError> {
        self.fetch(Operation::SchoolSearch, &Params::from_options(opts))
            .await
    }

    pub async fn school_snapshot(&self, opts: &[QueryOption]) -> Result<SchoolResponse, ApiError> {
        self.fetch(Operation::SchoolSnapshot, &Params::from_options(opts))
            .await
    }

    pub async fn school_detail(
        &self,
        id: &str,
        opts: &[QueryOption],
    ) -> Result<SchoolResponse, ApiError> {
        let params = AttomClient::assemble(&[options::param("id", id)], opts);
        self.fetch(Operation::SchoolDetail, &params).await
    }

    pub async fn school_district_detail(
        &self,
        id: &str,
        opts: &[QueryOption],
    ) -> Result<SchoolDistrictResponse, ApiError> {
        let params = AttomClient::assemble(&[options::param("id", id)], opts);
        self.fetch(Operation::SchoolDistrictDetail, &params).await
    }
}
