use super::Operation;
use crate::api::client::AttomClient;
use crate::api::models::{
    AreaResponse, CommunityResponse, PoiResponse, PropertyResponse, SalesTrendResponse,
};
use crate::api::options::{self, Params, QueryOption};
use crate::error::ApiError;

impl AttomClient {
    /// Boundary geometry of the area `geo_id_v4`.
    pub async fn boundary_detail(
        &self,
        geo_id_v4: &str,
        opts: &[QueryOption],
    ) -> Result<AreaResponse, ApiError> {
        let params = AttomClient::assemble(&[options::geo_id_v4(geo_id_v4)], opts);
        self.fetch(Operation::BoundaryDetail, &params).await
    }

    /// Every area containing an address or point.
    pub async fn hierarchy_lookup(&self, opts: &[QueryOption]) -> Result<AreaResponse, ApiError> {
        self.fetch(Operation::HierarchyLookup, &Params::from_options(opts))
            .await
    }

    pub async fn state_lookup(&self, opts: &[QueryOption]) -> Result<AreaResponse, ApiError> {
        self.fetch(Operation::StateLookup, &Params::from_options(opts))
            .await
    }

    pub async fn county_lookup(
        &self,
        state_id: &str,
        opts: &[QueryOption],
    ) -> Result<AreaResponse, ApiError> {
        let params = AttomClient::assemble(&[options::state_id(state_id)], opts);
        self.fetch(Operation::CountyLookup, &params).await
    }

    pub async fn cbsa_lookup(&self, opts: &[QueryOption]) -> Result<AreaResponse, ApiError> {
        self.fetch(Operation::CbsaLookup, &Params::from_options(opts))
            .await
    }

    pub async fn geo_id_lookup(
        &self,
        geo_id_v4: &str,
        opts: &[QueryOption],
    ) -> Result<AreaResponse, ApiError> {
        let params = AttomClient::assemble(&[options::geo_id_v4(geo_id_v4)], opts);
        self.fetch(Operation::GeoIdLookup, &params).await
    }

    /// Translate a legacy `geoid` into its v4 identifiers.
    pub async fn geo_id_legacy_lookup(
        &self,
        geo_id: &str,
        opts: &[QueryOption],
    ) -> Result<AreaResponse, ApiError> {
        let params = AttomClient::assemble(&[options::geo_id(geo_id)], opts);
        self.fetch(Operation::GeoIdLegacyLookup, &params).await
    }

    pub async fn location_lookup(
        &self,
        geography_type: &str,
        opts: &[QueryOption],
    ) -> Result<AreaResponse, ApiError> {
        let params = AttomClient::assemble(&[options::geography_type(geography_type)], opts);
        self.fetch(Operation::LocationLookup, &params).await
    }

    /// Demographics, crime, climate and natural hazard profile of an area.
    pub async fn community(
        &self,
        geo_id_v4: &str,
        opts: &[QueryOption],
    ) -> Result<CommunityResponse, ApiError> {
        let params = AttomClient::assemble(&[options::geo_id_v4(geo_id_v4)], opts);
        self.fetch(Operation::Community, &params).await
    }

    pub async fn poi_search(&self, opts: &[QueryOption]) -> Result<PoiResponse, ApiError> {
        self.fetch(Operation::PoiSearch, &Params::from_options(opts))
            .await
    }

    pub async fn poi_category_lookup(
        &self,
        opts: &[QueryOption],
    ) -> Result<PoiResponse, ApiError> {
        self.fetch(Operation::PoiCategoryLookup, &Params::from_options(opts))
            .await
    }

    /// Sale counts and prices over time for the area `geo_id_v4`.
    pub async fn sales_trend(
        &self,
        geo_id_v4: &str,
        opts: &[QueryOption],
    ) -> Result<SalesTrendResponse, ApiError> {
        let params = AttomClient::assemble(&[options::geo_id_v4(geo_id_v4)], opts);
        self.fetch(Operation::SalesTrend, &params).await
    }

    pub async fn sales_trend_snapshot(
        &self,
        geo_id: &str,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        let params = AttomClient::assemble(&[options::geo_id(geo_id)], opts);
        self.fetch(Operation::SalesTrendSnapshot, &params).await
    }
}
