use super::Operation;
use crate::api::client::AttomClient;
use crate::api::models::{PreforeclosureResponse, PropertyResponse};
use crate::api::options::{self, Params, QueryOption};
use crate::error::ApiError;

impl AttomClient {
    /// Property identifiers matching the given filters.
    pub async fn property_id(&self, opts: &[QueryOption]) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::PropertyId, &Params::from_options(opts))
            .await
    }

    pub async fn property_address(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::PropertyAddress, &Params::from_options(opts))
            .await
    }

    /// Summary records for every property in an area.
    pub async fn property_snapshot(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::PropertySnapshot, &Params::from_options(opts))
            .await
    }

    /// Full detail for one property.
    ///
    /// Needs an identifier: `attomid`, `id`, `address`, `address1` or both
    /// `fips` and `APN`.
    pub async fn property_detail(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::PropertyDetail, &Params::from_options(opts))
            .await
    }

    pub async fn property_detail_by_id(
        &self,
        attom_id: u64,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        let params = AttomClient::assemble(&[options::attom_id(attom_id)], opts);
        self.fetch(Operation::PropertyDetail, &params).await
    }

    pub async fn property_detail_by_address(
        &self,
        address1: &str,
        address2: &str,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        let params = AttomClient::assemble(
            &[options::address1(address1), options::address2(address2)],
            opts,
        );
        self.fetch(Operation::PropertyDetail, &params).await
    }

    pub async fn property_basic_profile(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::PropertyBasicProfile, &Params::from_options(opts))
            .await
    }

    pub async fn property_expanded_profile(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::PropertyExpandedProfile, &Params::from_options(opts))
            .await
    }

    pub async fn property_detail_with_schools(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(
            Operation::PropertyDetailWithSchools,
            &Params::from_options(opts),
        )
        .await
    }

    pub async fn property_detail_mortgage(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::PropertyDetailMortgage, &Params::from_options(opts))
            .await
    }

    pub async fn property_detail_owner(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::PropertyDetailOwner, &Params::from_options(opts))
            .await
    }

    pub async fn property_detail_mortgage_owner(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(
            Operation::PropertyDetailMortgageOwner,
            &Params::from_options(opts),
        )
        .await
    }

    /// Building permits filed against one property.
    pub async fn building_permits(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::BuildingPermits, &Params::from_options(opts))
            .await
    }

    /// Pre-foreclosure filings for the property at `address1`, `address2`.
    pub async fn preforeclosure(
        &self,
        address1: &str,
        address2: &str,
        opts: &[QueryOption],
    ) -> Result<PreforeclosureResponse, ApiError> {
        let params = AttomClient::assemble(
            &[options::address1(address1), options::address2(address2)],
            opts,
        );
        self.fetch(Operation::Preforeclosure, &params).await
    }

    /// Road, rail and aircraft noise scores around an address or point.
    pub async fn transportation_noise(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::TransportationNoise, &Params::from_options(opts))
            .await
    }

    /// Comparable sales for the property with ATTOM id `prop_id`.
    ///
    /// The id is part of the path rather than the query.
    pub async fn sales_comparables_by_id(
        &self,
        prop_id: u64,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        let operation = Operation::SalesComparablesByPropId;
        let id = prop_id.to_string();
        let path = operation.endpoint().expand(&[("propId", &id)]);
        self.fetch_path(operation, &path, &Params::from_options(opts))
            .await
    }
}
