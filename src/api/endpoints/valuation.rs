use super::Operation;
use crate::api::client::AttomClient;
use crate::api::models::PropertyResponse;
use crate::api::options::{self, Params, QueryOption};
use crate::error::ApiError;

impl AttomClient {
    pub async fn avm_snapshot(&self, opts: &[QueryOption]) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::AvmSnapshot, &Params::from_options(opts))
            .await
    }

    /// Automated valuation for one property.
    pub async fn avm_detail(&self, opts: &[QueryOption]) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::AvmDetail, &Params::from_options(opts))
            .await
    }

    pub async fn avm_detail_by_id(
        &self,
        attom_id: u64,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        let params = AttomClient::assemble(&[options::attom_id(attom_id)], opts);
        self.fetch(Operation::AvmDetail, &params).await
    }

    pub async fn avm_history(&self, opts: &[QueryOption]) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::AvmHistoryDetail, &Params::from_options(opts))
            .await
    }

    pub async fn attom_avm_detail(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::AttomAvmDetail, &Params::from_options(opts))
            .await
    }

    /// Estimated equity: AVM minus outstanding loan balances.
    pub async fn home_equity(&self, opts: &[QueryOption]) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::HomeEquity, &Params::from_options(opts))
            .await
    }

    pub async fn rental_avm(&self, opts: &[QueryOption]) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::RentalAvm, &Params::from_options(opts))
            .await
    }
}
