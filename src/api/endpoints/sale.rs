use super::Operation;
use crate::api::client::AttomClient;
use crate::api::models::PropertyResponse;
use crate::api::options::{Params, QueryOption};
use crate::error::ApiError;

impl AttomClient {
    pub async fn sale_snapshot(&self, opts: &[QueryOption]) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::SaleSnapshot, &Params::from_options(opts))
            .await
    }

    /// Most recent sale of one property.
    pub async fn sale_detail(&self, opts: &[QueryOption]) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::SaleDetail, &Params::from_options(opts))
            .await
    }

    pub async fn sales_history_snapshot(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::SalesHistorySnapshot, &Params::from_options(opts))
            .await
    }

    /// Up to ten years of sales for one property.
    pub async fn sales_history_detail(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::SalesHistoryDetail, &Params::from_options(opts))
            .await
    }

    pub async fn sales_history_basic(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::SalesHistoryBasic, &Params::from_options(opts))
            .await
    }

    pub async fn sales_history_expanded(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::SalesHistoryExpanded, &Params::from_options(opts))
            .await
    }
}
