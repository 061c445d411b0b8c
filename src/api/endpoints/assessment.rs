use super::Operation;
use crate::api::client::AttomClient;
use crate::api::models::PropertyResponse;
use crate::api::options::{Params, QueryOption};
use crate::error::ApiError;

impl AttomClient {
    /// Tax assessments for every property in an area.
    pub async fn assessment_snapshot(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::AssessmentSnapshot, &Params::from_options(opts))
            .await
    }

    pub async fn assessment_detail(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::AssessmentDetail, &Params::from_options(opts))
            .await
    }

    /// Assessment records for prior tax years.
    pub async fn assessment_history(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::AssessmentHistoryDetail, &Params::from_options(opts))
            .await
    }
}
