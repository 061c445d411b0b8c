use super::Operation;
use crate::api::client::AttomClient;
use crate::api::models::PropertyResponse;
use crate::api::options::{Params, QueryOption};
use crate::error::ApiError;

impl AttomClient {
    /// Assessment, AVM and sale events for every property in an area.
    pub async fn all_events_snapshot(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::AllEventsSnapshot, &Params::from_options(opts))
            .await
    }

    pub async fn all_events_detail(
        &self,
        opts: &[QueryOption],
    ) -> Result<PropertyResponse, ApiError> {
        self.fetch(Operation::AllEventsDetail, &Params::from_options(opts))
            .await
    }
}
