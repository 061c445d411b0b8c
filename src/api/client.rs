use crate::api::endpoints::{Operation, unfilled_placeholder};
use crate::api::options::{Params, QueryOption};
use crate::api::transport::{self, ReqwestTransport, ResponseBody, Transport};
use crate::error::ApiError;
use crate::storage::config::Config;
use crate::storage::credentials::get_api_key;
use crate::utils::validation::{validate_api_key, validate_url};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Client for the ATTOM API.
///
/// Immutable once built and cheap to clone; clones share one transport.
#[derive(Clone)]
pub struct AttomClient {
    transport: Arc<dyn Transport>,
}

/// What to do with a successful body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Consume {
    Buffer,
    Drain,
}

impl AttomClient {
    // Create client against the given gateway with default settings
    pub fn new(base_url: String, api_key: String) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(base_url, api_key)?;
        Ok(Self::with_transport(transport))
    }

    pub fn with_transport<T>(transport: T) -> Self
    where
        T: Transport + 'static,
    {
        AttomClient {
            transport: Arc::new(transport),
        }
    }

    /// Build from a loaded [`Config`] and the `ATTOM_API_KEY` environment
    /// variable.
    pub fn from_config(config: &Config) -> crate::Result<Self> {
        let api_key = get_api_key().unwrap_or_default();
        Self::from_config_with_key(config, &api_key)
    }

    pub fn from_config_with_key(config: &Config, api_key: &str) -> crate::Result<Self> {
        let url = config.resolved_url();
        validate_url(&url)?;
        validate_api_key(api_key)?;

        let transport =
            ReqwestTransport::with_timeout(url, api_key.to_string(), config.timeout_secs())
                .map_err(ApiError::from)?;
        Ok(Self::with_transport(transport))
    }

    /// Seed options first, caller options after, so the caller can override.
    pub(crate) fn assemble(seeds: &[QueryOption], opts: &[QueryOption]) -> Params {
        let mut params = Params::from_options(seeds);
        for opt in opts {
            opt.apply(&mut params);
        }
        params
    }

    /// Run `operation` and decode the JSON body into `T`.
    ///
    /// Operations whose path carries a placeholder fail with
    /// [`ApiError::MissingParameter`]; use their endpoint method instead
    /// (e.g. [`sales_comparables_by_id`](Self::sales_comparables_by_id)).
    pub async fn fetch<T>(&self, operation: Operation, params: &Params) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let path = operation.endpoint().path;
        self.fetch_path(operation, path, params).await
    }

    /// Run `operation` and throw the body away.
    pub async fn fetch_drain(&self, operation: Operation, params: &Params) -> Result<(), ApiError> {
        let path = operation.endpoint().path;
        self.execute(operation, path, params, Consume::Drain, |_| Ok(()))
            .await
    }

    /// Same as [`fetch`](Self::fetch) for operations whose path has been
    /// expanded from a template.
    pub(crate) async fn fetch_path<T>(
        &self,
        operation: Operation,
        path: &str,
        params: &Params,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.execute(operation, path, params, Consume::Buffer, |body| {
            serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
                endpoint: path.to_string(),
                source,
            })
        })
        .await
    }

    async fn execute<R, F>(
        &self,
        operation: Operation,
        path: &str,
        params: &Params,
        consume: Consume,
        on_success: F,
    ) -> Result<R, ApiError>
    where
        F: FnOnce(Vec<u8>) -> Result<R, ApiError> + Send,
    {
        let endpoint = operation.endpoint();
        if let Err(err) = endpoint.requirement.check(params) {
            log::debug!("{} rejected before dispatch: {}", path, err);
            return Err(err);
        }
        // Templated paths must be expanded by the endpoint method first
        if let Some(name) = unfilled_placeholder(path) {
            log::debug!("{} rejected before dispatch: unfilled {{{}}}", path, name);
            return Err(ApiError::MissingParameter(name.to_string()));
        }

        log::debug!("GET {} ({} parameters)", path, params.len());
        let response = self.transport.get(path, &params.to_pairs()).await?;
        let status = response.status;
        let mut body = response.body;

        let outcome = if (200..300).contains(&status) {
            read_success(body.as_mut(), consume)
                .await
                .and_then(on_success)
        } else {
            log::debug!("GET {} returned status {}", path, status);
            Err(read_failure(body.as_mut(), status).await)
        };

        finish(body, outcome)
    }
}

async fn read_success(body: &mut dyn ResponseBody, consume: Consume) -> Result<Vec<u8>, ApiError> {
    match consume {
        Consume::Buffer => transport::read_to_end(body)
            .await
            .map_err(ApiError::ReadBody),
        Consume::Drain => {
            let discarded = transport::drain(body).await.map_err(ApiError::ReadBody)?;
            log::trace!("discarded {} body bytes", discarded);
            Ok(Vec::new())
        }
    }
}

async fn read_failure(body: &mut dyn ResponseBody, status: u16) -> ApiError {
    match transport::read_to_end(body).await {
        Ok(bytes) => ApiError::from_response(status, bytes),
        Err(source) => ApiError::ReadBody(source),
    }
}

/// Close the body; a close failure only surfaces when nothing failed before.
fn finish<R>(body: Box<dyn ResponseBody>, outcome: Result<R, ApiError>) -> Result<R, ApiError> {
    match (body.close(), outcome) {
        (Ok(()), outcome) => outcome,
        (Err(close_error), Ok(_)) => Err(ApiError::CloseBody(close_error)),
        (Err(close_error), Err(err)) => {
            log::warn!("ignoring body close failure after earlier error: {}", close_error);
            Err(err)
        }
    }
}

impl std::fmt::Debug for AttomClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttomClient").finish_non_exhaustive()
    }
}

impl From<ReqwestTransport> for AttomClient {
    fn from(transport: ReqwestTransport) -> Self {
        AttomClient::with_transport(transport)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::api::models::PropertyResponse;
    use crate::api::options;
    use crate::error::TransportError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::io;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// What the stub answers with.
    #[derive(Clone, Default)]
    pub(crate) struct Reply {
        pub status: u16,
        pub chunks: Vec<Vec<u8>>,
        pub fail_read: bool,
        pub fail_close: bool,
        pub fail_send: bool,
    }

    impl Reply {
        pub fn json(status: u16, body: &str) -> Self {
            Reply {
                status,
                chunks: vec![body.as_bytes().to_vec()],
                ..Default::default()
            }
        }
    }

    /// In-memory transport recording every request it sees.
    #[derive(Default)]
    pub(crate) struct StubTransport {
        reply: Reply,
        pub requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
        pub consumed_bytes: Arc<AtomicUsize>,
        pub closed: Arc<AtomicBool>,
    }

    impl StubTransport {
        pub fn new(reply: Reply) -> Self {
            StubTransport {
                reply,
                ..Default::default()
            }
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    struct StubBody {
        chunks: VecDeque<Vec<u8>>,
        fail_read: bool,
        fail_close: bool,
        consumed_bytes: Arc<AtomicUsize>,
        closed: Arc<AtomicBool>,
    }

    #[async_trait]
    impl ResponseBody for StubBody {
        async fn chunk(&mut self) -> Result<Option<Vec<u8>>, TransportError> {
            if self.fail_read {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset").into());
            }
            let chunk = self.chunks.pop_front();
            if let Some(bytes) = &chunk {
                self.consumed_bytes.fetch_add(bytes.len(), Ordering::SeqCst);
            }
            Ok(chunk)
        }

        fn close(self: Box<Self>) -> Result<(), TransportError> {
            self.closed.store(true, Ordering::SeqCst);
            if self.fail_close {
                return Err(io::Error::new(io::ErrorKind::Other, "close failed").into());
            }
            Ok(())
        }
    }

    #[async_trait]
    impl Transport for Arc<StubTransport> {
        async fn get(
            &self,
            path: &str,
            query: &[(String, String)],
        ) -> Result<transport::HttpResponse, TransportError> {
            self.requests
                .lock()
                .unwrap()
                .push((path.to_string(), query.to_vec()));

            if self.reply.fail_send {
                return Err(io::Error::new(io::ErrorKind::ConnectionRefused, "refused").into());
            }

            Ok(transport::HttpResponse {
                status: self.reply.status,
                headers: Vec::new(),
                body: Box::new(StubBody {
                    chunks: self.reply.chunks.iter().cloned().collect(),
                    fail_read: self.reply.fail_read,
                    fail_close: self.reply.fail_close,
                    consumed_bytes: Arc::clone(&self.consumed_bytes),
                    closed: Arc::clone(&self.closed),
                }),
            })
        }
    }

    pub(crate) fn stub_client(reply: Reply) -> (AttomClient, Arc<StubTransport>) {
        let stub = Arc::new(StubTransport::new(reply));
        (AttomClient::with_transport(Arc::clone(&stub)), stub)
    }

    fn detail_params() -> Params {
        Params::from_options(&[options::attom_id(100)])
    }

    #[tokio::test]
    async fn test_validation_failure_sends_nothing() {
        let (client, stub) = stub_client(Reply::json(200, "{}"));
        let err = client
            .fetch::<PropertyResponse>(Operation::PropertyDetail, &Params::new())
            .await
            .unwrap_err();

        assert!(err.is_missing_parameter());
        assert_eq!(stub.request_count(), 0);
    }

    #[tokio::test]
    async fn test_success_decodes_body() {
        let (client, stub) = stub_client(Reply::json(200, r#"{"status":{},"property":[{}]}"#));
        let response: PropertyResponse = client
            .fetch(Operation::PropertyDetail, &detail_params())
            .await
            .expect("request should succeed");

        assert_eq!(response.property.len(), 1);
        let requests = stub.requests.lock().unwrap();
        assert_eq!(requests[0].0, "/propertyapi/v1.0.0/property/detail");
        assert_eq!(
            requests[0].1,
            vec![("attomid".to_string(), "100".to_string())]
        );
        assert!(stub.closed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_chunked_body_is_reassembled() {
        let reply = Reply {
            status: 200,
            chunks: vec![
                br#"{"status":{"total":1},"#.to_vec(),
                br#""property":[{},{}]}"#.to_vec(),
            ],
            ..Default::default()
        };
        let (client, _stub) = stub_client(reply);
        let response: PropertyResponse = client
            .fetch(Operation::PropertyDetail, &detail_params())
            .await
            .expect("request should succeed");
        assert_eq!(response.property.len(), 2);
    }

    #[tokio::test]
    async fn test_server_error_with_status_message() {
        let (client, stub) = stub_client(Reply::json(
            500,
            r#"{"status":{"msg":"Internal Server Error"}}"#,
        ));
        let err = client
            .fetch::<PropertyResponse>(Operation::PropertyDetail, &detail_params())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(500));
        assert!(format!("{}", err).contains("Internal Server Error"));
        assert!(stub.closed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_server_error_with_unparseable_body() {
        let (client, _stub) = stub_client(Reply::json(503, "Service Unavailable"));
        let err = client
            .fetch::<PropertyResponse>(Operation::PropertyDetail, &detail_params())
            .await
            .unwrap_err();

        assert_eq!(format!("{}", err), "http status 503");
        assert_eq!(err.body(), Some(&b"Service Unavailable"[..]));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let (client, _stub) = stub_client(Reply::json(200, "{\"property\": [}"));
        let err = client
            .fetch::<PropertyResponse>(Operation::PropertyDetail, &detail_params())
            .await
            .unwrap_err();

        match err {
            ApiError::Decode { endpoint, .. } => {
                assert_eq!(endpoint, "/propertyapi/v1.0.0/property/detail")
            }
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_drain_consumes_whole_body() {
        let reply = Reply {
            status: 200,
            chunks: vec![b"not json at all".to_vec(), b" more bytes".to_vec()],
            ..Default::default()
        };
        let (client, stub) = stub_client(reply);
        client
            .fetch_drain(Operation::PropertyDetail, &detail_params())
            .await
            .expect("drain should succeed");

        assert_eq!(stub.consumed_bytes.load(Ordering::SeqCst), 26);
        assert!(stub.closed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_templated_path_is_never_sent() {
        let (client, stub) = stub_client(Reply::json(200, r#"{"property":[]}"#));

        let err = client
            .fetch::<PropertyResponse>(Operation::SalesComparablesByPropId, &Params::new())
            .await
            .unwrap_err();
        assert_eq!(format!("{}", err), "missing required parameter: propId");

        let err = client
            .fetch_drain(Operation::SalesComparablesByPropId, &Params::new())
            .await
            .unwrap_err();
        assert!(err.is_missing_parameter());
        assert_eq!(stub.request_count(), 0);

        client
            .sales_comparables_by_id(145423726, &[])
            .await
            .expect("expanded path should be sent");
        let requests = stub.requests.lock().unwrap();
        assert_eq!(requests[0].0, "/property/v2/salescomparables/propid/145423726");
    }

    #[tokio::test]
    async fn test_drain_still_validates() {
        let (client, stub) = stub_client(Reply::json(200, "{}"));
        let err = client
            .fetch_drain(Operation::SaleSnapshot, &Params::new())
            .await
            .unwrap_err();
        assert!(err.is_missing_parameter());
        assert_eq!(stub.request_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_reclassified() {
        let reply = Reply {
            fail_send: true,
            ..Default::default()
        };
        let (client, stub) = stub_client(reply);
        let err = client
            .fetch::<PropertyResponse>(Operation::PropertyDetail, &detail_params())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Transport(TransportError::Io(_))));
        assert_eq!(stub.request_count(), 1);
    }

    #[tokio::test]
    async fn test_unreadable_error_body_supersedes_status() {
        let reply = Reply {
            status: 500,
            fail_read: true,
            ..Default::default()
        };
        let (client, stub) = stub_client(reply);
        let err = client
            .fetch::<PropertyResponse>(Operation::PropertyDetail, &detail_params())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::ReadBody(_)));
        assert!(stub.closed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_close_failure_reported_when_alone() {
        let reply = Reply {
            fail_close: true,
            ..Reply::json(200, "{}")
        };
        let (client, _stub) = stub_client(reply);
        let err = client
            .fetch::<PropertyResponse>(Operation::PropertyDetail, &detail_params())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::CloseBody(_)));
    }

    #[tokio::test]
    async fn test_close_failure_never_masks_decode_error() {
        let reply = Reply {
            fail_close: true,
            ..Reply::json(200, "[1, 2")
        };
        let (client, _stub) = stub_client(reply);
        let err = client
            .fetch::<PropertyResponse>(Operation::PropertyDetail, &detail_params())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_close_failure_never_masks_server_error() {
        let reply = Reply {
            fail_close: true,
            ..Reply::json(404, r#"{"status":{"code":1,"msg":"SuccessWithoutResult"}}"#)
        };
        let (client, _stub) = stub_client(reply);
        let err = client
            .fetch::<PropertyResponse>(Operation::PropertyDetail, &detail_params())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(404));
        assert_eq!(format!("{}", err), "SuccessWithoutResult");
    }

    #[test]
    fn test_assemble_applies_caller_options_after_seeds() {
        let params = AttomClient::assemble(
            &[options::address1("1 Main St"), options::address2("Denver, CO")],
            &[options::address2("Boulder, CO"), options::page(2)],
        );
        assert_eq!(params.get("address1"), Some("1 Main St"));
        assert_eq!(params.get("address2"), Some("Boulder, CO"));
        assert_eq!(params.get("page"), Some("2"));
    }

    #[test]
    fn test_from_config_with_key() {
        let mut config = Config::default();
        config.set_url("http://example.test".to_string());

        assert!(AttomClient::from_config_with_key(&config, "0123456789abcdef").is_ok());
        assert!(AttomClient::from_config_with_key(&config, "").is_err());

        config.set_url("example.test".to_string());
        assert!(AttomClient::from_config_with_key(&config, "0123456789abcdef").is_err());
    }

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<AttomClient>();
    }

    #[test]
    fn test_blocking_caller() {
        let (client, stub) = stub_client(Reply::json(200, r#"{"property":[]}"#));
        let response: PropertyResponse = tokio_test::block_on(
            client.fetch(Operation::PropertySnapshot, &Params::from_options(&[options::postal_code("82009")])),
        )
        .expect("request should succeed");
        assert!(response.property.is_empty());
        assert_eq!(stub.request_count(), 1);
    }
}
