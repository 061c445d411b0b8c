//! The HTTP boundary.
//!
//! [`AttomClient`](crate::api::client::AttomClient) never touches the network
//! itself; it hands a path and query pairs to a [`Transport`] and reads the
//! returned [`HttpResponse`]. [`ReqwestTransport`] is the production
//! implementation. Tests substitute in-memory transports.

use crate::error::TransportError;
use crate::utils::error_helpers::convert_request_error;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.gateway.attomdata.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("attom-client/", env!("CARGO_PKG_VERSION"));

/// Executes one GET request.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<HttpResponse, TransportError>;
}

/// A response whose body has not been read yet.
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Box<dyn ResponseBody>,
}

impl HttpResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A readable response body.
#[async_trait]
pub trait ResponseBody: Send {
    /// Next chunk of the body, `None` once it is exhausted.
    async fn chunk(&mut self) -> Result<Option<Vec<u8>>, TransportError>;

    /// Release the body. Called exactly once, on every path.
    fn close(self: Box<Self>) -> Result<(), TransportError> {
        Ok(())
    }
}

/// Read the remaining body into memory.
pub async fn read_to_end(body: &mut dyn ResponseBody) -> Result<Vec<u8>, TransportError> {
    let mut buffer = Vec::new();
    while let Some(chunk) = body.chunk().await? {
        buffer.extend_from_slice(&chunk);
    }
    Ok(buffer)
}

/// Consume and discard the remaining body, returning the number of bytes.
pub async fn drain(body: &mut dyn ResponseBody) -> Result<u64, TransportError> {
    let mut total = 0u64;
    while let Some(chunk) = body.chunk().await? {
        total += chunk.len() as u64;
    }
    Ok(total)
}

/// [`Transport`] over a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    pub base_url: String,
    api_key: String,
    timeout_secs: u64,
}

impl ReqwestTransport {
    pub fn new(base_url: String, api_key: String) -> Result<Self, TransportError> {
        Self::with_timeout(base_url, api_key, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(
        base_url: String,
        api_key: String,
        timeout_secs: u64,
    ) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| convert_request_error(e, timeout_secs))?;

        Ok(ReqwestTransport {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout_secs,
        })
    }

    pub fn build_request(&self, path: &str, query: &[(String, String)]) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .header("Accept", "application/json");

        if !query.is_empty() {
            request = request.query(query);
        }

        request
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<HttpResponse, TransportError> {
        let response = self
            .build_request(path, query)
            .send()
            .await
            .map_err(|e| convert_request_error(e, self.timeout_secs))?;

        let status = response.status().as_u16();
        let headers = header_pairs(response.headers());

        Ok(HttpResponse {
            status,
            headers,
            body: Box::new(ReqwestBody {
                response,
                timeout_secs: self.timeout_secs,
            }),
        })
    }
}

/// Header names and values as owned strings; non-UTF-8 bytes are replaced.
fn header_pairs(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

struct ReqwestBody {
    response: Response,
    timeout_secs: u64,
}

#[async_trait]
impl ResponseBody for ReqwestBody {
    async fn chunk(&mut self) -> Result<Option<Vec<u8>>, TransportError> {
        self.response
            .chunk()
            .await
            .map(|chunk| chunk.map(|bytes| bytes.to_vec()))
            .map_err(|e| convert_request_error(e, self.timeout_secs))
    }
}
