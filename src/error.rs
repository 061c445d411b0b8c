use crate::api::models::Status;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
}

/// Errors produced while talking to the transport, before any HTTP status
/// has been interpreted.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Connection error: {0}")]
    Io(#[from] std::io::Error),
}

/// The classified error returned by every endpoint call.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Rejected locally; no request was sent.
    #[error("missing required parameter: {0}")]
    MissingParameter(String),

    /// The server answered with a non-2xx status.
    #[error("{}", render_response_message(.status, .status_block, .message))]
    Response {
        status: u16,
        status_block: Option<Status>,
        message: Option<String>,
        body: Vec<u8>,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Failed to read response body: {0}")]
    ReadBody(#[source] TransportError),

    #[error("Failed to parse response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to close response body: {0}")]
    CloseBody(#[source] TransportError),
}

/// Shape of an error body. Both fields are optional; anything else in the
/// body is ignored.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    status: Option<Status>,
    #[serde(default)]
    message: Option<String>,
}

fn render_response_message(
    status: &u16,
    status_block: &Option<Status>,
    message: &Option<String>,
) -> String {
    if let Some(message) = message.as_deref().filter(|m| !m.is_empty()) {
        return message.to_string();
    }
    if let Some(block) = status_block {
        if let Some(msg) = block.msg.as_deref().filter(|m| !m.is_empty()) {
            return msg.to_string();
        }
        if let Some(code) = block.code.filter(|c| *c != 0) {
            return format!("api status code {}", code);
        }
    }
    format!("http status {}", status)
}

impl ApiError {
    /// Build the error for a non-2xx response whose body was read in full.
    ///
    /// The body is first parsed as `{status, message}`. When that fails only
    /// the raw bytes are kept; `message` stays `None` and the error renders
    /// as `"http status N"`.
    pub fn from_response(status: u16, body: Vec<u8>) -> Self {
        match serde_json::from_slice::<ErrorEnvelope>(&body) {
            Ok(envelope) => ApiError::Response {
                status,
                status_block: envelope.status,
                message: envelope.message,
                body,
            },
            Err(_) => ApiError::Response {
                status,
                status_block: None,
                message: None,
                body,
            },
        }
    }

    pub fn is_missing_parameter(&self) -> bool {
        matches!(self, ApiError::MissingParameter(_))
    }

    /// HTTP status of a server-side error, if this is one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Response { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn status_block(&self) -> Option<&Status> {
        match self {
            ApiError::Response { status_block, .. } => status_block.as_ref(),
            _ => None,
        }
    }

    /// Raw body of a server-side error.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            ApiError::Response { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration field '{field}' is missing")]
    MissingField { field: String, hint: String },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    High,
    Medium,
    Low,
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Api(api_error) => match api_error {
                ApiError::MissingParameter(_) => ErrorSeverity::Medium,
                ApiError::Response {
                    status: 401 | 403, ..
                } => ErrorSeverity::High,
                ApiError::Response { status, .. } if *status >= 500 => ErrorSeverity::High,
                ApiError::Response { .. } => ErrorSeverity::Medium,
                ApiError::Transport(_) => ErrorSeverity::High,
                ApiError::Decode { .. } => ErrorSeverity::Medium,
                ApiError::ReadBody(_) | ApiError::CloseBody(_) => ErrorSeverity::Low,
            },
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Api(ApiError::MissingParameter(_)) => Some(
                "Identify the property with attomid, id, an address, or fips and APN".to_string(),
            ),
            AppError::Api(ApiError::Response {
                status: 401 | 403, ..
            }) => Some("Check that ATTOM_API_KEY holds a valid, active key".to_string()),
            AppError::Api(ApiError::Transport(TransportError::Timeout { .. })) => {
                Some("Check your network connection and try again".to_string())
            }
            AppError::Config(ConfigError::MissingField { hint, .. }) => Some(hint.clone()),
            _ => None,
        }
    }
}
