use crate::error::TransportError;

/// Helper functions for standardizing error conversions across the codebase.
/// Convert reqwest errors to TransportError, keeping timeouts distinct
pub fn convert_request_error(error: reqwest::Error, timeout_secs: u64) -> TransportError {
    if error.is_timeout() {
        convert_timeout_error(timeout_secs)
    } else {
        TransportError::Request(error)
    }
}

/// Convert timeout errors to TransportError
pub fn convert_timeout_error(timeout_secs: u64) -> TransportError {
    TransportError::Timeout { timeout_secs }
}
