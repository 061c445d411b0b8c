//! API key credential management
//!
//! The ATTOM API key is read from the ATTOM_API_KEY environment variable.
//! Nothing is persisted.

use std::env;

/// Get the API key from environment variable
///
/// Returns the value of ATTOM_API_KEY if set and non-empty, otherwise None.
pub fn get_api_key() -> Option<String> {
    env::var("ATTOM_API_KEY").ok().filter(|k| !k.is_empty())
}

/// Check if an API key is configured
pub fn has_api_key() -> bool {
    get_api_key().is_some()
}
