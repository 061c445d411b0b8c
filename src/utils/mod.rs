//! Utils module - Shared utilities and helpers

/// Conversions from reqwest errors into the crate's error types
pub mod error_helpers;

/// Validation of configuration values (base URL, API key)
pub mod validation;
