//! Input validation for client configuration values.

use crate::error::ConfigError;

/// Validate that a URL is properly formatted
pub fn validate_url(url: &str) -> Result<(), ConfigError> {
    if url.is_empty() {
        return Err(invalid("url", url, "URL cannot be empty"));
    }

    // Basic URL validation - must start with http:// or https://
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(invalid(
            "url",
            url,
            "URL must start with http:// or https://",
        ));
    }

    Ok(())
}

/// Validate API key format
pub fn validate_api_key(api_key: &str) -> Result<(), ConfigError> {
    if api_key.trim().is_empty() {
        return Err(ConfigError::MissingField {
            field: "api_key".to_string(),
            hint: "Set ATTOM_API_KEY to your ATTOM API key".to_string(),
        });
    }

    // ATTOM keys are 32 hex characters; only reject obviously truncated ones
    if api_key.len() < 10 {
        return Err(invalid(
            "api_key",
            "<redacted>",
            "API key appears to be too short (minimum 10 characters)",
        ));
    }

    Ok(())
}

fn invalid(field: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
