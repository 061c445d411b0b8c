//! Configuration management
//!
//! Base URL and timeout stored in a TOML file, with the URL overridable by
//! environment variable.
//! Priority: config.toml > ATTOM_URL environment variable > default gateway

use super::Result;
use crate::api::transport::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Client configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Config {
    /// API gateway URL
    pub url: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {}", e),
            })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;

        let app_config_dir = home_dir.join(".config").join("attom-client");
        let config_file = app_config_dir.join("config.toml");

        Ok(config_file)
    }

    /// Get URL with fallback to environment variable
    pub fn get_url(&self) -> Option<String> {
        self.url
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| std::env::var("ATTOM_URL").ok().filter(|s| !s.is_empty()))
    }

    /// URL to connect to, falling back to the public gateway
    pub fn resolved_url(&self) -> String {
        self.get_url()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    /// Set URL
    pub fn set_url(&mut self, url: String) {
        self.url = Some(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.url.is_none());
        assert_eq!(config.timeout_secs(), DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_url_management() {
        let mut config = Config::default();
        assert!(config.url.is_none());

        config.set_url("http://example.test".to_string());
        assert_eq!(config.url, Some("http://example.test".to_string()));
        assert_eq!(config.resolved_url(), "http://example.test");
    }

    #[test]
    fn test_url_env_fallback() {
        // Save original state
        let original = std::env::var("ATTOM_URL").ok();

        unsafe {
            std::env::remove_var("ATTOM_URL");
        }
        assert_eq!(Config::default().resolved_url(), DEFAULT_BASE_URL);

        unsafe {
            std::env::set_var("ATTOM_URL", "http://env.example.test");
        }
        assert_eq!(
            Config::default().get_url(),
            Some("http://env.example.test".to_string())
        );

        // File value wins over the environment
        let mut config = Config::default();
        config.set_url("http://file.example.test".to_string());
        assert_eq!(config.resolved_url(), "http://file.example.test");

        // Restore original state
        unsafe {
            match original {
                Some(value) => std::env::set_var("ATTOM_URL", value),
                None => std::env::remove_var("ATTOM_URL"),
            }
        }
    }

    #[test]
    fn test_config_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("config.toml");

        // Create a sample config
        let mut config = Config::default();
        config.set_url("http://example.test".to_string());
        config.timeout_secs = Some(90);

        // Save the config
        config
            .save(Some(config_path.clone()))
            .expect("Failed to save config");

        // Load the config
        let loaded_config = Config::load(Some(config_path)).expect("Failed to load config");

        // Check if loaded config matches saved config
        assert_eq!(loaded_config.url, Some("http://example.test".to_string()));
        assert_eq!(loaded_config.timeout_secs(), 90);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let nonexistent_path = temp_dir.path().join("nonexistent.toml");

        // Load from a path that doesn't exist
        let config = Config::load(Some(nonexistent_path));
        assert!(config.is_ok());

        let config = config.expect("Failed to load default config");
        assert!(config.url.is_none());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "url = [not toml").expect("Failed to write config");

        let err = Config::load(Some(config_path)).unwrap_err();
        assert!(matches!(err, StorageError::ConfigParseError { .. }));
    }
}
