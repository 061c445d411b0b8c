//! # attom-client
//!
//! Typed async client for the ATTOM property data REST API.
//!
//! Every endpoint method builds a parameter set from [`QueryOption`]s,
//! checks it against the endpoint's identifier requirement, performs one GET
//! and decodes the JSON body. A call that is missing a required identifier
//! fails with [`ApiError::MissingParameter`] before anything is sent.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use attom_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> attom_client::Result<()> {
//!     // Gateway URL from config.toml or ATTOM_URL, key from ATTOM_API_KEY
//!     let config = Config::load(None)?;
//!     let client = AttomClient::from_config(&config)?;
//!
//!     let detail = client
//!         .property_detail(&[options::attom_id(184713191)])
//!         .await?;
//!     println!("{} properties", detail.property.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │      Endpoint methods               │  one thin method per operation
//! ├─────────────────────────────────────┤
//! │      Dispatch engine                │  validate, send, classify, decode
//! ├─────────────────────────────────────┤
//! │      Transport                      │  reqwest by default, injectable
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`]: client, endpoint catalog, options, validators, models
//! - [`storage`]: configuration file and API key lookup
//! - [`utils`]: configuration validation and error conversion helpers
//! - [`error`]: error taxonomy with severity levels and hints

pub use error::AppError;

/// Common imports.
///
/// ```rust,ignore
/// use attom_client::prelude::*;
/// ```
pub mod prelude {
    // Error handling
    pub use crate::Result;
    pub use crate::error::{ApiError, AppError};

    // Client, options and models
    pub use crate::api::client::AttomClient;
    pub use crate::api::endpoints::Operation;
    pub use crate::api::models::{PropertyResponse, SchoolResponse, Status};
    pub use crate::api::options::{self, Params, QueryOption};
    pub use crate::api::transport::Transport;

    // Storage
    pub use crate::storage::config::Config;
    pub use crate::storage::credentials::{get_api_key, has_api_key};
}

/// Storage layer - configuration and credential lookup.
///
/// - [`storage::config`]: TOML configuration with environment fallback
/// - [`storage::credentials`]: API key retrieval from environment
pub mod storage;

/// Utilities layer.
///
/// - [`utils::validation`]: URL and API key validation
/// - [`utils::error_helpers`]: reqwest error classification
pub mod utils;

/// API layer - ATTOM client, endpoint catalog and data models.
pub mod api;

/// Error handling.
///
/// - Per-call [`ApiError`] taxonomy (missing parameter, transport, server
///   response, decode, body read/close)
/// - Severity levels and troubleshooting hints on [`AppError`]
pub mod error;

/// Result alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;

#[doc(hidden)]
pub use api::client::AttomClient;
#[doc(hidden)]
pub use api::options::{Params, QueryOption};
#[doc(hidden)]
pub use error::ApiError;
#[doc(hidden)]
pub use storage::config::Config;
