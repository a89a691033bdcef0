//! opencga-client
//!
//! Async Rust client for the REST web services of the OpenCGA
//! bioinformatics platform.
//!
//! The crate is organized around one shared transport and thin per-category
//! facades:
//!
//! - [`RestClient`](rest_client::RestClient) performs the actual HTTP GETs
//!   against `{rest_url}/{apiVersion}/{category}/{resource}`, handling
//!   authentication, retries, and error classification.
//! - [`MetaClient`](meta::MetaClient) exposes the `/meta` endpoints
//!   (`about`, `api`, `fail`, `ping`, `status`) as pure pass-throughs.
//! - [`OpenCgaClient`](client::OpenCgaClient) ties both together.
//!
//! # Example
//!
//! ```rust,no_run
//! use opencga_client::prelude::*;
//!
//! async fn example() -> Result<(), ClientError> {
//!     let config = ClientConfiguration::new("https://ws.opencb.org/opencga/webservices/rest");
//!     let client = OpenCgaClient::new(config)?;
//!     let response = client.meta().ping().await?;
//!     println!("status: {}", response.status);
//!     Ok(())
//! }
//! ```
#![deny(unsafe_code)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod meta;
pub mod options;
pub mod response;
pub mod rest_client;
pub mod retry;

pub use client::OpenCgaClient;
pub use config::ClientConfiguration;
pub use error::ClientError;
pub use meta::MetaClient;
pub use options::{QueryOptions, QueryValue};
pub use response::RestResponse;
pub use rest_client::RestClient;

/// Commonly used types, for glob import.
pub mod prelude {
    pub use crate::auth::LoginHandler;
    pub use crate::client::OpenCgaClient;
    pub use crate::config::ClientConfiguration;
    pub use crate::error::ClientError;
    pub use crate::meta::MetaClient;
    pub use crate::options::{QueryOptions, QueryValue};
    pub use crate::response::RestResponse;
    pub use crate::retry::RetryPolicy;
}
