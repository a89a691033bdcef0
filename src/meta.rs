//! Meta web services client.
//!
//! One method per `/meta/*` endpoint, each a pure pass-through: caller
//! options go to the transport unchanged, the transport's response comes
//! back unchanged. The category is fixed to `meta` for the lifetime of an
//! instance; no state, no validation, no retries at this layer.

use std::sync::Arc;

use crate::error::ClientError;
use crate::options::QueryOptions;
use crate::response::RestResponse;
use crate::rest_client::RestClient;

/// Client for the `/{apiVersion}/meta` web services.
#[derive(Debug, Clone)]
pub struct MetaClient {
    rest_client: Arc<RestClient>,
}

impl MetaClient {
    /// Category path segment for all meta endpoints.
    pub const CATEGORY: &'static str = "meta";

    /// Create a meta client over a shared transport.
    pub fn new(rest_client: Arc<RestClient>) -> Self {
        Self { rest_client }
    }

    /// Returns info about the current OpenCGA code.
    ///
    /// `GET /{apiVersion}/meta/about`
    pub async fn about(&self, options: &QueryOptions) -> Result<RestResponse, ClientError> {
        self.rest_client.get(Self::CATEGORY, "about", options).await
    }

    /// Returns the API description.
    ///
    /// `GET /{apiVersion}/meta/api`
    ///
    /// Recognized option `category`: list of categories to get the API from.
    pub async fn api(&self, options: &QueryOptions) -> Result<RestResponse, ClientError> {
        self.rest_client.get(Self::CATEGORY, "api", options).await
    }

    /// Returns the API description filtered to the given categories.
    pub async fn api_for_categories(
        &self,
        categories: &[&str],
    ) -> Result<RestResponse, ClientError> {
        let options = QueryOptions::new().set("category", categories);
        self.api(&options).await
    }

    /// Triggers a simulated server-side failure, for diagnostics.
    ///
    /// `GET /{apiVersion}/meta/fail`
    pub async fn fail(&self, options: &QueryOptions) -> Result<RestResponse, ClientError> {
        self.rest_client.get(Self::CATEGORY, "fail", options).await
    }

    /// Pings the OpenCGA web services.
    ///
    /// `GET /{apiVersion}/meta/ping`
    pub async fn ping(&self) -> Result<RestResponse, ClientError> {
        self.ping_with_options(&QueryOptions::new()).await
    }

    /// Pings the OpenCGA web services, forwarding extra options.
    pub async fn ping_with_options(
        &self,
        options: &QueryOptions,
    ) -> Result<RestResponse, ClientError> {
        self.rest_client.get(Self::CATEGORY, "ping", options).await
    }

    /// Returns the backend database status.
    ///
    /// `GET /{apiVersion}/meta/status`
    pub async fn status(&self, options: &QueryOptions) -> Result<RestResponse, ClientError> {
        self.rest_client.get(Self::CATEGORY, "status", options).await
    }
}
