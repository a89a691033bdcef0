//! Top-level OpenCGA client.
//!
//! [`OpenCgaClient`] bundles the shared transport with the per-category
//! facades. Category clients are cheap handles over the same
//! `Arc<RestClient>`; two `OpenCgaClient` instances share nothing, so their
//! authentication contexts are fully independent.

use std::sync::Arc;

use secrecy::SecretString;

use crate::auth::{LoginHandler, secret_token};
use crate::config::ClientConfiguration;
use crate::error::ClientError;
use crate::meta::MetaClient;
use crate::rest_client::RestClient;

/// Entry point for the OpenCGA REST web services.
#[derive(Debug, Clone)]
pub struct OpenCgaClient {
    rest_client: Arc<RestClient>,
}

impl OpenCgaClient {
    /// Create a client without authentication.
    pub fn new(config: ClientConfiguration) -> Result<Self, ClientError> {
        Self::with_auth(config, None, None)
    }

    /// Create a client with an initial token.
    pub fn with_token(
        config: ClientConfiguration,
        token: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Self::with_auth(config, Some(secret_token(token)), None)
    }

    /// Create a client with full authentication context: optional token and
    /// optional login handler for transparent token refresh.
    pub fn with_auth(
        config: ClientConfiguration,
        token: Option<SecretString>,
        login_handler: Option<Arc<dyn LoginHandler>>,
    ) -> Result<Self, ClientError> {
        let rest_client = RestClient::new(config, token, login_handler)?;
        Ok(Self {
            rest_client: Arc::new(rest_client),
        })
    }

    /// Client for the `/meta` web services.
    pub fn meta(&self) -> MetaClient {
        MetaClient::new(self.rest_client.clone())
    }

    /// The underlying transport.
    pub fn rest_client(&self) -> &Arc<RestClient> {
        &self.rest_client
    }

    /// Replace the authentication token for this client only.
    pub fn set_token(&self, token: impl Into<String>) {
        self.rest_client.set_token(token);
    }

    /// Drop the authentication token.
    pub fn logout(&self) {
        self.rest_client.clear_token();
    }
}
