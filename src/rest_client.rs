//! Generic REST transport.
//!
//! [`RestClient`] is the shared collaborator behind every category client:
//! it knows how to turn a category + resource + [`QueryOptions`] into an
//! HTTP GET against the versioned base URL, attach authentication, retry
//! transient failures, and classify error responses. Category facades hold
//! an `Arc<RestClient>` and delegate; they never touch HTTP themselves.

use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::auth::LoginHandler;
use crate::config::ClientConfiguration;
use crate::error::{ClientError, classify_http_status, classify_rest_error};
use crate::options::QueryOptions;
use crate::response::RestResponse;

/// Generic HTTP GET transport for OpenCGA web services.
pub struct RestClient {
    config: ClientConfiguration,
    http_client: reqwest::Client,
    token: RwLock<Option<SecretString>>,
    login_handler: Option<Arc<dyn LoginHandler>>,
}

impl RestClient {
    /// Build a transport from a configuration, an optional token, and an
    /// optional login handler.
    pub fn new(
        config: ClientConfiguration,
        token: Option<SecretString>,
        login_handler: Option<Arc<dyn LoginHandler>>,
    ) -> Result<Self, ClientError> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        if let Some(proxy) = &config.proxy {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy)
                    .map_err(|e| ClientError::ConfigurationError(format!("invalid proxy: {e}")))?,
            );
        }
        let http_client = builder
            .build()
            .map_err(|e| ClientError::ConfigurationError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            http_client,
            token: RwLock::new(token),
            login_handler,
        })
    }

    /// The configuration this transport was built with.
    pub fn config(&self) -> &ClientConfiguration {
        &self.config
    }

    /// Replace the authentication token for this instance only.
    pub fn set_token(&self, token: impl Into<String>) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(crate::auth::secret_token(token));
    }

    /// Drop the authentication token.
    pub fn clear_token(&self) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    /// Whether a token is currently set.
    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    fn current_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(|t| t.expose_secret().to_string())
    }

    /// Build the full URL for a category resource, with percent-encoded
    /// query parameters appended in insertion order.
    fn build_url(&self, category: &str, resource: &str, options: &QueryOptions) -> String {
        let mut url = format!(
            "{}/{}/{}/{}",
            self.config.rest_url_trimmed(),
            self.config.api_version,
            category,
            resource
        );

        let pairs = options.to_query_pairs();
        if !pairs.is_empty() {
            let query = pairs
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    /// Issue a GET against `{rest_url}/{apiVersion}/{category}/{resource}`.
    ///
    /// Retries transient failures per the configured policy. When a login
    /// handler is present and the server answers 401, the token is refreshed
    /// once and the request replayed before the failure is surfaced.
    pub async fn get(
        &self,
        category: &str,
        resource: &str,
        options: &QueryOptions,
    ) -> Result<RestResponse, ClientError> {
        let url = self.build_url(category, resource, options);

        let result = self.config.retry.execute(|| self.execute_get(&url)).await;

        match result {
            Err(ClientError::AuthenticationError(_)) if self.login_handler.is_some() => {
                self.refresh_token().await?;
                debug!(%url, "replaying request with refreshed token");
                self.execute_get(&url).await
            }
            other => other,
        }
    }

    async fn refresh_token(&self) -> Result<(), ClientError> {
        let handler = self
            .login_handler
            .as_ref()
            .ok_or_else(|| ClientError::InternalError("no login handler configured".to_string()))?;
        let token = handler.refresh_token().await?;
        self.set_token(token);
        Ok(())
    }

    async fn execute_get(&self, url: &str) -> Result<RestResponse, ClientError> {
        debug!(%url, "GET");

        let mut request = self.http_client.get(url);
        for (key, value) in &self.config.headers {
            request = request.header(key, value);
        }
        if let Some(token) = self.current_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect();
        let body_text = response.text().await?;

        if !(200..300).contains(&status) {
            let error = classify_rest_error(status, &body_text)
                .unwrap_or_else(|| classify_http_status(status, &body_text));
            debug!(%url, status, "request failed: {error}");
            return Err(error);
        }

        let body = if body_text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&body_text)
                .map_err(|e| ClientError::ParseError(format!("invalid JSON response: {e}")))?
        };

        Ok(RestResponse::new(status, headers, body))
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("rest_url", &self.config.rest_url)
            .field("api_version", &self.config.api_version)
            .field("has_token", &self.has_token())
            .field("has_login_handler", &self.login_handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str) -> RestClient {
        RestClient::new(ClientConfiguration::new(url), None, None).unwrap()
    }

    #[test]
    fn url_building_without_options() {
        let client = client("https://ws.opencb.org/opencga/webservices/rest/");
        let url = client.build_url("meta", "ping", &QueryOptions::new());
        assert_eq!(
            url,
            "https://ws.opencb.org/opencga/webservices/rest/v2/meta/ping"
        );
    }

    #[test]
    fn url_building_encodes_and_orders_query_params() {
        let client = client("https://ws.opencb.org/rest");
        let options = QueryOptions::new()
            .set("category", ["samples", "files"].as_slice())
            .set("note", "a b");
        let url = client.build_url("meta", "api", &options);
        assert_eq!(
            url,
            "https://ws.opencb.org/rest/v2/meta/api?category=samples%2Cfiles&note=a%20b"
        );
    }

    #[test]
    fn token_mutation_is_per_instance() {
        let a = client("https://ws.opencb.org/rest");
        let b = client("https://ws.opencb.org/rest");
        a.set_token("token-a");
        assert!(a.has_token());
        assert!(!b.has_token());
        a.clear_token();
        assert!(!a.has_token());
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let result = RestClient::new(ClientConfiguration::default(), None, None);
        assert!(matches!(result, Err(ClientError::ConfigurationError(_))));
    }
}
