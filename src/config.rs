//! Client configuration.
//!
//! This module defines [`ClientConfiguration`] and its builder, used to
//! configure the REST endpoint and HTTP behavior for all category clients.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::error::ClientError;
use crate::retry::RetryPolicy;

/// Default REST API version segment.
pub const DEFAULT_API_VERSION: &str = "v2";

/// Connection and HTTP settings for the REST client.
///
/// The configuration is owned by the caller and passed through unmodified at
/// construction; nothing mutates it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfiguration {
    /// Base URL of the REST endpoint, e.g. `https://ws.opencb.org/opencga/webservices/rest`
    pub rest_url: String,
    /// Versioned path segment appended after the base URL (default `v2`)
    pub api_version: String,
    /// Request timeout
    #[serde(with = "duration_option_serde")]
    pub timeout: Option<Duration>,
    /// Connection timeout
    #[serde(with = "duration_option_serde")]
    pub connect_timeout: Option<Duration>,
    /// Custom headers applied to every request
    pub headers: HashMap<String, String>,
    /// Proxy settings
    pub proxy: Option<String>,
    /// User agent
    pub user_agent: Option<String>,
    /// Retry policy for transient failures
    #[serde(skip)]
    pub retry: RetryPolicy,
}

impl ClientConfiguration {
    /// Create a configuration for a REST endpoint with default settings.
    pub fn new(rest_url: impl Into<String>) -> Self {
        Self {
            rest_url: rest_url.into(),
            ..Default::default()
        }
    }

    /// Returns a builder for constructing `ClientConfiguration`
    pub fn builder() -> ClientConfigurationBuilder {
        ClientConfigurationBuilder::new()
    }

    /// Base URL with any trailing slash removed.
    pub fn rest_url_trimmed(&self) -> &str {
        self.rest_url.trim_end_matches('/')
    }

    /// Check the configuration is usable for building requests.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.rest_url.trim().is_empty() {
            return Err(ClientError::ConfigurationError(
                "rest_url must not be empty".to_string(),
            ));
        }
        if self.api_version.trim().is_empty() {
            return Err(ClientError::ConfigurationError(
                "api_version must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ClientConfiguration {
    fn default() -> Self {
        Self {
            rest_url: String::new(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(10)),
            headers: HashMap::new(),
            proxy: None,
            user_agent: Some(concat!("opencga-client/", env!("CARGO_PKG_VERSION")).to_string()),
            retry: RetryPolicy::default(),
        }
    }
}

/// Builder for `ClientConfiguration` to construct configuration in a unified and safe way
#[derive(Debug, Clone, Default)]
pub struct ClientConfigurationBuilder {
    rest_url: Option<String>,
    api_version: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    headers: HashMap<String, String>,
    proxy: Option<String>,
    user_agent: Option<String>,
    retry: Option<RetryPolicy>,
}

impl ClientConfigurationBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rest_url<S: Into<String>>(mut self, rest_url: S) -> Self {
        self.rest_url = Some(rest_url.into());
        self
    }
    pub fn api_version<S: Into<String>>(mut self, api_version: S) -> Self {
        self.api_version = Some(api_version.into());
        self
    }
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
    pub fn connect_timeout(mut self, connect_timeout: Option<Duration>) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }
    pub fn proxy<S: Into<String>>(mut self, proxy: Option<S>) -> Self {
        self.proxy = proxy.map(|s| s.into());
        self
    }
    pub fn user_agent<S: Into<String>>(mut self, user_agent: Option<S>) -> Self {
        self.user_agent = user_agent.map(|s| s.into());
        self
    }
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Build the configuration
    pub fn build(self) -> ClientConfiguration {
        let defaults = ClientConfiguration::default();
        ClientConfiguration {
            rest_url: self.rest_url.unwrap_or(defaults.rest_url),
            api_version: self.api_version.unwrap_or(defaults.api_version),
            timeout: self.timeout.or(defaults.timeout),
            connect_timeout: self.connect_timeout.or(defaults.connect_timeout),
            headers: self.headers,
            proxy: self.proxy,
            user_agent: self.user_agent.or(defaults.user_agent),
            retry: self.retry.unwrap_or(defaults.retry),
        }
    }
}

// Helper module for Duration serialization
mod duration_option_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => d.as_secs().serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs: Option<u64> = Option::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}
