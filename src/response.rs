//! REST response wrapper.
//!
//! The transport hands callers a [`RestResponse`]: the HTTP status, the
//! response headers, and the raw JSON body. Category clients treat it as
//! opaque; accessors for the OpenCGA envelope (`apiVersion`, `events`,
//! `responses`) are provided for callers that want them.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::ClientError;

/// Result of a single REST call.
#[derive(Debug, Clone)]
pub struct RestResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers (lowercased keys)
    pub headers: HashMap<String, String>,
    /// Raw JSON body (`Value::Null` for empty bodies)
    pub body: Value,
    /// Timestamp when the response was received
    pub received_at: chrono::DateTime<chrono::Utc>,
}

impl RestResponse {
    /// Build a response from parts, lowercasing header names.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Value) -> Self {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        Self {
            status,
            headers,
            body,
            received_at: chrono::Utc::now(),
        }
    }

    /// Whether the HTTP status was a success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the whole body into a caller-provided type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_value(self.body.clone())
            .map_err(|e| ClientError::ParseError(format!("failed to parse response body: {e}")))
    }

    /// `apiVersion` field of the OpenCGA envelope, when present.
    pub fn api_version(&self) -> Option<&str> {
        self.body.get("apiVersion").and_then(|v| v.as_str())
    }

    /// `events` array of the OpenCGA envelope (empty when absent).
    pub fn events(&self) -> &[Value] {
        self.body
            .get("events")
            .and_then(|v| v.as_array())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// `responses` array of the OpenCGA envelope (empty when absent).
    pub fn responses(&self) -> &[Value] {
        self.body
            .get("responses")
            .and_then(|v| v.as_array())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// First result object of the first response entry, the common case for
    /// single-object endpoints.
    pub fn first_result(&self) -> Option<&Value> {
        self.responses()
            .first()?
            .get("results")
            .and_then(|r| r.as_array())?
            .first()
    }
}
