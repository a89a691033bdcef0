//! Error handling types for the OpenCGA client.
//!
//! All failures surface as [`ClientError`]: transport problems, HTTP error
//! statuses, authentication failures, and response parsing issues. The
//! per-category facades add no error handling of their own; everything
//! originates in the transport and propagates unchanged to the caller.

use serde_json::Value;
use thiserror::Error;

/// Unified error type for all client operations.
#[derive(Error, Debug, Clone)]
pub enum ClientError {
    /// HTTP transport error (DNS, TLS, malformed request, ...)
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The server answered with a non-success status code.
    #[error("API error {code}: {message}")]
    ApiError {
        /// HTTP status code
        code: u16,
        /// Server-provided (or synthesized) message
        message: String,
        /// Raw response body when it was parseable JSON
        details: Option<Value>,
    },

    /// Authentication failed (401/403 or an expired/missing token).
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// The requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server is throttling requests.
    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timeout: {0}")]
    TimeoutError(String),

    /// The connection could not be established.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The response body could not be parsed.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// The client was configured inconsistently (bad base URL, ...).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Invariant violation inside the client itself.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ClientError {
    /// Create an `ApiError` without details.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// HTTP status code associated with this error, when there is one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            Self::AuthenticationError(_) => Some(401),
            Self::NotFound(_) => Some(404),
            Self::RateLimitError(_) => Some(429),
            _ => None,
        }
    }

    /// Whether a retry of the same request may succeed.
    ///
    /// Transient transport failures, throttling, and server-side errors are
    /// retryable; client-side errors (4xx other than 429) are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::TimeoutError(_) | Self::ConnectionError(_) | Self::RateLimitError(_) => true,
            Self::HttpError(_) => true,
            Self::ApiError { code, .. } => *code >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::TimeoutError(err.to_string())
        } else if err.is_connect() {
            Self::ConnectionError(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

/// Classify a non-success OpenCGA response by parsing its error envelope.
///
/// OpenCGA wraps failures in the regular REST envelope:
/// `{ "events": [ { "type": "ERROR", "message": "..." } ], ... }`
///
/// Returns `None` when the body does not match the envelope so callers can
/// fall back to the generic status-code classifier.
pub fn classify_rest_error(status: u16, body_text: &str) -> Option<ClientError> {
    let json: Value = serde_json::from_str(body_text).ok()?;
    let events = json.get("events")?.as_array()?;
    let error_event = events
        .iter()
        .find(|e| e.get("type").and_then(|t| t.as_str()) == Some("ERROR"))?;
    let message = error_event
        .get("message")
        .and_then(|m| m.as_str())
        .unwrap_or("Unknown error");

    let mapped = match status {
        401 => ClientError::AuthenticationError(message.to_string()),
        403 => ClientError::AuthenticationError(format!("Permission denied: {message}")),
        404 => ClientError::NotFound(message.to_string()),
        429 => ClientError::RateLimitError(message.to_string()),
        _ => ClientError::ApiError {
            code: status,
            message: message.to_string(),
            details: Some(json.clone()),
        },
    };

    Some(mapped)
}

/// Generic fallback classification from a status code and raw body.
pub fn classify_http_status(status: u16, body_text: &str) -> ClientError {
    let details = serde_json::from_str::<Value>(body_text).ok();
    let message = if body_text.is_empty() {
        format!("HTTP status {status}")
    } else {
        body_text.to_string()
    };

    match status {
        401 => ClientError::AuthenticationError(message),
        403 => ClientError::AuthenticationError(format!("Permission denied: {message}")),
        404 => ClientError::NotFound(message),
        429 => ClientError::RateLimitError(message),
        _ => ClientError::ApiError {
            code: status,
            message,
            details,
        },
    }
}
