//! Authentication support.
//!
//! Tokens are opaque credentials owned by the caller and held by the
//! transport for the lifetime of a client instance. An optional
//! [`LoginHandler`] lets the transport obtain a fresh token when the server
//! rejects the current one.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::error::ClientError;

/// Wrap a raw token string into the secret type held by the transport.
pub fn secret_token(token: impl Into<String>) -> SecretString {
    SecretString::from(token.into())
}

/// Collaborator that can produce a fresh authentication token.
///
/// When configured, the transport calls [`LoginHandler::refresh_token`] once
/// after a 401 response and replays the request with the new token. How the
/// token is obtained (re-login, refresh grant, ...) is the handler's business.
#[async_trait]
pub trait LoginHandler: Send + Sync {
    /// Obtain a new token.
    async fn refresh_token(&self) -> Result<String, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn secret_token_holds_value() {
        let token = secret_token("eyJhbGciOiJIUzI1NiJ9");
        assert_eq!(token.expose_secret(), "eyJhbGciOiJIUzI1NiJ9");
    }

    #[test]
    fn secret_token_does_not_leak_via_debug() {
        let token = secret_token("super-secret");
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("super-secret"));
    }
}
