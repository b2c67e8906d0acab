//! Client for the external authentication endpoint.
//!
//! A single call: `POST {base_url}{authenticate_path}` with the credentials
//! serialized as a JSON body and `Content-Type: application/json`. The
//! response body is returned as raw JSON; the storefront does not interpret
//! it and the store never calls this client.

mod error;

pub use error::AuthError;

use brightcart_core::Email;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::instrument;
use url::Url;

use crate::config::AuthConfig;

/// Login credentials.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct Credentials {
    pub email: Email,
    pub password: SecretString,
}

impl Credentials {
    /// Build credentials from raw form input.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email is malformed.
    pub fn new(email: &str, password: impl Into<String>) -> Result<Self, AuthError> {
        Ok(Self {
            email: Email::parse(email)?,
            password: SecretString::from(password.into()),
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Wire form of [`Credentials`].
#[derive(Serialize)]
struct AuthenticatePayload<'a> {
    email: &'a str,
    password: &'a str,
}

/// Authentication endpoint client.
#[derive(Debug, Clone)]
pub struct AuthClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl AuthClient {
    /// Create a client for `base_url` + `authenticate_path`.
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint URL is invalid or the HTTP client fails
    /// to build.
    pub fn new(base_url: &Url, config: &AuthConfig) -> Result<Self, AuthError> {
        let endpoint = authenticate_endpoint(base_url, &config.authenticate_path)?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, endpoint })
    }

    /// The full authenticate URL.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the authenticate request without sending it.
    ///
    /// # Errors
    ///
    /// Returns error if the payload cannot be encoded or the request cannot
    /// be built.
    pub fn build_request(&self, credentials: &Credentials) -> Result<reqwest::Request, AuthError> {
        let body = serde_json::to_vec(&AuthenticatePayload {
            email: credentials.email.as_str(),
            password: credentials.password.expose_secret(),
        })?;

        Ok(self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .build()?)
    }

    /// Send the credentials and return the endpoint's JSON response.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the endpoint answers with a
    /// non-success status, or the response is not JSON.
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<serde_json::Value, AuthError> {
        let request = self.build_request(credentials)?;
        let response = self.client.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Authentication rejected");
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

/// Append `path` to `base_url`, keeping any path prefix on the base.
fn authenticate_endpoint(base_url: &Url, path: &str) -> Result<Url, url::ParseError> {
    let base = base_url.as_str().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    Url::parse(&format!("{base}/{path}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> AuthClient {
        AuthClient::new(&Url::parse(base).unwrap(), &AuthConfig::default()).unwrap()
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        assert_eq!(
            client("https://auth.example.com/api/").endpoint().as_str(),
            "https://auth.example.com/api/authenticate"
        );
        assert_eq!(
            client("https://auth.example.com").endpoint().as_str(),
            "https://auth.example.com/authenticate"
        );
    }

    #[test]
    fn test_build_request_posts_json() {
        let credentials = Credentials::new("shopper@example.com", "hunter2").unwrap();
        let request = client("https://auth.example.com")
            .build_request(&credentials)
            .unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(request.url().path(), "/authenticate");
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = request.body().and_then(reqwest::Body::as_bytes).unwrap();
        let json: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "shopper@example.com", "password": "hunter2"})
        );
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials::new("shopper@example.com", "hunter2").unwrap();
        let debug = format!("{credentials:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_credentials_reject_bad_email() {
        assert!(matches!(
            Credentials::new("not-an-email", "pw"),
            Err(AuthError::InvalidEmail(_))
        ));
    }
}
