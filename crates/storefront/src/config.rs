//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_CATALOG_PATH` - JSON catalog to serve instead of the mock data
//! - `NOTIFICATION_CAPACITY` - Maximum queued toasts (default: 32)
//! - `AUTH_BASE_URL` - Base URL of the authentication service
//! - `AUTH_AUTHENTICATE_PATH` - Path of the authenticate endpoint (default: /authenticate)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use url::Url;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_NOTIFICATION_CAPACITY: usize = 32;
const DEFAULT_AUTHENTICATE_PATH: &str = "/authenticate";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Catalog JSON file; the compiled-in mock catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Maximum number of pending toasts
    pub notification_capacity: usize,
    /// Authentication service configuration
    pub auth: AuthConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions sent to Sentry
    pub sentry_traces_sample_rate: f32,
}

/// Authentication service configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Base URL of the authentication service
    pub base_url: Option<Url>,
    /// Path appended to `base_url` for the authenticate call
    pub authenticate_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            authenticate_path: DEFAULT_AUTHENTICATE_PATH.to_string(),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            catalog_path: None,
            notification_capacity: DEFAULT_NOTIFICATION_CAPACITY,
            auth: AuthConfig::default(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            host: get_parsed_or("STOREFRONT_HOST", IpAddr::V4(Ipv4Addr::LOCALHOST))?,
            port: get_parsed_or("STOREFRONT_PORT", DEFAULT_PORT)?,
            catalog_path: get_optional_env("STOREFRONT_CATALOG_PATH").map(PathBuf::from),
            notification_capacity: get_parsed_or(
                "NOTIFICATION_CAPACITY",
                DEFAULT_NOTIFICATION_CAPACITY,
            )?,
            auth: AuthConfig::from_env()?,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: get_parsed_or("SENTRY_SAMPLE_RATE", 1.0)?,
            sentry_traces_sample_rate: get_parsed_or("SENTRY_TRACES_SAMPLE_RATE", 0.0)?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl AuthConfig {
    /// Load the authentication settings on their own.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `AUTH_BASE_URL` is not a URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_optional_env("AUTH_BASE_URL")
            .map(|raw| parse_base_url("AUTH_BASE_URL", &raw))
            .transpose()?;
        let authenticate_path =
            get_env_or_default("AUTH_AUTHENTICATE_PATH", DEFAULT_AUTHENTICATE_PATH);

        Ok(Self {
            base_url,
            authenticate_path,
        })
    }

    /// The configured base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `AUTH_BASE_URL` was not set.
    pub fn require_base_url(&self) -> Result<&Url, ConfigError> {
        self.base_url
            .as_ref()
            .ok_or_else(|| ConfigError::MissingEnvVar("AUTH_BASE_URL".to_string()))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn get_parsed_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key).map_or(Ok(default), |raw| parse_value(key, &raw))
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a base URL, requiring an http(s) scheme.
fn parse_base_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{other}'"),
        )),
    }
}
