//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TORRES_HOST` - Bind address (default: 127.0.0.1)
//! - `TORRES_PORT` - Listen port (default: 3000)
//! - `TORRES_EVENTS_ENDPOINT` - External collector URL for analytics events;
//!   when unset, events are kept in memory only
//! - `TORRES_EVENTS_API_KEY` - Bearer token for the collector (required when
//!   the endpoint is set)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

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
    /// External analytics collector, if configured
    pub events_forward: Option<EventsForwardConfig>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// External analytics collector configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct EventsForwardConfig {
    /// Collector endpoint URL
    pub endpoint: String,
    /// Bearer token for the collector
    pub api_key: SecretString,
}

impl std::fmt::Debug for EventsForwardConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventsForwardConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid, or if the
    /// events endpoint is configured without its API key.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("TORRES_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("TORRES_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("TORRES_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("TORRES_PORT".to_string(), e.to_string()))?;

        let events_forward = match get_optional_env("TORRES_EVENTS_ENDPOINT") {
            Some(endpoint) => {
                let api_key = get_required_env("TORRES_EVENTS_API_KEY")?;
                Some(EventsForwardConfig {
                    endpoint,
                    api_key: SecretString::from(api_key),
                })
            }
            None => None,
        };

        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            events_forward,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
