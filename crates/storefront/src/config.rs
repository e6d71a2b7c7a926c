//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `VITRINA_HOST` - Bind address (default: 127.0.0.1)
//! - `VITRINA_PORT` - Listen port (default: 3000)
//! - `VITRINA_DATA_DIR` - Directory for persisted state (default: ./data)
//! - `OPENAI_API_KEY` - Chat completion credential; without it the chatbot
//!   runs in basic mode (fallback replies only) until a credential is set
//!   over the API
//! - `OPENAI_MODEL` - Completion model (default: gpt-4.1-2025-04-14)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_MODEL: &str = "gpt-4.1-2025-04-14";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
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
    /// Directory holding the persisted key-value slices
    pub data_dir: PathBuf,
    /// Chat completion API credential, if configured
    pub openai_api_key: Option<SecretString>,
    /// Chat completion model
    pub openai_model: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("VITRINA_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("VITRINA_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("VITRINA_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("VITRINA_PORT".to_string(), e.to_string()))?;
        let data_dir = PathBuf::from(get_env_or_default("VITRINA_DATA_DIR", "./data"));
        let openai_api_key = get_optional_env("OPENAI_API_KEY").map(SecretString::from);
        let openai_model = get_env_or_default("OPENAI_MODEL", DEFAULT_MODEL);
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            data_dir,
            openai_api_key,
            openai_model,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
