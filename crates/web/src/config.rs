//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `VETX_HOST` - Bind address (default: 127.0.0.1)
//! - `VETX_PORT` - Listen port (default: 3000)
//! - `VETX_STATE_DIR` - Directory for the persisted auth flag (default: `.vetx-state`)
//! - `VETX_ADMIN_PASSWORD` - Admin panel password (default: built-in; rotate in production)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Default admin password, matching the original deployment.
///
/// A plaintext fixed-string compare is the documented auth mechanism; the
/// environment override exists so a deployment can rotate the secret
/// without a rebuild.
const DEFAULT_ADMIN_PASSWORD: &str = "VetXPharma2024";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the persisted auth flag
    pub state_dir: PathBuf,
    /// Admin panel password (plaintext compare, see `vetx-store`)
    pub admin_password: SecretString,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl SiteConfig {
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

        let host = get_env_or_default("VETX_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("VETX_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("VETX_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("VETX_PORT".to_string(), e.to_string()))?;
        let state_dir = PathBuf::from(get_env_or_default("VETX_STATE_DIR", ".vetx-state"));
        let admin_password =
            SecretString::from(get_env_or_default("VETX_ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD));
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            state_dir,
            admin_password,
            sentry_dsn,
            sentry_environment,
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
