//! # Configuration
//!
//! Runtime settings loaded from the environment (and a local `.env` file in
//! development) under the `BARGAIN_` prefix.
//!
//! | Variable                       | Default   |
//! |--------------------------------|-----------|
//! | `BARGAIN_SERVER_HOST`          | `0.0.0.0` |
//! | `BARGAIN_SERVER_PORT`          | `3000`    |
//! | `BARGAIN_MAX_SAVE_ATTEMPTS`    | `3`       |

use crate::application::services::NegotiationConfig;
use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub server_host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub server_port: u16,
    /// Save retries before a version conflict surfaces as a conflict error.
    #[serde(default = "default_max_save_attempts")]
    pub max_save_attempts: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_max_save_attempts() -> u32 {
    3
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_host: default_host(),
            server_port: default_port(),
            max_save_attempts: default_max_save_attempts(),
        }
    }
}

impl ServerConfig {
    /// Loads settings from `BARGAIN_`-prefixed environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("BARGAIN").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the socket address to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Returns the negotiation service configuration slice.
    #[must_use]
    pub fn negotiation(&self) -> NegotiationConfig {
        NegotiationConfig {
            max_save_attempts: self.max_save_attempts,
        }
    }
}
