//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `RECIPE_BOOK_` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use recipe_book::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Live updates served at {}", config.live.path);
//! ```

mod client;
mod error;
mod live;
mod server;

pub use client::ClientConfig;
pub use error::{ConfigError, ValidationError};
pub use live::LiveConfig;
pub use server::{LogFormat, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP listener and logging settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Live change-notification settings
    #[serde(default)]
    pub live: LiveConfig,

    /// Headless client settings
    #[serde(default)]
    pub client: ClientConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `RECIPE_BOOK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RECIPE_BOOK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `RECIPE_BOOK__LIVE__SESSION_BUFFER=256` -> `live.session_buffer = 256`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RECIPE_BOOK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.live.validate()?;
        self.client.validate()?;
        Ok(())
    }
}
