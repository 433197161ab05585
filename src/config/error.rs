//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Session buffer must be between 1 and {max}")]
    InvalidSessionBuffer { max: usize },

    #[error("Maximum frame size must be at least {min} bytes")]
    FrameLimitTooSmall { min: usize },

    #[error("Live updates path must start with '/'")]
    InvalidLivePath,

    #[error("Invalid URL for {field}: {value}")]
    InvalidUrl { field: &'static str, value: String },
}
