//! Client configuration

use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Settings for the headless live client.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// WebSocket URL of the live updates endpoint
    #[serde(default = "default_live_url")]
    pub live_url: String,

    /// REST request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate client configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ValidationError::InvalidUrl {
                field: "client.api_url",
                value: self.api_url.clone(),
            });
        }
        if !(self.live_url.starts_with("ws://") || self.live_url.starts_with("wss://")) {
            return Err(ValidationError::InvalidUrl {
                field: "client.live_url",
                value: self.live_url.clone(),
            });
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            live_url: default_live_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_api_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_live_url() -> String {
    "ws://127.0.0.1:8080/ws/recipes".to_string()
}

fn default_request_timeout() -> u64 {
    10
}
