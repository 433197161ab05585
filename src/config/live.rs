//! Live updates configuration

use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Upper bound for the per-session frame queue.
const MAX_SESSION_BUFFER: usize = 65_536;

/// Smallest frame limit that still fits a realistic recipe payload.
const MIN_FRAME_BYTES: usize = 1024;

/// Live change-notification configuration, shared by server and client.
#[derive(Debug, Clone, Deserialize)]
pub struct LiveConfig {
    /// Frames buffered per connected session before new frames are dropped
    #[serde(default = "default_session_buffer")]
    pub session_buffer: usize,

    /// Largest reassembled frame a client accepts
    #[serde(default = "default_max_frame_bytes")]
    pub max_frame_bytes: usize,

    /// Route serving the WebSocket endpoint
    #[serde(default = "default_path")]
    pub path: String,

    /// Seconds between server pings; 0 disables pings
    #[serde(default = "default_ping_interval")]
    pub ping_interval_secs: u64,
}

impl LiveConfig {
    /// Ping period, or `None` when pings are disabled.
    pub fn ping_interval(&self) -> Option<Duration> {
        (self.ping_interval_secs > 0).then(|| Duration::from_secs(self.ping_interval_secs))
    }

    /// Validate live updates configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.session_buffer == 0 || self.session_buffer > MAX_SESSION_BUFFER {
            return Err(ValidationError::InvalidSessionBuffer {
                max: MAX_SESSION_BUFFER,
            });
        }
        if self.max_frame_bytes < MIN_FRAME_BYTES {
            return Err(ValidationError::FrameLimitTooSmall {
                min: MIN_FRAME_BYTES,
            });
        }
        if !self.path.starts_with('/') {
            return Err(ValidationError::InvalidLivePath);
        }
        Ok(())
    }
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            session_buffer: default_session_buffer(),
            max_frame_bytes: default_max_frame_bytes(),
            path: default_path(),
            ping_interval_secs: default_ping_interval(),
        }
    }
}

fn default_session_buffer() -> usize {
    128
}

fn default_max_frame_bytes() -> usize {
    1024 * 1024
}

fn default_path() -> String {
    "/ws/recipes".to_string()
}

fn default_ping_interval() -> u64 {
    30
}
