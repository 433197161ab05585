//! Live updates client.
//!
//! - [`connection`] - persistent WebSocket connection and frame decoding
//! - [`handoff`] - transport-to-UI channel
//! - [`dispatcher`] - decides which parts of the view to refresh
//! - [`api`] - REST calls used to reload refreshed regions

pub mod api;
pub mod connection;
pub mod dispatcher;
pub mod frame_buffer;
pub mod handoff;

pub use api::RecipeApiClient;
pub use connection::{ClientConnection, FrameDecoder, FrameOutcome, LinkState};
pub use dispatcher::{ReconciliationDispatcher, RefreshAction};
pub use frame_buffer::FrameBuffer;
pub use handoff::{ui_channel, LiveUpdate, UiInbox, UiSender};

use thiserror::Error;

/// Errors raised by the live updates client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not connect to {endpoint}: {source}")]
    Connect {
        endpoint: String,
        #[source]
        source: tokio_tungstenite::tungstenite::Error,
    },

    #[error("frame of {size} bytes exceeds the {max} byte limit")]
    FrameTooLarge { size: usize, max: usize },

    #[error("recipe API request failed: {0}")]
    Http(#[from] reqwest::Error),
}
