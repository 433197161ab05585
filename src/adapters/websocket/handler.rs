//! WebSocket upgrade handler for live recipe updates.
//!
//! Handles the HTTP → WebSocket upgrade and manages the connection lifecycle:
//! 1. Upgrade to WebSocket
//! 2. Open and register a session with the hub
//! 3. Forward broadcast frames to the client, pinging periodically
//! 4. Watch the inbound side for close or transport errors
//! 5. Unregister the session

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
    routing::get,
    Router,
};
use futures::{SinkExt, StreamExt};
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use super::hub::BroadcastHub;

/// State required for WebSocket handling.
#[derive(Clone)]
pub struct LiveUpdatesState {
    /// Hub that owns the session registry.
    pub hub: Arc<BroadcastHub>,
    /// How often to ping idle clients; `None` disables pings.
    pub ping_interval: Option<Duration>,
}

impl LiveUpdatesState {
    pub fn new(hub: Arc<BroadcastHub>, ping_interval: Option<Duration>) -> Self {
        Self { hub, ping_interval }
    }
}

/// Handle WebSocket upgrade requests for live updates.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<LiveUpdatesState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an established WebSocket connection until either side ends it.
async fn handle_socket(socket: WebSocket, state: LiveUpdatesState) {
    let (mut sender, mut receiver) = socket.split();
    let (session_id, mut outbox) = state.hub.open_session().await;

    tracing::debug!(session_id = %session_id, "Live updates client connected");

    // Forward broadcast frames (and pings) to the client
    let mut send_task = {
        let mut ping = state.ping_interval.map(ping_timer);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    frame = outbox.recv() => {
                        let Some(frame) = frame else { break };
                        if let Err(e) = sender.send(Message::Text(frame.to_string())).await {
                            tracing::debug!(
                                session_id = %session_id,
                                "Send error, closing connection: {}",
                                e
                            );
                            break;
                        }
                    }
                    _ = next_tick(&mut ping) => {
                        if sender.send(Message::Ping(Vec::new())).await.is_err() {
                            tracing::debug!(session_id = %session_id, "Ping failed, client gone");
                            break;
                        }
                    }
                }
            }
        })
    };

    // Watch the inbound side; clients have nothing to say on this channel
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(Message::Close(_)) => {
                    tracing::debug!(session_id = %session_id, "Client sent close frame");
                    break;
                }
                Ok(Message::Text(_)) | Ok(Message::Binary(_)) => {
                    tracing::trace!(session_id = %session_id, "Ignoring inbound client message");
                }
                Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {
                    // Handled by axum
                }
                Err(e) => {
                    tracing::debug!(session_id = %session_id, "Receive error: {}", e);
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    state.hub.unregister(&session_id).await;
    tracing::debug!(session_id = %session_id, "Live updates client disconnected");
}

fn ping_timer(period: Duration) -> Interval {
    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}

async fn next_tick(timer: &mut Option<Interval>) {
    match timer {
        Some(timer) => {
            timer.tick().await;
        }
        None => std::future::pending().await,
    }
}

/// Create the router serving the live updates endpoint at `path`.
pub fn live_updates_routes(state: LiveUpdatesState, path: &str) -> Router {
    Router::new().route(path, get(ws_handler)).with_state(state)
}
