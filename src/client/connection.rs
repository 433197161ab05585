//! One client's persistent live-updates connection.
//!
//! `connect` never fails: when the endpoint is unreachable the connection
//! starts in [`LinkState::Degraded`] and a single [`LiveUpdate::Degraded`]
//! is handed to the UI. While live, one reader task owns the socket,
//! reassembles and decodes frames, and forwards events through the
//! [`UiSender`]. It never calls into the view itself.

use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, trace, warn};

use crate::domain::live::{self, ChangeKind, Decoded};

use super::frame_buffer::FrameBuffer;
use super::handoff::{LiveUpdate, UiSender};
use super::ClientError;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Whether live updates are currently flowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Live,
    /// Connect failed or the server went away. No reconnect is attempted.
    Degraded,
    /// Closed locally via [`ClientConnection::close`].
    Closed,
}

/// What happened to one inbound fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOutcome {
    /// More fragments are needed.
    Incomplete,
    /// A change event was handed to the UI.
    Delivered(ChangeKind),
    /// The frame was well formed but of a kind this build does not know.
    Unknown(String),
    /// The frame was oversize or malformed and was discarded.
    Rejected,
    /// Nobody is listening on the UI side any more.
    InboxClosed,
}

/// Turns inbound frame fragments into UI handoff items.
pub struct FrameDecoder {
    buffer: FrameBuffer,
    ui: UiSender,
}

impl FrameDecoder {
    pub fn new(ui: UiSender, max_frame_bytes: usize) -> Self {
        Self {
            buffer: FrameBuffer::new(max_frame_bytes),
            ui,
        }
    }

    /// Feed one fragment of a text frame.
    ///
    /// Decode failures are logged and swallowed so one bad frame never
    /// ends the connection.
    pub fn on_frame(&mut self, chunk: &str, is_final: bool) -> FrameOutcome {
        let frame = match self.buffer.push(chunk, is_final) {
            Ok(Some(frame)) => frame,
            Ok(None) => return FrameOutcome::Incomplete,
            Err(e) => {
                warn!(error = %e, "Discarding live update frame");
                return FrameOutcome::Rejected;
            }
        };

        match live::decode(&frame) {
            Ok(Decoded::Event(event)) => {
                let kind = event.kind();
                trace!(kind = %kind, target_id = %event.target_id(), "Live update received");
                if self.ui.send(LiveUpdate::Event(event)) {
                    FrameOutcome::Delivered(kind)
                } else {
                    FrameOutcome::InboxClosed
                }
            }
            Ok(Decoded::Unknown(name)) => {
                debug!(kind = %name, "Ignoring unknown live update kind");
                FrameOutcome::Unknown(name)
            }
            Err(e) => {
                warn!(error = %e, "Ignoring malformed live update frame");
                FrameOutcome::Rejected
            }
        }
    }

    fn report_degraded(&self, reason: String) {
        self.ui.send(LiveUpdate::Degraded(reason));
    }
}

/// A client's connection to the live updates endpoint.
pub struct ClientConnection {
    endpoint: String,
    state: watch::Receiver<LinkState>,
    shutdown: Option<watch::Sender<bool>>,
    reader: Option<JoinHandle<()>>,
}

impl ClientConnection {
    /// Connect to `endpoint` and start forwarding events to `ui`.
    pub async fn connect(endpoint: &str, ui: UiSender, max_frame_bytes: usize) -> Self {
        let decoder = FrameDecoder::new(ui, max_frame_bytes);

        let stream = match tokio_tungstenite::connect_async(endpoint).await {
            Ok((stream, _response)) => stream,
            Err(source) => {
                let err = ClientError::Connect {
                    endpoint: endpoint.to_string(),
                    source,
                };
                warn!(endpoint = %endpoint, error = %err, "Live updates unavailable");
                decoder.report_degraded(err.to_string());

                let (_state_tx, state) = watch::channel(LinkState::Degraded);
                return Self {
                    endpoint: endpoint.to_string(),
                    state,
                    shutdown: None,
                    reader: None,
                };
            }
        };

        info!(endpoint = %endpoint, "Live updates connected");

        let (state_tx, state) = watch::channel(LinkState::Live);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (write, read) = stream.split();
        let reader = tokio::spawn(read_loop(
            endpoint.to_string(),
            read,
            write,
            decoder,
            state_tx,
            shutdown_rx,
        ));

        Self {
            endpoint: endpoint.to_string(),
            state,
            shutdown: Some(shutdown_tx),
            reader: Some(reader),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn link_state(&self) -> LinkState {
        *self.state.borrow()
    }

    /// Send a Close frame and stop the reader task.
    pub async fn close(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(true);
        }
        if let Some(reader) = self.reader.take() {
            if let Err(e) = reader.await {
                warn!(endpoint = %self.endpoint, error = %e, "Live updates reader task failed");
            }
        }
    }
}

async fn read_loop(
    endpoint: String,
    mut read: SplitStream<WsStream>,
    mut write: SplitSink<WsStream, Message>,
    mut decoder: FrameDecoder,
    state: watch::Sender<LinkState>,
    mut shutdown: watch::Receiver<bool>,
) {
    let reason = loop {
        tokio::select! {
            msg = read.next() => match msg {
                Some(Ok(Message::Text(text))) => {
                    if decoder.on_frame(&text, true) == FrameOutcome::InboxClosed {
                        debug!(endpoint = %endpoint, "UI inbox dropped, stopping reader");
                        let _ = write.send(Message::Close(None)).await;
                        state.send_replace(LinkState::Closed);
                        return;
                    }
                }
                Some(Ok(Message::Binary(data))) => {
                    trace!(size = data.len(), "Ignoring binary frame");
                }
                Some(Ok(Message::Ping(data))) => {
                    let _ = write.send(Message::Pong(data)).await;
                }
                Some(Ok(Message::Close(_))) => {
                    break format!("server closed the connection to {endpoint}");
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    break format!("connection to {endpoint} failed: {e}");
                }
                None => {
                    break format!("connection to {endpoint} ended");
                }
            },
            _ = shutdown.changed() => {
                debug!(endpoint = %endpoint, "Closing live updates connection");
                let _ = write.send(Message::Close(None)).await;
                state.send_replace(LinkState::Closed);
                return;
            }
        }
    };

    warn!(endpoint = %endpoint, reason = %reason, "Live updates disconnected");
    state.send_replace(LinkState::Degraded);
    decoder.report_degraded(reason);
}
