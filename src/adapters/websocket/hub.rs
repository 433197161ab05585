//! Broadcast hub: fans each change event out to every connected session.
//!
//! # Event Flow
//!
//! ```text
//! Recipe write committed
//!          │
//!          ▼
//! ┌────────────────────┐
//! │  BroadcastHub      │
//! │  encode once       │
//! └────────────────────┘
//!          │  same Frame (Arc<str>)
//!          ▼
//! ┌────────────────────┐
//! │ ConnectionRegistry │
//! │ try_send per       │
//! │ session queue      │
//! └────────────────────┘
//!          │
//!          ▼
//!   socket writer tasks
//! ```
//!
//! Delivery is at-most-once and best effort: no retry, no replay. A dead
//! or slow session never affects the others.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::RecipeId;
use crate::domain::live::{self, ChangeEvent, ChangeKind, EventCodecError};
use crate::ports::ChangeNotifier;

use super::registry::{ConnectionRegistry, Frame, Session, SessionId, SessionOutbox};

/// Default number of frames buffered per session.
pub const DEFAULT_SESSION_BUFFER: usize = 128;

/// Errors that abort a whole broadcast.
#[derive(Debug, Error)]
pub enum BroadcastError {
    #[error("change event could not be encoded: {0}")]
    Encode(#[from] EventCodecError),
}

/// Summary of one broadcast call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastReport {
    pub kind: ChangeKind,
    pub target_id: RecipeId,
    pub delivered: usize,
    pub dropped: usize,
    pub disconnected: usize,
}

/// Owns the connection registry and pushes encoded events to it.
pub struct BroadcastHub {
    registry: ConnectionRegistry,
    session_buffer: usize,
}

impl BroadcastHub {
    /// Create a hub whose sessions buffer up to `session_buffer` frames.
    pub fn new(session_buffer: usize) -> Self {
        Self {
            registry: ConnectionRegistry::new(),
            session_buffer: session_buffer.max(1),
        }
    }

    /// Create as an Arc (for sharing between handlers and sockets).
    pub fn new_shared(session_buffer: usize) -> Arc<Self> {
        Arc::new(Self::new(session_buffer))
    }

    /// Open and register a new session.
    ///
    /// The returned outbox yields every frame broadcast from now until the
    /// session is unregistered.
    pub async fn open_session(&self) -> (SessionId, SessionOutbox) {
        let (session, outbox) = Session::open(self.session_buffer);
        let id = session.id();
        self.registry.register(session).await;
        tracing::debug!(session_id = %id, "Session registered");
        (id, outbox)
    }

    /// Register an externally created session. No-op if already present.
    pub async fn register(&self, session: Session) -> bool {
        self.registry.register(session).await
    }

    /// Remove a session. Safe to call more than once.
    pub async fn unregister(&self, id: &SessionId) -> bool {
        let removed = self.registry.unregister(id).await;
        if removed {
            tracing::debug!(session_id = %id, "Session unregistered");
        }
        removed
    }

    /// Number of live sessions.
    pub async fn session_count(&self) -> usize {
        self.registry.len().await
    }

    /// Encode `event` once and offer the same frame to every session.
    ///
    /// # Errors
    ///
    /// Returns `BroadcastError::Encode` if the event cannot be encoded; in
    /// that case nothing is sent to anyone.
    pub async fn broadcast(&self, event: &ChangeEvent) -> Result<BroadcastReport, BroadcastError> {
        let frame: Frame = Arc::from(live::encode(event)?);
        let delivery = self.registry.offer(&frame).await;

        let report = BroadcastReport {
            kind: event.kind(),
            target_id: event.target_id(),
            delivered: delivery.delivered,
            dropped: delivery.dropped,
            disconnected: delivery.disconnected.len(),
        };

        tracing::debug!(
            kind = %report.kind,
            target_id = %report.target_id,
            delivered = report.delivered,
            dropped = report.dropped,
            disconnected = report.disconnected,
            "Change event broadcast"
        );

        Ok(report)
    }
}

impl Default for BroadcastHub {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_BUFFER)
    }
}

#[async_trait]
impl ChangeNotifier for BroadcastHub {
    async fn notify(&self, event: ChangeEvent) {
        if let Err(e) = self.broadcast(&event).await {
            tracing::error!(
                kind = %event.kind(),
                target_id = %event.target_id(),
                error = %e,
                "Failed to broadcast change event"
            );
        }
    }
}
