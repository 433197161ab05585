//! Registry of live WebSocket sessions.
//!
//! Every connected client is one [`Session`]: an ID plus the sending half
//! of a bounded queue of outbound frames. The socket task on the other end
//! drains the queue into the socket.
//!
//! # Thread Safety
//!
//! The session map sits behind a `RwLock`. Offering a frame to every
//! session only needs the read lock, so concurrent broadcasts don't block
//! each other; register/unregister take the write lock and therefore wait
//! for any in-flight iteration to finish. Once `unregister` returns, no
//! further frame is offered to that session.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::RwLock;
use uuid::Uuid;

/// One encoded change event, shared by every session it is sent to.
pub type Frame = Arc<str>;

/// Receiving half of a session's outbound queue.
pub type SessionOutbox = mpsc::Receiver<Frame>;

/// Unique identifier for a WebSocket session.
///
/// Generated server-side when a client connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle to one open connection.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    outbox: mpsc::Sender<Frame>,
}

impl Session {
    /// Open a session with an outbound queue of `capacity` frames.
    ///
    /// Returns the session handle (to register) and the queue's receiving
    /// half (for the socket writer).
    pub fn open(capacity: usize) -> (Self, SessionOutbox) {
        let (outbox, rx) = mpsc::channel(capacity.max(1));
        (
            Self {
                id: SessionId::new(),
                outbox,
            },
            rx,
        )
    }

    pub fn id(&self) -> SessionId {
        self.id
    }
}

/// Outcome of offering one frame to every registered session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delivery {
    /// Sessions that accepted the frame.
    pub delivered: usize,
    /// Sessions whose queue was full; the frame was skipped for them.
    pub dropped: usize,
    /// Sessions whose transport was gone; they have been unregistered.
    pub disconnected: Vec<SessionId>,
}

/// Tracks the set of currently connected sessions.
pub struct ConnectionRegistry {
    sessions: RwLock<HashMap<SessionId, mpsc::Sender<Frame>>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Add a session. Returns `false` (and changes nothing) if a session
    /// with the same ID is already registered.
    pub async fn register(&self, session: Session) -> bool {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.id) {
            return false;
        }
        sessions.insert(session.id, session.outbox);
        true
    }

    /// Remove a session. Safe to call more than once; returns whether
    /// the session was present.
    pub async fn unregister(&self, id: &SessionId) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }

    /// Number of registered sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Offer `frame` to every registered session without waiting on any
    /// of them.
    ///
    /// A full queue skips the frame for that session only. A closed queue
    /// means the socket is gone; such sessions are removed once the
    /// iteration is over.
    pub(crate) async fn offer(&self, frame: &Frame) -> Delivery {
        let mut delivery = Delivery::default();

        {
            let sessions = self.sessions.read().await;
            for (id, outbox) in sessions.iter() {
                match outbox.try_send(Arc::clone(frame)) {
                    Ok(()) => delivery.delivered += 1,
                    Err(TrySendError::Full(_)) => {
                        tracing::warn!(session_id = %id, "Session queue full, dropping frame");
                        delivery.dropped += 1;
                    }
                    Err(TrySendError::Closed(_)) => delivery.disconnected.push(*id),
                }
            }
        }

        if !delivery.disconnected.is_empty() {
            let mut sessions = self.sessions.write().await;
            for id in &delivery.disconnected {
                sessions.remove(id);
                tracing::debug!(session_id = %id, "Removed disconnected session");
            }
        }

        delivery
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
