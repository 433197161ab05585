//! WebSocket adapters for live recipe updates.
//!
//! Pushes change events to connected clients after every committed write.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 Recipe command handlers                              │
//! │   persist, then ChangeNotifier::notify(event)                        │
//! └─────────────────────────────────────────────────────────────────────┘
//!                                     │
//!                                     ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        BroadcastHub                                  │
//! │   - encodes the event once                                           │
//! │   - owns the ConnectionRegistry                                      │
//! └─────────────────────────────────────────────────────────────────────┘
//!                                     │
//!                                     ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     ConnectionRegistry                               │
//! │   session-a    session-b    session-c   (bounded outbound queues)    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`registry`] - Session set with concurrent register/unregister/offer
//! - [`hub`] - Encode-once fan-out, `ChangeNotifier` implementation
//! - [`handler`] - Axum WebSocket upgrade handler

pub mod handler;
pub mod hub;
pub mod registry;

pub use handler::{live_updates_routes, ws_handler, LiveUpdatesState};
pub use hub::{BroadcastError, BroadcastHub, BroadcastReport, DEFAULT_SESSION_BUFFER};
pub use registry::{ConnectionRegistry, Delivery, Frame, Session, SessionId, SessionOutbox};
