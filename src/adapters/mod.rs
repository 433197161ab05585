//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST endpoints for recipes and ingredient lines
//! - `memory` - In-process recipe storage
//! - `websocket` - Live change notifications pushed to connected clients

pub mod http;
pub mod memory;
pub mod websocket;

pub use memory::InMemoryRecipeRepository;
pub use websocket::{BroadcastHub, LiveUpdatesState};
