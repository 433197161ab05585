//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `recipe` - Recipe aggregate and ingredient lines
//! - `live` - Change events broadcast to connected clients

pub mod foundation;
pub mod live;
pub mod recipe;
