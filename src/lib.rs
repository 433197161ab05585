//! Recipe Book - recipe management backend with live change notifications.
//!
//! Every committed write to a recipe or one of its ingredient lines is
//! pushed to all connected clients as a typed change event. The `client`
//! module turns those events into the smallest view refresh needed.

pub mod adapters;
pub mod app;
pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod ports;
