//! ChangeNotifier port - how write handlers announce committed changes.
//!
//! Notification is best effort. Implementations swallow and log their own
//! failures; a notification problem never fails or rolls back the write
//! that triggered it.

use async_trait::async_trait;

use crate::domain::live::ChangeEvent;

/// Port for announcing a committed recipe change to connected clients.
///
/// Call exactly once per successful mutation, after the repository call
/// has returned `Ok`.
#[async_trait]
pub trait ChangeNotifier: Send + Sync {
    async fn notify(&self, event: ChangeEvent);
}
