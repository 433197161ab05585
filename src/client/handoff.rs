//! Handoff from the transport task to the UI-owning context.
//!
//! The connection's reader task only ever sends into [`UiSender`]. The
//! context that owns the view drains [`UiInbox`] and applies each update
//! there, so view state is never touched from the transport task.

use tokio::sync::mpsc;

use crate::domain::live::ChangeEvent;
use crate::ports::RecipeView;

use super::dispatcher::ReconciliationDispatcher;

/// One item crossing from the transport task to the UI context.
#[derive(Debug, Clone, PartialEq)]
pub enum LiveUpdate {
    /// A decoded change event.
    Event(ChangeEvent),
    /// Live updates stopped; the view should say so.
    Degraded(String),
}

/// Create a connected sender/inbox pair.
pub fn ui_channel() -> (UiSender, UiInbox) {
    let (tx, rx) = mpsc::unbounded_channel();
    (UiSender { tx }, UiInbox { rx })
}

/// Transport-side handle. Sending never blocks.
#[derive(Debug, Clone)]
pub struct UiSender {
    tx: mpsc::UnboundedSender<LiveUpdate>,
}

impl UiSender {
    /// Queue an update. Returns `false` once the inbox has been dropped.
    pub fn send(&self, update: LiveUpdate) -> bool {
        self.tx.send(update).is_ok()
    }
}

/// UI-side end of the handoff.
#[derive(Debug)]
pub struct UiInbox {
    rx: mpsc::UnboundedReceiver<LiveUpdate>,
}

impl UiInbox {
    /// Take every queued update without waiting.
    pub fn try_recv_all(&mut self) -> Vec<LiveUpdate> {
        let mut updates = Vec::new();
        while let Ok(update) = self.rx.try_recv() {
            updates.push(update);
        }
        updates
    }

    /// Apply every queued update to `view` without waiting; returns how many
    /// were applied. Meant to be called from a GUI tick.
    pub fn drain<V: RecipeView + ?Sized>(
        &mut self,
        dispatcher: &ReconciliationDispatcher,
        view: &mut V,
    ) -> usize {
        let updates = self.try_recv_all();
        let count = updates.len();
        for update in updates {
            dispatcher.apply(update, view);
        }
        count
    }

    /// Wait for the next update.
    pub async fn recv(&mut self) -> Option<LiveUpdate> {
        self.rx.recv().await
    }

    /// Apply updates as they arrive until every sender is gone.
    pub async fn run<V: RecipeView + ?Sized>(
        mut self,
        dispatcher: &ReconciliationDispatcher,
        view: &mut V,
    ) {
        while let Some(update) = self.rx.recv().await {
            dispatcher.apply(update, view);
        }
        tracing::debug!("Live update handoff closed");
    }
}
