//! Shutdown coordination.
//!
//! The gateway has exactly two long-lived tasks: the HTTP server and the
//! signal listener. `Shutdown` is the one-shot handoff between them: the
//! listener (or a test) triggers it once, the server drains in-flight
//! requests and exits. Triggering more than once, or with no server
//! subscribed yet, is harmless.

use tokio::sync::broadcast;

/// One-shot shutdown signal for the gateway.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver handed to the HTTP server's graceful-shutdown future.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Request shutdown. Safe to call repeatedly; a send with no
    /// subscribers only means the server already stopped.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
