//! Shutdown coordination shared by the two daemons.

use tokio::sync::broadcast;

use crate::lifecycle::signals;

/// Coordinator for graceful shutdown.
///
/// Each daemon creates one, hands a subscription to its server run loop,
/// and arms the interrupt listener. Integration tests drive teardown by
/// calling [`Shutdown::trigger`] directly instead.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Spawn a task that triggers the coordinator when the process is
    /// interrupted (Ctrl+C).
    pub fn listen_for_ctrl_c(&self) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            signals::shutdown_signal().await;
            let _ = tx.send(());
        });
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_reaches_every_subscriber() {
        let shutdown = Shutdown::new();
        let mut server_rx = shutdown.subscribe();
        let mut worker_rx = shutdown.subscribe();

        shutdown.trigger();

        assert!(server_rx.recv().await.is_ok());
        assert!(worker_rx.recv().await.is_ok());
    }

    #[tokio::test]
    async fn test_trigger_without_subscribers_does_not_panic() {
        let shutdown = Shutdown::new();
        shutdown.trigger();

        // Later subscribers wait for the next trigger rather than seeing
        // the old one.
        let mut rx = shutdown.subscribe();
        shutdown.trigger();
        assert!(rx.recv().await.is_ok());
    }
}
