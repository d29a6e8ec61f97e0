//! Stop switch for running HTTP servers.

use tokio::sync::broadcast;

/// Tells every subscribed `HttpServer::run` to stop accepting connections
/// and drain in-flight requests.
///
/// `startup::run` fires it from the signal task; the integration test
/// harness fires it when a test server goes out of scope.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        // A single pending stop is all a server ever needs to see.
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver to hand to `HttpServer::run`. Subscribe before triggering;
    /// late subscribers miss the stop.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Stop every subscribed server. Returns how many were notified.
    pub fn trigger(&self) -> usize {
        let servers = self.tx.send(()).unwrap_or(0);
        tracing::info!(servers, "Shutdown requested");
        servers
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
