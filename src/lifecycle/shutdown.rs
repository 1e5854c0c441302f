//! Shutdown coordination.
//!
//! A single `watch` flag flips from `false` to `true` once. Receivers that
//! subscribe after the flip still see it, so a signal arriving while the
//! server is starting up is not lost.

use std::sync::Arc;

use tokio::sync::watch;

/// Receiving half handed to the server.
pub type ShutdownSignal = watch::Receiver<bool>;

/// Owner of the stop flag. Clones share the same flag.
#[derive(Debug, Clone)]
pub struct Shutdown {
    flag: Arc<watch::Sender<bool>>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (flag, _) = watch::channel(false);
        Self {
            flag: Arc::new(flag),
        }
    }

    pub fn subscribe(&self) -> ShutdownSignal {
        self.flag.subscribe()
    }

    /// Ask the server to stop accepting connections and drain. Idempotent.
    pub fn trigger(&self) {
        if !self.flag.send_replace(true) {
            tracing::info!("Graceful shutdown requested");
        }
    }

    pub fn is_triggered(&self) -> bool {
        *self.flag.borrow()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve once the flag is set or every [`Shutdown`] handle is dropped.
pub async fn wait(mut signal: ShutdownSignal) {
    // Err means the sender is gone, which also means "stop".
    let _ = signal.wait_for(|stopped| *stopped).await;
}
