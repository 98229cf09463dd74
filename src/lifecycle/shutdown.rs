//! Shutdown coordination for the checker.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
///
/// A sticky flag records that shutdown was requested, so late subscribers and
/// checkpoint polls still see it. The broadcast channel wakes tasks that are
/// parked in a sleep.
#[derive(Debug, Clone)]
pub struct Shutdown {
    /// Set once, never cleared.
    requested: Arc<AtomicBool>,
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            requested: Arc::new(AtomicBool::new(false)),
            tx,
        }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> ShutdownListener {
        ShutdownListener {
            requested: self.requested.clone(),
            rx: self.tx.subscribe(),
        }
    }

    /// Trigger the shutdown signal. Idempotent.
    pub fn trigger(&self) {
        if !self.requested.swap(true, Ordering::SeqCst) {
            let _ = self.tx.send(());
        }
    }

    /// Whether shutdown has been requested.
    pub fn is_triggered(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Get the number of active subscribers (tasks still running).
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side handed to long-running tasks.
#[derive(Debug)]
pub struct ShutdownListener {
    requested: Arc<AtomicBool>,
    rx: broadcast::Receiver<()>,
}

impl ShutdownListener {
    pub fn is_triggered(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Resolve once shutdown is requested. Returns immediately if it already was.
    ///
    /// Cancel safe: can be used as a `tokio::select!` branch repeatedly.
    pub async fn recv(&mut self) {
        while !self.is_triggered() {
            match self.rx.recv().await {
                Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => {}
                // Every coordinator handle is gone; nobody can trigger any more.
                Err(broadcast::error::RecvError::Closed) => std::future::pending::<()>().await,
            }
        }
    }
}
