//! OS signal handling.
//!
//! # Responsibilities
//! - Listen for SIGINT (Ctrl+C) and, on Unix, SIGTERM
//! - Translate the first one into a cooperative shutdown request
//!
//! # Design Decisions
//! - Uses Tokio's signal handling; nothing runs inside a raw signal handler
//! - The monitor observes the request at its own checkpoints
//! - A second signal forces an immediate exit with status 130

use crate::lifecycle::Shutdown;

/// Exit status used when a second signal arrives before shutdown completes.
pub const FORCED_EXIT_CODE: i32 = 130;

/// Spawn a task that turns termination signals into shutdown requests.
pub fn spawn_signal_listener(shutdown: Shutdown) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = wait_for_signal().await {
            tracing::error!(error = %e, "Failed to install signal handlers");
            return;
        }
        tracing::info!("Shutdown signal received, finishing current round");
        shutdown.trigger();

        if wait_for_signal().await.is_ok() {
            tracing::warn!("Second shutdown signal received, exiting immediately");
            std::process::exit(FORCED_EXIT_CODE);
        }
    })
}

#[cfg(unix)]
async fn wait_for_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut term = signal(SignalKind::terminate())?;
    tokio::select! {
        res = tokio::signal::ctrl_c() => res,
        _ = term.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}
