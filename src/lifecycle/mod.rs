//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     trigger → sticky flag + broadcast wakeup
//!     → monitor stops before the next round → exit 0
//! ```
//!
//! # Design Decisions
//! - Cancellation is a normal terminal state, not an error
//! - Shutdown has a grace period: an in-flight round is abandoned after it

pub mod shutdown;
pub mod signals;

pub use shutdown::{Shutdown, ShutdownListener};
