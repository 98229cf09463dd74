//! Health checking subsystem.
//!
//! # Data Flow
//! ```text
//! monitor.rs (one round every interval):
//!     for each endpoint, in config order
//!     → probe.rs (one request, UP/DOWN verdict)
//!     → stats.rs (per-domain cumulative counters)
//!     → report.rs (one line per domain)
//!     → sleep, repeat until shutdown
//! ```
//!
//! # Design Decisions
//! - Statistics are keyed by URL host, so endpoints on one host share an entry
//! - Statistics are cumulative for the whole run, never windowed
//! - The aggregator has a single owner; concurrent probes funnel results back to it

pub mod monitor;
pub mod probe;
pub mod report;
pub mod stats;

pub use monitor::{HealthMonitor, MonitorState};
pub use probe::{classify, HttpTransport, ProbeOutcome, Prober, Transport};
pub use report::Reporter;
pub use stats::{Aggregator, DomainStats};
