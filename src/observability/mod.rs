//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! health monitor produces:
//!     → logging.rs (structured log events on stderr)
//!     → metrics.rs (probe counters, latency histogram, availability gauge)
//!
//! Consumers:
//!     → Terminal / log collector
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```

pub mod logging;
pub mod metrics;
