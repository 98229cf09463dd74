//! Structured logging.
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - `RUST_LOG` overrides the CLI log level
//! - Logs go to stderr; stdout is reserved for availability reports

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when neither `RUST_LOG` nor `--log-level` is given.
pub const DEFAULT_FILTER: &str = "health_checker=info";

/// Build the filter: `RUST_LOG` first, then `level` applied to this crate.
pub fn build_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match level {
        Some(level) => EnvFilter::new(format!("health_checker={}", level)),
        None => EnvFilter::new(DEFAULT_FILTER),
    })
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(level: Option<&str>) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
