//! Command-line arguments.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::CheckerConfig;

#[derive(Debug, Parser)]
#[command(name = "health-checker", version)]
#[command(about = "Probe HTTP endpoints and report per-domain availability", long_about = None)]
pub struct Cli {
    /// Endpoint list (YAML, TOML or JSON)
    pub config: PathBuf,

    /// Seconds to sleep between rounds
    #[arg(long, default_value_t = 15)]
    pub interval_secs: u64,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub timeout_ms: u64,

    /// Responses at or above this latency count as DOWN
    #[arg(long, default_value_t = 500)]
    pub latency_threshold_ms: u64,

    /// Maximum probes in flight per round
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,

    /// Seconds an in-flight round may run after a shutdown signal
    #[arg(long, default_value_t = 2)]
    pub grace_secs: u64,

    /// Log level for this crate (overridden by RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Serve Prometheus metrics on this address
    #[arg(long)]
    pub metrics_address: Option<SocketAddr>,
}

impl Cli {
    pub fn checker_config(&self) -> CheckerConfig {
        CheckerConfig {
            interval: Duration::from_secs(self.interval_secs),
            request_timeout: Duration::from_millis(self.timeout_ms),
            latency_threshold: Duration::from_millis(self.latency_threshold_ms),
            concurrency: usize::from(self.concurrency),
            shutdown_grace: Duration::from_secs(self.grace_secs),
        }
    }
}
