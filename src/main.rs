//! HTTP Endpoint Health Checker
//!
//! Probes a fixed list of HTTP endpoints every interval and prints the
//! cumulative availability of each domain.
//!
//! # Architecture Overview
//!
//! ```text
//!   endpoints.yaml ──▶ config::loader ──▶ Vec<EndpointDescriptor>
//!                                                │
//!                                                ▼
//!   SIGINT/SIGTERM ──▶ lifecycle ──────▶ health::monitor (round loop)
//!                      (Shutdown)          │        │          │
//!                                          ▼        ▼          ▼
//!                                       probe    stats      report ──▶ stdout
//!                                          │
//!                                          ▼
//!                                   observability (tracing → stderr, metrics)
//! ```
//!
//! # Exit Codes
//! - 0: stopped by a shutdown signal
//! - 1: bad command line
//! - 2: startup failure (configuration, client, metrics endpoint)
//! - 130: a second signal forced the exit

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use health_checker::cli::Cli;
use health_checker::config::load_config;
use health_checker::health::{HealthMonitor, Prober, Reporter};
use health_checker::lifecycle::{signals, Shutdown};
use health_checker::observability::{logging, metrics};

const EXIT_USAGE: u8 = 1;
const EXIT_STARTUP: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };

    logging::init(cli.log_level.as_deref());
    tracing::info!("health-checker v{} starting", env!("CARGO_PKG_VERSION"));

    let endpoints = match load_config(&cli.config) {
        Ok(endpoints) => endpoints,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            eprintln!("error: {}", e);
            return ExitCode::from(EXIT_STARTUP);
        }
    };

    let config = cli.checker_config();
    tracing::info!(
        path = %cli.config.display(),
        endpoints = endpoints.len(),
        interval_secs = config.interval.as_secs(),
        timeout_ms = config.request_timeout.as_millis() as u64,
        latency_threshold_ms = config.latency_threshold.as_millis() as u64,
        "Configuration loaded"
    );

    if let Some(addr) = cli.metrics_address {
        if let Err(e) = metrics::init_metrics(addr) {
            tracing::error!(metrics_address = %addr, error = %e, "Failed to start metrics endpoint");
            return ExitCode::from(EXIT_STARTUP);
        }
    }

    let prober = match Prober::http(&config) {
        Ok(prober) => prober,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client");
            return ExitCode::from(EXIT_STARTUP);
        }
    };

    let shutdown = Shutdown::new();
    let listener = shutdown.subscribe();
    let _signals = signals::spawn_signal_listener(shutdown.clone());

    HealthMonitor::new(endpoints, prober, Reporter::stdout(), config)
        .run(listener)
        .await;

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
