//! Metrics collection and exposition.
//!
//! # Metrics
//! - `health_checker_probes_total` (counter): probes by domain, outcome
//! - `health_checker_probe_latency_ms` (histogram): time to response headers
//! - `health_checker_availability_percent` (gauge): cumulative availability per domain
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; a no-op until an exporter is installed
//! - The Prometheus exporter is opt-in via `--metrics-address`

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::health::probe::ProbeOutcome;
use crate::health::stats::Aggregator;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record a single probe result.
pub fn record_probe(domain: &str, outcome: &ProbeOutcome) {
    let result = if outcome.healthy { "up" } else { "down" };
    metrics::counter!(
        "health_checker_probes_total",
        "domain" => domain.to_string(),
        "outcome" => result
    )
    .increment(1);

    if outcome.status.is_some() {
        metrics::histogram!("health_checker_probe_latency_ms", "domain" => domain.to_string())
            .record(outcome.latency.as_secs_f64() * 1000.0);
    }
}

/// Publish the current availability of every known domain.
pub fn record_availability(stats: &Aggregator) {
    for (domain, s) in stats.all_domains() {
        if let Some(pct) = s.availability() {
            metrics::gauge!(
                "health_checker_availability_percent",
                "domain" => domain.to_string()
            )
            .set(f64::from(pct));
        }
    }
}
