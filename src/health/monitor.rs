//! Round-based health monitor.
//!
//! # Responsibilities
//! - Probe every endpoint once per round, in configuration order
//! - Feed outcomes to the aggregator, then report
//! - Sleep, repeat, and stop cleanly on shutdown
//!
//! # States
//! ```text
//! Running → Stopping: shutdown requested (checked before each round and
//!                     during the sleep; an in-flight round gets a grace period)
//! Stopping → Stopped: loop exits, run() returns
//! ```

use std::io::Write;

use futures_util::{stream, StreamExt};
use tokio::time;

use crate::config::{CheckerConfig, EndpointDescriptor};
use crate::health::probe::{Prober, Transport};
use crate::health::report::Reporter;
use crate::health::stats::Aggregator;
use crate::lifecycle::ShutdownListener;
use crate::observability::metrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Running,
    Stopping,
    Stopped,
}

/// Drives probing rounds until shutdown. Sole owner of the aggregator.
pub struct HealthMonitor<T, W> {
    endpoints: Vec<EndpointDescriptor>,
    prober: Prober<T>,
    stats: Aggregator,
    reporter: Reporter<W>,
    config: CheckerConfig,
    state: MonitorState,
    rounds: u64,
}

impl<T: Transport, W: Write> HealthMonitor<T, W> {
    pub fn new(
        endpoints: Vec<EndpointDescriptor>,
        prober: Prober<T>,
        reporter: Reporter<W>,
        config: CheckerConfig,
    ) -> Self {
        Self {
            endpoints,
            prober,
            stats: Aggregator::new(),
            reporter,
            config,
            state: MonitorState::Running,
            rounds: 0,
        }
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn stats(&self) -> &Aggregator {
        &self.stats
    }

    /// Completed (reported) rounds so far.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    pub fn into_reporter(self) -> Reporter<W> {
        self.reporter
    }

    /// Run rounds until `shutdown` fires. Returns the monitor in `Stopped` state.
    pub async fn run(mut self, mut shutdown: ShutdownListener) -> Self {
        tracing::info!(
            endpoints = self.endpoints.len(),
            interval_secs = self.config.interval.as_secs_f64(),
            concurrency = self.config.concurrency,
            "Health monitor starting"
        );

        while self.state == MonitorState::Running {
            if shutdown.is_triggered() {
                self.state = MonitorState::Stopping;
                break;
            }

            let completed = {
                let round = probe_round(
                    &self.prober,
                    &self.endpoints,
                    self.config.concurrency,
                    &mut self.stats,
                );
                tokio::pin!(round);

                tokio::select! {
                    _ = &mut round => true,
                    _ = shutdown.recv() => {
                        self.state = MonitorState::Stopping;
                        tracing::info!(
                            grace_secs = self.config.shutdown_grace.as_secs_f64(),
                            "Shutdown requested mid-round, waiting for in-flight probes"
                        );
                        time::timeout(self.config.shutdown_grace, &mut round).await.is_ok()
                    }
                }
            };

            if completed {
                self.rounds += 1;
                self.reporter.report(&self.stats);
                metrics::record_availability(&self.stats);
                tracing::debug!(round = self.rounds, domains = self.stats.len(), "Round complete");
            } else {
                tracing::warn!("Grace period elapsed, abandoning in-flight probes");
            }

            if self.state != MonitorState::Running {
                break;
            }

            tokio::select! {
                _ = time::sleep(self.config.interval) => {}
                _ = shutdown.recv() => {
                    self.state = MonitorState::Stopping;
                }
            }
        }

        self.state = MonitorState::Stopped;
        tracing::info!(rounds = self.rounds, "Health monitor stopped");
        self
    }
}

/// Probe every endpoint, at most `concurrency` at a time, recording results
/// in configuration order.
async fn probe_round<T: Transport>(
    prober: &Prober<T>,
    endpoints: &[EndpointDescriptor],
    concurrency: usize,
    stats: &mut Aggregator,
) {
    let mut results = stream::iter(endpoints)
        .map(move |endpoint| async move { (endpoint, prober.probe_detailed(endpoint).await) })
        .buffered(concurrency.max(1));

    while let Some((endpoint, outcome)) = results.next().await {
        let domain = endpoint.domain();
        metrics::record_probe(&domain, &outcome);
        stats.record(&domain, outcome.healthy);
    }
}
