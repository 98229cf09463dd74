//! Probe executor.
//!
//! # Responsibilities
//! - Issue one request per endpoint and time it
//! - Classify the outcome as UP or DOWN
//!
//! # Design Decisions
//! - UP iff a response arrived with a 2xx status below the latency threshold
//! - Every transport failure (refused, DNS, TLS, timeout) is DOWN; nothing propagates
//! - Latency is measured to response headers; the body is never read
//! - No retries; the next round is the retry
//! - Connections are not pooled, so nothing outlives a single probe

use std::error::Error as StdError;
use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};
use thiserror::Error;
use tokio::time::{self, Instant};

use crate::config::{CheckerConfig, EndpointDescriptor};

/// Why a probe produced no response. Only ever used for logging.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("request failed: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),
}

impl From<reqwest::Error> for ProbeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProbeError::Timeout(Duration::ZERO)
        } else {
            ProbeError::Transport(Box::new(e))
        }
    }
}

/// Sends one request and yields the response status code.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        endpoint: &EndpointDescriptor,
    ) -> impl Future<Output = Result<u16, ProbeError>> + Send;
}

/// Real HTTP transport backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(request_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .pool_max_idle_per_host(0)
            .user_agent(concat!("health-checker/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn send(&self, endpoint: &EndpointDescriptor) -> Result<u16, ProbeError> {
        let mut request = self
            .client
            .request(endpoint.method.clone(), endpoint.url.clone());

        for (name, value) in &endpoint.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ProbeError::Transport(Box::new(e)))?;
            let value =
                HeaderValue::from_str(value).map_err(|e| ProbeError::Transport(Box::new(e)))?;
            request = request.header(name, value);
        }
        if let Some(body) = &endpoint.body {
            request = request.body(body.clone());
        }

        let response = request.send().await?;
        Ok(response.status().as_u16())
    }
}

/// What one probe observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub healthy: bool,
    pub status: Option<u16>,
    pub latency: Duration,
}

/// UP iff status is 2xx and latency is strictly below `threshold`.
pub fn classify(status: u16, latency: Duration, threshold: Duration) -> bool {
    (200..300).contains(&status) && latency < threshold
}

/// Runs probes through a transport with a hard timeout and latency threshold.
#[derive(Debug, Clone)]
pub struct Prober<T> {
    transport: T,
    request_timeout: Duration,
    latency_threshold: Duration,
}

impl Prober<HttpTransport> {
    pub fn http(config: &CheckerConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(HttpTransport::new(config.request_timeout)?, config))
    }
}

impl<T: Transport> Prober<T> {
    pub fn new(transport: T, config: &CheckerConfig) -> Self {
        Self {
            transport,
            request_timeout: config.request_timeout,
            latency_threshold: config.latency_threshold,
        }
    }

    /// Probe one endpoint and report only the health verdict.
    pub async fn probe(&self, endpoint: &EndpointDescriptor) -> bool {
        self.probe_detailed(endpoint).await.healthy
    }

    /// Probe one endpoint. Never fails: errors become a DOWN outcome.
    pub async fn probe_detailed(&self, endpoint: &EndpointDescriptor) -> ProbeOutcome {
        let start = Instant::now();
        let result = time::timeout(self.request_timeout, self.transport.send(endpoint)).await;
        let latency = start.elapsed();

        let status = match result {
            Ok(Ok(status)) => status,
            Ok(Err(ProbeError::Timeout(_))) | Err(_) => {
                return self.unreachable(endpoint, ProbeError::Timeout(self.request_timeout), latency)
            }
            Ok(Err(e)) => return self.unreachable(endpoint, e, latency),
        };

        let healthy = classify(status, latency, self.latency_threshold);
        if healthy {
            tracing::trace!(endpoint = %endpoint.label(), status, latency_ms = latency.as_millis() as u64, "Probe UP");
        } else {
            tracing::debug!(
                endpoint = %endpoint.label(),
                status,
                latency_ms = latency.as_millis() as u64,
                "Probe DOWN"
            );
        }

        ProbeOutcome {
            healthy,
            status: Some(status),
            latency,
        }
    }

    fn unreachable(
        &self,
        endpoint: &EndpointDescriptor,
        error: ProbeError,
        latency: Duration,
    ) -> ProbeOutcome {
        tracing::debug!(endpoint = %endpoint.label(), error = %error, "Probe DOWN: no response");
        ProbeOutcome {
            healthy: false,
            status: None,
            latency,
        }
    }
}
