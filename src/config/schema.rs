//! Configuration schema definitions.
//!
//! Endpoint records are deserialized into [`RawEndpoint`] and only become
//! [`EndpointDescriptor`]s after validation, so probing code never has to
//! deal with missing or malformed fields.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use url::Url;

/// One endpoint record as it appears in a config file.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct RawEndpoint {
    /// Optional label, only used in logs.
    #[serde(default)]
    pub name: Option<String>,

    /// Target URL. Required; validation rejects records without it.
    #[serde(default)]
    pub url: Option<String>,

    /// HTTP method (default: GET).
    #[serde(default)]
    pub method: Option<String>,

    /// Request headers, applied verbatim.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Optional request body, sent as-is.
    #[serde(default)]
    pub body: Option<String>,
}

/// TOML config files wrap the records in `[[endpoints]]` tables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EndpointTable {
    #[serde(default)]
    pub endpoints: Vec<RawEndpoint>,
}

/// A validated, immutable probe target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub name: Option<String>,
    pub url: Url,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl EndpointDescriptor {
    /// Build a GET descriptor with no headers or body.
    pub fn get(url: Url) -> Self {
        Self {
            name: None,
            url,
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Aggregation key: the URL host, with the port when one is given explicitly.
    ///
    /// Always derived from the URL, never cached.
    pub fn domain(&self) -> String {
        domain_of(&self.url)
    }

    /// Label used in log lines.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.url.as_str())
    }
}

/// Host plus explicit port. Userinfo, scheme and path are excluded.
pub fn domain_of(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

/// Runtime settings for the checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Sleep between the end of one round and the start of the next.
    pub interval: Duration,

    /// Per-request timeout; exceeding it counts as DOWN.
    pub request_timeout: Duration,

    /// A response at or above this latency counts as DOWN.
    pub latency_threshold: Duration,

    /// Maximum probes in flight within one round (1 = sequential).
    pub concurrency: usize,

    /// How long a round may keep running once shutdown is requested.
    pub shutdown_grace: Duration,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(15),
            request_timeout: Duration::from_secs(1),
            latency_threshold: Duration::from_millis(500),
            concurrency: 1,
            shutdown_grace: Duration::from_secs(2),
        }
    }
}
