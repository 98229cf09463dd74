//! HTTP endpoint health checker library.

pub mod cli;
pub mod config;
pub mod health;
pub mod lifecycle;
pub mod observability;

pub use config::{load_config, CheckerConfig, ConfigError, EndpointDescriptor};
pub use health::{Aggregator, HealthMonitor, Prober, Reporter};
pub use lifecycle::Shutdown;
