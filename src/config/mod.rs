//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (YAML/TOML/JSON)
//!     → loader.rs (read & deserialize into RawEndpoint records)
//!     → validation.rs (semantic checks, defaults)
//!     → Vec<EndpointDescriptor> (validated, immutable)
//!     → owned by the health monitor for the process lifetime
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - Optional fields get explicit defaults at load time
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::CheckerConfig;
pub use schema::EndpointDescriptor;
