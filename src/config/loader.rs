//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::{EndpointDescriptor, EndpointTable, RawEndpoint};
use crate::config::validation::{validate_endpoints, ValidationError};

/// Error type for configuration loading. Always fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Supported config file encodings, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => ConfigFormat::Toml,
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Load and validate the endpoint list from a config file.
pub fn load_config(path: &Path) -> Result<Vec<EndpointDescriptor>, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let raw = parse_endpoints(&content, ConfigFormat::from_path(path)).map_err(|message| {
        ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        }
    })?;

    let endpoints = validate_endpoints(&raw).map_err(ConfigError::Validation)?;

    tracing::debug!(path = %path.display(), count = endpoints.len(), "Endpoints loaded");
    Ok(endpoints)
}

/// Parse raw records without validating them.
pub fn parse_endpoints(content: &str, format: ConfigFormat) -> Result<Vec<RawEndpoint>, String> {
    match format {
        ConfigFormat::Yaml => {
            // An empty document deserializes to unit, not to an empty sequence.
            if content.trim().is_empty() {
                return Ok(Vec::new());
            }
            serde_yaml::from_str(content).map_err(|e| e.to_string())
        }
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        ConfigFormat::Toml => toml::from_str::<EndpointTable>(content)
            .map(|table| table.endpoints)
            .map_err(|e| e.to_string()),
    }
}
