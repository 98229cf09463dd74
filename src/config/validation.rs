//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Turn raw records into typed [`EndpointDescriptor`]s
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Pure function: `&[RawEndpoint] → Result<Vec<EndpointDescriptor>, Vec<ValidationError>>`

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Method;
use thiserror::Error;
use url::Url;

use crate::config::schema::{EndpointDescriptor, RawEndpoint};

/// A single semantic problem in the endpoint list. `index` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no endpoints configured")]
    Empty,

    #[error("endpoint #{index}: missing required field `url`")]
    MissingUrl { index: usize },

    #[error("endpoint #{index}: invalid url `{url}`: {reason}")]
    InvalidUrl { index: usize, url: String, reason: String },

    #[error("endpoint #{index}: unsupported scheme `{scheme}` (expected http or https)")]
    UnsupportedScheme { index: usize, scheme: String },

    #[error("endpoint #{index}: invalid method `{method}`")]
    InvalidMethod { index: usize, method: String },

    #[error("endpoint #{index}: invalid header `{name}`")]
    InvalidHeader { index: usize, name: String },
}

/// Validate every record and build descriptors, collecting all errors.
pub fn validate_endpoints(
    raw: &[RawEndpoint],
) -> Result<Vec<EndpointDescriptor>, Vec<ValidationError>> {
    if raw.is_empty() {
        return Err(vec![ValidationError::Empty]);
    }

    let mut errors = Vec::new();
    let mut endpoints = Vec::with_capacity(raw.len());

    for (i, record) in raw.iter().enumerate() {
        let index = i + 1;
        let before = errors.len();

        let url = match record.url.as_deref() {
            None => {
                errors.push(ValidationError::MissingUrl { index });
                None
            }
            Some(text) => validate_url(index, text, &mut errors),
        };

        let method = match record.method.as_deref() {
            None => Method::GET,
            Some(m) => match Method::from_bytes(m.trim().to_ascii_uppercase().as_bytes()) {
                Ok(method) => method,
                Err(_) => {
                    errors.push(ValidationError::InvalidMethod {
                        index,
                        method: m.to_string(),
                    });
                    Method::GET
                }
            },
        };

        for (name, value) in &record.headers {
            if HeaderName::from_bytes(name.as_bytes()).is_err()
                || HeaderValue::from_str(value).is_err()
            {
                errors.push(ValidationError::InvalidHeader {
                    index,
                    name: name.clone(),
                });
            }
        }

        if let (Some(url), true) = (url, errors.len() == before) {
            endpoints.push(EndpointDescriptor {
                name: record.name.clone(),
                url,
                method,
                headers: record
                    .headers
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
                body: record.body.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(endpoints)
    } else {
        Err(errors)
    }
}

fn validate_url(index: usize, text: &str, errors: &mut Vec<ValidationError>) -> Option<Url> {
    let url = match Url::parse(text) {
        Ok(url) => url,
        Err(e) => {
            errors.push(ValidationError::InvalidUrl {
                index,
                url: text.to_string(),
                reason: e.to_string(),
            });
            return None;
        }
    };

    if !matches!(url.scheme(), "http" | "https") {
        errors.push(ValidationError::UnsupportedScheme {
            index,
            scheme: url.scheme().to_string(),
        });
        return None;
    }

    if url.host_str().map_or(true, str::is_empty) {
        errors.push(ValidationError::InvalidUrl {
            index,
            url: text.to_string(),
            reason: "missing host".to_string(),
        });
        return None;
    }

    Some(url)
}
