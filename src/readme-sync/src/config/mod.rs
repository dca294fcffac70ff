//! Run configuration.
//!
//! This module resolves the API token from the environment and validates
//! user supplied settings before a run starts.

mod error;

pub use error::ConfigError;

use serde::Serialize;
use std::fmt;
use tracing::debug;
use url::Url;

/// Environment variables checked for an API token, in order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Which annotation a run keeps in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    /// `**Stars**:` and `Official repository (…⭐)` annotations.
    Stars,
    /// `**Maintenance**:` annotations.
    Maintenance,
}

impl fmt::Display for UpdateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateMode::Stars => f.write_str("stars"),
            UpdateMode::Maintenance => f.write_str("maintenance"),
        }
    }
}

/// Reads the API token from [`TOKEN_ENV_VARS`].
///
/// The first variable holding a non-empty value wins. Returns `None` when
/// neither is set, in which case requests are made anonymously.
pub fn token_from_env() -> Option<String> {
    TOKEN_ENV_VARS.iter().find_map(|name| {
        let value = std::env::var(name).ok().filter(|v| !v.is_empty())?;
        debug!(variable = name, "Using API token from environment");
        Some(value)
    })
}

/// Validates an API base URL.
///
/// # Errors
///
/// Returns [`ConfigError`] if the URL does not parse or is not http(s).
pub fn validate_api_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidApiUrl {
        url: raw.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigError::UnsupportedScheme {
            url: raw.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}
