//! Runner configuration.

use crate::config::{validate_api_url, ConfigError};
use std::path::{Path, PathBuf};
use url::Url;

/// Configuration for a README update run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the README to update.
    readme_path: PathBuf,
    /// Optional bearer token for API calls.
    token: Option<String>,
    /// Whether to compute changes without writing the README.
    dry_run: bool,
    /// API root override, e.g. for GitHub Enterprise.
    api_url: Option<Url>,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(readme_path: PathBuf, token: Option<String>, dry_run: bool) -> Self {
        Self {
            readme_path,
            token,
            dry_run,
            api_url: None,
        }
    }

    /// Sets a custom API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the URL is invalid.
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self, ConfigError> {
        self.api_url = Some(validate_api_url(api_url)?);
        Ok(self)
    }

    /// Returns the README path.
    pub fn readme_path(&self) -> &Path {
        &self.readme_path
    }

    /// Returns the configured token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the API base URL override, if any.
    pub fn api_url(&self) -> Option<&Url> {
        self.api_url.as_ref()
    }
}
