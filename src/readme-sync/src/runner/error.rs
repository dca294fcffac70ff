//! Runner error types.

use thiserror::Error;

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Configuration errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Failed to read the README.
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the README.
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
