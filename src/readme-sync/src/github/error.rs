//! Metadata fetch error types.

use thiserror::Error;

/// Errors that can occur while fetching repository metadata.
#[derive(Debug, Error)]
pub enum FetchError {
    /// GitHub API error (transport, HTTP status or response body).
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The requested resource does not exist (HTTP 404).
    #[error("Resource not found: {route}")]
    NotFound { route: String },

    /// A timestamp field could not be parsed.
    #[error("Invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A commit was returned without a committer or author date.
    #[error("Commit on '{reference}' has no committer or author date")]
    MissingTimestamp { reference: String },

    /// Neither commit lookup succeeded and the repository has no `pushed_at`.
    #[error("No last activity timestamp available")]
    NoActivity,
}

impl FetchError {
    /// Converts an octocrab error for `route`, singling out 404 responses.
    pub(crate) fn from_octocrab(route: String, error: octocrab::Error) -> Self {
        match &error {
            octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 404 => {
                FetchError::NotFound { route }
            }
            _ => FetchError::GitHubError(error),
        }
    }
}
