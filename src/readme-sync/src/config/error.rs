//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while building a run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API base URL is not a valid absolute URL.
    #[error("Invalid API URL '{url}': {source}")]
    InvalidApiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The API base URL uses a scheme other than http or https.
    #[error("Unsupported API URL scheme '{scheme}' in '{url}'")]
    UnsupportedScheme { url: String, scheme: String },
}
