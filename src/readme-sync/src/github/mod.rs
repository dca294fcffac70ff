//! GitHub API access.
//!
//! [`RepositorySource`] is the transport seam used by the metadata fetchers;
//! [`GitHubClient`] implements it on top of octocrab.

mod error;
mod models;

pub use error::FetchError;
pub use models::{CommitDetails, CommitInfo, RepositoryInfo, Signature};

use crate::repository::RepoRef;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use std::future::Future;
use tracing::debug;

/// Source of raw repository metadata.
pub trait RepositorySource {
    /// Fetches `GET /repos/{owner}/{repo}`.
    fn repository(&self, repo: &RepoRef)
        -> impl Future<Output = Result<RepositoryInfo, FetchError>>;

    /// Fetches `GET /repos/{owner}/{repo}/commits/{reference}`.
    fn commit(
        &self,
        repo: &RepoRef,
        reference: &str,
    ) -> impl Future<Output = Result<CommitInfo, FetchError>>;
}

/// GitHub REST API client.
///
/// Sends `Authorization: Bearer <token>` when built with a token, otherwise
/// requests are anonymous. Each lookup is a single request; failed requests
/// are never retried.
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    /// Builds a client.
    ///
    /// # Arguments
    ///
    /// * `token` - Optional bearer token
    /// * `base_uri` - Optional API root, e.g. for GitHub Enterprise
    ///
    /// # Errors
    ///
    /// Returns an error if the base URI is invalid or the HTTP client cannot be built.
    pub fn new(token: Option<&str>, base_uri: Option<&str>) -> Result<Self, octocrab::Error> {
        let mut builder = Octocrab::builder().add_retry_config(RetryConfig::None);
        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }
        if let Some(base_uri) = base_uri {
            builder = builder.base_uri(base_uri)?;
        }

        Ok(Self {
            octocrab: builder.build()?,
        })
    }
}

impl RepositorySource for GitHubClient {
    async fn repository(&self, repo: &RepoRef) -> Result<RepositoryInfo, FetchError> {
        let route = format!("/repos/{}/{}", repo.owner, repo.name);
        debug!(route = %route, "Fetching repository");
        self.octocrab
            .get(&route, None::<&()>)
            .await
            .map_err(|e| FetchError::from_octocrab(route, e))
    }

    async fn commit(&self, repo: &RepoRef, reference: &str) -> Result<CommitInfo, FetchError> {
        let route = format!("/repos/{}/{}/commits/{}", repo.owner, repo.name, reference);
        debug!(route = %route, "Fetching commit");
        self.octocrab
            .get(&route, None::<&()>)
            .await
            .map_err(|e| FetchError::from_octocrab(route, e))
    }
}
