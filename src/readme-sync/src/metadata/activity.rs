//! Last activity lookup.

use super::Lookup;
use crate::github::{CommitDetails, FetchError, RepositorySource};
use crate::repository::RepoRef;
use chrono::{DateTime, FixedOffset};
use tracing::{debug, warn};

/// Branch tried before the repository's default branch.
pub const PREFERRED_BRANCH: &str = "main";

/// Looks up when a repository was last active.
///
/// Resolution order:
/// 1. The repository itself (required; a failure here makes the repository unavailable)
/// 2. The latest commit on [`PREFERRED_BRANCH`]
/// 3. The latest commit on the repository's default branch
/// 4. The repository's `pushed_at` time
///
/// A commit is used only if the response embeds a commit object. Its
/// committer date is preferred over its author date.
pub async fn last_activity<S: RepositorySource>(
    source: &S,
    repo: &RepoRef,
) -> Lookup<DateTime<FixedOffset>> {
    resolve_last_activity(source, repo).await.into()
}

async fn resolve_last_activity<S: RepositorySource>(
    source: &S,
    repo: &RepoRef,
) -> Result<DateTime<FixedOffset>, FetchError> {
    let info = source.repository(repo).await?;

    let mut reference = PREFERRED_BRANCH.to_string();
    let mut commit = commit_details(source, repo, &reference).await;

    if commit.is_none() {
        reference = info
            .default_branch
            .clone()
            .unwrap_or_else(|| PREFERRED_BRANCH.to_string());
        commit = commit_details(source, repo, &reference).await;
    }

    match commit {
        Some(details) => {
            let date = details
                .date()
                .ok_or(FetchError::MissingTimestamp { reference })?;
            parse_timestamp(date)
        }
        None => {
            debug!(repo = %repo, "No commit data, falling back to pushed_at");
            match info.pushed_at.as_deref().filter(|p| !p.is_empty()) {
                Some(pushed_at) => parse_timestamp(pushed_at),
                None => Err(FetchError::NoActivity),
            }
        }
    }
}

/// Fetches the commit object for `reference`, or `None` if there is none.
async fn commit_details<S: RepositorySource>(
    source: &S,
    repo: &RepoRef,
    reference: &str,
) -> Option<CommitDetails> {
    match source.commit(repo, reference).await {
        Ok(info) => info.commit,
        Err(e) => {
            warn!(repo = %repo, reference, error = %e, "Failed to fetch commit");
            None
        }
    }
}

/// Parses a GitHub timestamp, normalising a trailing `Z` to `+00:00`.
///
/// # Errors
///
/// Returns [`FetchError::InvalidTimestamp`] if the value is not RFC 3339.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, FetchError> {
    let normalized = value.replace('Z', "+00:00");
    DateTime::parse_from_rfc3339(&normalized).map_err(|source| FetchError::InvalidTimestamp {
        value: value.to_string(),
        source,
    })
}
