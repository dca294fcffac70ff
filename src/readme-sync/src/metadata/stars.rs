//! Star count lookup.

use super::Lookup;
use crate::github::RepositorySource;
use crate::repository::RepoRef;

/// Fetches the star count of a repository with a single repository request.
pub async fn fetch_stars<S: RepositorySource>(source: &S, repo: &RepoRef) -> Lookup<u64> {
    source
        .repository(repo)
        .await
        .map(|info| info.stargazers_count)
        .into()
}
