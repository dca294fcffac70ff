//! GitHub REST API response models.
//!
//! Only the fields read by the updaters are modelled; everything else in
//! the payloads is ignored.

use serde::Deserialize;

/// Subset of `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositoryInfo {
    /// Star count. Absent means zero; `null` is rejected.
    #[serde(default)]
    pub stargazers_count: u64,

    /// Default branch name (e.g., "main" or "master").
    pub default_branch: Option<String>,

    /// Time of the last push, ISO-8601 with a trailing `Z`.
    pub pushed_at: Option<String>,
}

/// Subset of `GET /repos/{owner}/{repo}/commits/{ref}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitInfo {
    /// Embedded git commit object. `None` means the response carried no commit data.
    pub commit: Option<CommitDetails>,
}

/// Git commit object embedded in a commit response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitDetails {
    pub committer: Option<Signature>,
    pub author: Option<Signature>,
}

/// Git signature (name/email omitted).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Signature {
    pub date: Option<String>,
}

impl CommitDetails {
    /// Returns the committer date, falling back to the author date.
    ///
    /// Empty strings are treated as missing.
    #[must_use]
    pub fn date(&self) -> Option<&str> {
        signature_date(self.committer.as_ref()).or_else(|| signature_date(self.author.as_ref()))
    }
}

fn signature_date(signature: Option<&Signature>) -> Option<&str> {
    signature
        .and_then(|s| s.date.as_deref())
        .filter(|date| !date.is_empty())
}
