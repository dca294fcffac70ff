//! In-memory GitHub stand-in shared by the integration tests.

#![allow(dead_code)]

use readme_sync::{
    CommitDetails, CommitInfo, FetchError, RepoRef, RepositoryInfo, RepositorySource, Signature,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Serves canned repository and commit payloads, recording every request.
#[derive(Default)]
pub struct FakeGitHub {
    repositories: HashMap<String, RepositoryInfo>,
    commits: HashMap<(String, String), CommitInfo>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stars(mut self, full_name: &str, stars: u64) -> Self {
        self.repositories.insert(
            full_name.to_string(),
            RepositoryInfo {
                stargazers_count: stars,
                default_branch: Some("main".to_string()),
                pushed_at: None,
            },
        );
        self
    }

    pub fn with_repository(
        mut self,
        full_name: &str,
        default_branch: Option<&str>,
        pushed_at: Option<&str>,
    ) -> Self {
        self.repositories.insert(
            full_name.to_string(),
            RepositoryInfo {
                stargazers_count: 0,
                default_branch: default_branch.map(str::to_string),
                pushed_at: pushed_at.map(str::to_string),
            },
        );
        self
    }

    pub fn with_commit(mut self, full_name: &str, reference: &str, date: &str) -> Self {
        self.commits.insert(
            (full_name.to_string(), reference.to_string()),
            CommitInfo {
                commit: Some(CommitDetails {
                    committer: Some(Signature {
                        date: Some(date.to_string()),
                    }),
                    author: None,
                }),
            },
        );
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl RepositorySource for FakeGitHub {
    async fn repository(&self, repo: &RepoRef) -> Result<RepositoryInfo, FetchError> {
        let route = format!("/repos/{}", repo.full_name());
        self.requests.borrow_mut().push(route.clone());
        self.repositories
            .get(&repo.full_name())
            .cloned()
            .ok_or(FetchError::NotFound { route })
    }

    async fn commit(&self, repo: &RepoRef, reference: &str) -> Result<CommitInfo, FetchError> {
        let route = format!("/repos/{}/commits/{}", repo.full_name(), reference);
        self.requests.borrow_mut().push(route.clone());
        self.commits
            .get(&(repo.full_name(), reference.to_string()))
            .cloned()
            .ok_or(FetchError::NotFound { route })
    }
}

/// Writes `content` to a README inside a fresh temporary directory.
pub fn readme(content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("README.md");
    std::fs::write(&path, content).unwrap();
    (temp, path)
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(path).unwrap()
}
