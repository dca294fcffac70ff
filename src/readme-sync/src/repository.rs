//! Repository references found in a README.

use serde::Serialize;
use std::fmt;

/// A GitHub repository referenced by a README link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RepoRef {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl RepoRef {
    /// Creates a new repository reference.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Full repository name in "owner/name" format.
    ///
    /// This is the identity key used for deduplication.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A single link to a repository on a specific README line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Zero-based index of the line holding the link.
    pub line_index: usize,

    /// Referenced repository.
    pub repo: RepoRef,
}
