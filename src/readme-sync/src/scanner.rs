//! Link scanning.
//!
//! Finds GitHub repository links in README lines and computes the set of
//! distinct repositories that need metadata.

use crate::repository::{Occurrence, RepoRef};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Matches `https://github.com/<owner>/<repo>` followed by a word boundary, `/` or `)`.
static GITHUB_REPO_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://github\.com/([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)(?:\b|/|\))").unwrap()
});

/// Scans lines for repository links.
///
/// Occurrences are returned in line order, then in document order within
/// a line. A line may yield any number of occurrences, and the same
/// repository may appear on many lines.
pub fn scan_occurrences<S: AsRef<str>>(lines: &[S]) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();

    for (line_index, line) in lines.iter().enumerate() {
        for captures in GITHUB_REPO_URL_REGEX.captures_iter(line.as_ref()) {
            occurrences.push(Occurrence {
                line_index,
                repo: RepoRef::new(&captures[1], &captures[2]),
            });
        }
    }

    occurrences
}

/// Deduplicates occurrences by full repository name, keeping first-seen order.
pub fn unique_repositories(occurrences: &[Occurrence]) -> Vec<RepoRef> {
    let mut seen = HashSet::new();
    let mut repositories = Vec::new();

    for occurrence in occurrences {
        if seen.insert(occurrence.repo.full_name()) {
            repositories.push(occurrence.repo.clone());
        }
    }

    repositories
}
