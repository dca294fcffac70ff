//! Orchestrates a README update run.
//!
//! A run scans the README for repository links, fetches metadata for each
//! distinct repository one at a time, patches nearby annotations and
//! rewrites the file only if something changed.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::config::UpdateMode;
use crate::document::Document;
use crate::format::{format_stars, maintenance_label};
use crate::github::{GitHubClient, RepositorySource};
use crate::metadata::{fetch_stars, last_activity, Lookup};
use crate::patch::{AnnotationPatcher, MaintenancePatcher, PatchOutcome, StarsPatcher};
use crate::repository::RepoRef;
use crate::scanner::{scan_occurrences, unique_repositories};
use crate::summary::RunSummary;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::{debug, info, info_span, warn, Instrument};
use url::Url;

/// Runs the update pipeline against a [`RepositorySource`].
pub struct Runner<S = GitHubClient> {
    config: RunnerConfig,
    source: S,
}

impl Runner<GitHubClient> {
    /// Builds a runner backed by the GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Octocrab`] if the API client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let source = GitHubClient::new(config.token(), config.api_url().map(Url::as_str))?;
        Ok(Self { config, source })
    }
}

impl<S: RepositorySource> Runner<S> {
    /// Builds a runner backed by any metadata source.
    pub fn with_source(config: RunnerConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Returns the metadata source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Executes one run, measuring ages against the current time.
    pub async fn run(&self, mode: UpdateMode) -> Result<RunSummary, RunnerError> {
        self.run_at(mode, Utc::now()).await
    }

    /// Executes one run, measuring ages against `now`.
    ///
    /// Repositories whose metadata cannot be fetched are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the README cannot be read or written.
    pub async fn run_at(
        &self,
        mode: UpdateMode,
        now: DateTime<Utc>,
    ) -> Result<RunSummary, RunnerError> {
        let path = self.config.readme_path();
        let mut summary = RunSummary::new(mode, self.config.dry_run());

        info!(path = %path.display(), %mode, "Loading README");
        let mut document = Document::load(path).map_err(|source| RunnerError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let occurrences = scan_occurrences(document.lines());
        let repositories = unique_repositories(&occurrences);
        summary.occurrences = occurrences.len();
        summary.repositories = repositories.len();
        info!(
            occurrences = occurrences.len(),
            repositories = repositories.len(),
            "Found repository links"
        );

        let labels = match mode {
            UpdateMode::Stars => self.star_labels(&repositories, &mut summary).await,
            UpdateMode::Maintenance => {
                self.maintenance_labels(&repositories, now, &mut summary)
                    .await
            }
        };

        let patcher: &dyn AnnotationPatcher = match mode {
            UpdateMode::Stars => &StarsPatcher,
            UpdateMode::Maintenance => &MaintenancePatcher,
        };

        for occurrence in &occurrences {
            let Some(text) = labels.get(&occurrence.repo.full_name()) else {
                continue;
            };

            match document.apply(patcher, occurrence.line_index, text) {
                PatchOutcome::Changed(index) => {
                    debug!(
                        repo = %occurrence.repo,
                        line = index + 1,
                        text = %text,
                        "Updated annotation"
                    );
                    summary.lines_updated += 1;
                }
                PatchOutcome::Unchanged(_) => summary.lines_current += 1,
                PatchOutcome::NoMatch => {}
            }
        }

        if !document.is_modified() {
            info!("No annotations changed");
            return Ok(summary);
        }

        if self.config.dry_run() {
            print_dry_run_preview(&document);
            return Ok(summary);
        }

        document.write(path).map_err(|source| RunnerError::Write {
            path: path.display().to_string(),
            source,
        })?;
        summary.written = true;
        info!(
            path = %path.display(),
            lines = summary.lines_updated,
            "README rewritten"
        );

        Ok(summary)
    }

    /// Fetches star counts, keyed by full repository name.
    async fn star_labels(
        &self,
        repositories: &[RepoRef],
        summary: &mut RunSummary,
    ) -> HashMap<String, String> {
        let mut labels = HashMap::new();

        for repo in repositories {
            let span = info_span!("stars", repo = %repo);
            let lookup = fetch_stars(&self.source, repo).instrument(span).await;
            summary.record_lookup(lookup.is_found());

            match lookup {
                Lookup::Found(count) => {
                    let text = format_stars(count);
                    debug!(repo = %repo, count, text = %text, "Fetched star count");
                    labels.insert(repo.full_name(), text);
                }
                Lookup::Unavailable(e) => {
                    warn!(repo = %repo, error = %e, "Failed to fetch star count");
                }
            }
        }

        labels
    }

    /// Fetches maintenance labels, keyed by full repository name.
    async fn maintenance_labels(
        &self,
        repositories: &[RepoRef],
        now: DateTime<Utc>,
        summary: &mut RunSummary,
    ) -> HashMap<String, String> {
        let mut labels = HashMap::new();

        for repo in repositories {
            let span = info_span!("maintenance", repo = %repo);
            let lookup = last_activity(&self.source, repo).instrument(span).await;
            summary.record_lookup(lookup.is_found());

            match lookup {
                Lookup::Found(at) => {
                    let text = maintenance_label(now, at);
                    debug!(repo = %repo, last_activity = %at, text = %text, "Fetched last activity");
                    labels.insert(repo.full_name(), text);
                }
                Lookup::Unavailable(e) => {
                    warn!(repo = %repo, error = %e, "Failed to fetch last activity");
                }
            }
        }

        labels
    }
}

fn print_dry_run_preview(document: &Document) {
    println!("\n[DRY RUN] README not written. Lines that would change:\n");
    for &index in document.changed_lines() {
        println!("  {:>5} | {}", index + 1, document.lines()[index]);
    }
    println!();
}
