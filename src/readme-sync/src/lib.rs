#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod document;
pub mod format;
pub mod github;
pub mod metadata;
pub mod patch;
pub mod repository;
pub mod runner;
pub mod scanner;
pub mod summary;

pub use config::{token_from_env, validate_api_url, ConfigError, UpdateMode, TOKEN_ENV_VARS};
pub use document::Document;
pub use format::{classify_status, days_since, format_stars, maintenance_label, ActivityStatus};
pub use github::{
    CommitDetails, CommitInfo, FetchError, GitHubClient, RepositoryInfo, RepositorySource,
    Signature,
};
pub use metadata::{fetch_stars, last_activity, parse_timestamp, Lookup, PREFERRED_BRANCH};
pub use patch::{
    patch_window, AnnotationPatcher, MaintenancePatcher, PatchOutcome, SearchWindow, StarsPatcher,
};
pub use repository::{Occurrence, RepoRef};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use scanner::{scan_occurrences, unique_repositories};
pub use summary::RunSummary;
