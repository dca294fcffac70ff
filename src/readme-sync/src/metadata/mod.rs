//! Per-repository metadata lookups.
//!
//! Fetchers never fail: every transport or parse problem is folded into
//! [`Lookup::Unavailable`] so one broken repository cannot abort the batch.

mod activity;
mod stars;

pub use activity::{last_activity, parse_timestamp, PREFERRED_BRANCH};
pub use stars::fetch_stars;

use crate::github::FetchError;

/// Outcome of fetching metadata for one repository.
#[derive(Debug)]
pub enum Lookup<T> {
    /// Metadata was fetched.
    Found(T),

    /// No metadata could be obtained; the repository is skipped.
    Unavailable(FetchError),
}

impl<T> Lookup<T> {
    /// Returns the found value, if any.
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Unavailable(_) => None,
        }
    }

    /// Returns true if metadata was fetched.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

impl<T> From<Result<T, FetchError>> for Lookup<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Lookup::Found(value),
            Err(e) => Lookup::Unavailable(e),
        }
    }
}
