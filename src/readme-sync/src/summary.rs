//! Run summary.

use crate::config::UpdateMode;
use serde::Serialize;

/// Summary of a complete run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Which annotations were updated.
    pub mode: UpdateMode,

    /// Whether this was a dry run.
    pub dry_run: bool,

    /// Number of repository links found.
    pub occurrences: usize,

    /// Number of distinct repositories linked.
    pub repositories: usize,

    /// Number of repositories whose metadata was fetched.
    pub repositories_resolved: usize,

    /// Number of repositories skipped because no metadata was available.
    pub repositories_unavailable: usize,

    /// Number of README lines changed.
    pub lines_updated: usize,

    /// Number of annotations that already held the current value.
    pub lines_current: usize,

    /// Whether the README was rewritten.
    pub written: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(mode: UpdateMode, dry_run: bool) -> Self {
        Self {
            mode,
            dry_run,
            occurrences: 0,
            repositories: 0,
            repositories_resolved: 0,
            repositories_unavailable: 0,
            lines_updated: 0,
            lines_current: 0,
            written: false,
        }
    }

    /// Counts one repository lookup.
    pub fn record_lookup(&mut self, found: bool) {
        if found {
            self.repositories_resolved += 1;
        } else {
            self.repositories_unavailable += 1;
        }
    }

    /// Returns true if any README line changed.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.lines_updated > 0
    }

    /// One-line outcome message for the console.
    ///
    /// Dry runs with changes report what would have been written.
    #[must_use]
    pub fn outcome_message(&self) -> &'static str {
        match (self.mode, self.has_changes(), self.dry_run) {
            (UpdateMode::Stars, true, false) => "README.md star counts updated.",
            (UpdateMode::Stars, true, true) => "README.md star counts would be updated (dry run).",
            (UpdateMode::Stars, false, _) => {
                "No star counts updated. README already up to date or no stars found."
            }
            (UpdateMode::Maintenance, true, false) => "README.md maintenance statuses updated.",
            (UpdateMode::Maintenance, true, true) => {
                "README.md maintenance statuses would be updated (dry run)."
            }
            (UpdateMode::Maintenance, false, _) => {
                "No maintenance lines updated. README already up to date or no matches."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_record_lookups() {
        let mut summary = RunSummary::new(UpdateMode::Stars, false);

        summary.record_lookup(true);
        summary.record_lookup(false);
        summary.record_lookup(true);

        assert_eq!(summary.repositories_resolved, 2);
        assert_eq!(summary.repositories_unavailable, 1);
        assert!(!summary.has_changes());
    }

    #[test]
    fn outcome_message_reflects_changes() {
        let mut summary = RunSummary::new(UpdateMode::Maintenance, false);
        assert_eq!(
            summary.outcome_message(),
            "No maintenance lines updated. README already up to date or no matches."
        );

        summary.lines_updated = 2;
        assert_eq!(
            summary.outcome_message(),
            "README.md maintenance statuses updated."
        );
    }

    #[test]
    fn dry_run_outcome_says_nothing_was_written() {
        let mut summary = RunSummary::new(UpdateMode::Stars, true);
        assert_eq!(
            summary.outcome_message(),
            "No star counts updated. README already up to date or no stars found."
        );

        summary.lines_updated = 1;
        assert_eq!(
            summary.outcome_message(),
            "README.md star counts would be updated (dry run)."
        );

        summary.mode = UpdateMode::Maintenance;
        assert_eq!(
            summary.outcome_message(),
            "README.md maintenance statuses would be updated (dry run)."
        );
    }
}
