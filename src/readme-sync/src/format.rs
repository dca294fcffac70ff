//! Human-readable labels for star counts and maintenance status.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use std::fmt;

/// Formats a star count, e.g. `42`, `1.5k`, `3m`.
///
/// Counts of a thousand or more get one decimal and a `k`/`m` suffix; a
/// trailing `.0` is dropped (`1000` becomes `1k`, not `1.0k`).
#[must_use]
pub fn format_stars(n: u64) -> String {
    let formatted = if n >= 1_000_000 {
        format!("{:.1}m", n as f64 / 1_000_000.0)
    } else if n >= 1000 {
        format!("{:.1}k", n as f64 / 1000.0)
    } else {
        n.to_string()
    };

    if let Some(whole) = formatted.strip_suffix(".0k") {
        format!("{whole}k")
    } else if let Some(whole) = formatted.strip_suffix(".0m") {
        format!("{whole}m")
    } else {
        formatted
    }
}

/// How recently a repository has seen activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    /// Active within the last 30 days.
    VeryActive,
    /// Active within the last 90 days.
    Active,
    /// Active within the last 180 days.
    OccasionallyUpdated,
    /// Active within the last year.
    Stale,
    /// No activity for more than a year.
    Inactive,
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityStatus::VeryActive => "Very active",
            ActivityStatus::Active => "Active",
            ActivityStatus::OccasionallyUpdated => "Occasionally updated",
            ActivityStatus::Stale => "Stale",
            ActivityStatus::Inactive => "Inactive",
        };
        f.write_str(label)
    }
}

/// Classifies a repository by the number of days since its last activity.
#[must_use]
pub fn classify_status(days: u64) -> ActivityStatus {
    match days {
        0..=30 => ActivityStatus::VeryActive,
        31..=90 => ActivityStatus::Active,
        91..=180 => ActivityStatus::OccasionallyUpdated,
        181..=365 => ActivityStatus::Stale,
        _ => ActivityStatus::Inactive,
    }
}

/// Whole days elapsed between `at` and `now`; timestamps in the future count as zero.
#[must_use]
pub fn days_since(now: DateTime<Utc>, at: DateTime<FixedOffset>) -> u64 {
    let days = now.signed_duration_since(at.with_timezone(&Utc)).num_days();
    u64::try_from(days).unwrap_or(0)
}

/// Builds the maintenance annotation text, e.g. `Active (last commit 2024-03-01)`.
///
/// The date is the calendar date of `at` in its own offset.
#[must_use]
pub fn maintenance_label(now: DateTime<Utc>, at: DateTime<FixedOffset>) -> String {
    let status = classify_status(days_since(now, at));
    format!("{status} (last commit {})", at.date_naive())
}
