//! Maintenance status annotations.

use super::{AnnotationPatcher, SearchWindow};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static MAINTENANCE_LINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\*\*Maintenance\*\*:\s*)(.*)").unwrap());

/// Rewrites everything after `**Maintenance**:` on a line.
///
/// Searches three lines above a link through nineteen lines below it.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaintenancePatcher;

impl AnnotationPatcher for MaintenancePatcher {
    fn window(&self) -> SearchWindow {
        SearchWindow {
            before: 3,
            after: 20,
        }
    }

    fn rewrite(&self, line: &str, text: &str) -> Option<String> {
        if !MAINTENANCE_LINE_REGEX.is_match(line) {
            return None;
        }

        let rewritten = MAINTENANCE_LINE_REGEX
            .replace_all(line, |caps: &Captures| format!("{}{}", &caps[1], text));
        Some(rewritten.into_owned())
    }
}
