//! Star count annotations.

use super::{AnnotationPatcher, SearchWindow};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `**Stars**: 1.2k ⭐`
static STAR_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\*\*Stars\*\*:\s*)([0-9]+(?:\.[0-9])?[kKmM]?)(\s*⭐)").unwrap()
});

/// `Official repository (1.2k⭐)`
static OFFICIAL_REPO_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(Official repository\s*\()(?:[0-9]+(?:\.[0-9])?[kKmM]?)(⭐\))").unwrap()
});

/// Rewrites `**Stars**:` lines and `Official repository (…⭐)` fragments.
///
/// Searches two lines above a link through five lines below it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StarsPatcher;

impl AnnotationPatcher for StarsPatcher {
    fn window(&self) -> SearchWindow {
        SearchWindow {
            before: 2,
            after: 6,
        }
    }

    fn rewrite(&self, line: &str, text: &str) -> Option<String> {
        if STAR_LINE_REGEX.is_match(line) {
            let rewritten = STAR_LINE_REGEX.replace_all(line, |caps: &Captures| {
                format!("{}{}{}", &caps[1], text, &caps[3])
            });
            return Some(rewritten.into_owned());
        }

        if OFFICIAL_REPO_REGEX.is_match(line) {
            let rewritten = OFFICIAL_REPO_REGEX.replace_all(line, |caps: &Captures| {
                format!("{}{}{}", &caps[1], text, &caps[2])
            });
            return Some(rewritten.into_owned());
        }

        None
    }
}
