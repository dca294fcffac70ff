//! Annotation line patching.
//!
//! An [`AnnotationPatcher`] knows which lines around a link may carry an
//! annotation and how to rewrite them. The windowed search itself lives in
//! [`patch_window`], so the proximity heuristic can be swapped for a
//! structured document model without touching fetching or formatting.

mod maintenance;
mod stars;

pub use maintenance::MaintenancePatcher;
pub use stars::StarsPatcher;

use std::collections::BTreeSet;
use std::ops::Range;

/// Lines searched around a link: `before` lines above it, the link line, and
/// the lines below it up to (excluding) `after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    /// Lines searched above the link line.
    pub before: usize,
    /// Exclusive end offset below the link line.
    pub after: usize,
}

impl SearchWindow {
    /// Returns the line range for a link on `line_index`, clamped to `line_count`.
    #[must_use]
    pub fn range(&self, line_index: usize, line_count: usize) -> Range<usize> {
        let start = line_index.saturating_sub(self.before);
        let end = line_index.saturating_add(self.after).min(line_count);
        start..end.max(start)
    }
}

/// Rewrites one kind of annotation line.
pub trait AnnotationPatcher {
    /// Lines searched around each link.
    fn window(&self) -> SearchWindow;

    /// Substitutes `text` into the annotation on `line`.
    ///
    /// Returns `None` if the line carries no annotation. The returned line
    /// may equal the input when the annotation already holds `text`.
    fn rewrite(&self, line: &str, text: &str) -> Option<String>;
}

/// Result of patching the window around one link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The annotation on this line was rewritten.
    Changed(usize),
    /// The annotation on this line already held the text.
    Unchanged(usize),
    /// No unclaimed annotation in the window.
    NoMatch,
}

impl PatchOutcome {
    /// Returns true if a line was rewritten.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        matches!(self, PatchOutcome::Changed(_))
    }
}

/// Patches the first unclaimed annotation near `line_index`.
///
/// The first annotation line in the window that is not in `claimed` is
/// claimed for this link, whether or not its text changes, and the search
/// stops there.
pub fn patch_window<P: AnnotationPatcher + ?Sized>(
    patcher: &P,
    lines: &mut [String],
    line_index: usize,
    text: &str,
    claimed: &mut BTreeSet<usize>,
) -> PatchOutcome {
    for j in patcher.window().range(line_index, lines.len()) {
        if claimed.contains(&j) {
            continue;
        }

        if let Some(new_line) = patcher.rewrite(&lines[j], text) {
            claimed.insert(j);
            if new_line == lines[j] {
                return PatchOutcome::Unchanged(j);
            }
            lines[j] = new_line;
            return PatchOutcome::Changed(j);
        }
    }

    PatchOutcome::NoMatch
}
