//! README line buffer and rewriting.

use crate::patch::{patch_window, AnnotationPatcher, PatchOutcome};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// A README split into lines.
///
/// Patching only ever replaces line contents, so the line count is fixed for
/// the lifetime of the document. Each annotation line is claimed by at most
/// one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    trailing_newline: bool,
    claimed: BTreeSet<usize>,
    changed: BTreeSet<usize>,
}

impl Document {
    /// Splits `content` into lines.
    pub fn parse(content: &str) -> Self {
        Self {
            lines: content.lines().map(str::to_string).collect(),
            trailing_newline: content.ends_with('\n'),
            claimed: BTreeSet::new(),
            changed: BTreeSet::new(),
        }
    }

    /// Reads and parses the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = content.len(), "Loaded document");
        Ok(Self::parse(&content))
    }

    /// Returns the current lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the indices of lines whose content changed.
    pub fn changed_lines(&self) -> &BTreeSet<usize> {
        &self.changed
    }

    /// Returns true if any line content changed.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        !self.changed.is_empty()
    }

    /// Patches the first unclaimed annotation near the link on `line_index`.
    pub fn apply<P: AnnotationPatcher + ?Sized>(
        &mut self,
        patcher: &P,
        line_index: usize,
        text: &str,
    ) -> PatchOutcome {
        let outcome = patch_window(patcher, &mut self.lines, line_index, text, &mut self.claimed);
        if let PatchOutcome::Changed(index) = outcome {
            self.changed.insert(index);
        }
        outcome
    }

    /// Joins the lines back together, ending with a newline iff the source did.
    #[must_use]
    pub fn render(&self) -> String {
        let mut content = self.lines.join("\n");
        if self.trailing_newline {
            content.push('\n');
        }
        content
    }

    /// Overwrites the file at `path` with the rendered document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.render())
    }
}
