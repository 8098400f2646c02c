//! A single file touched by the diff under inspection.

use indexmap::IndexMap;
use std::path::Path;

/// A repository-relative path plus the lines the diff added to it.
///
/// Line numbers refer to the post-change version of the file. Only lines the
/// diff added are present; context and removed lines never are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditedFile {
    name: String,
    edited_lines: IndexMap<usize, String>,
}

impl EditedFile {
    /// Create a file with no edited lines yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            edited_lines: IndexMap::new(),
        }
    }

    /// Repository-relative path (forward slashes).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record an added line. Re-registering a number replaces its text but
    /// keeps its original position.
    pub fn register_edited_line(&mut self, line_number: usize, content: impl Into<String>) {
        self.edited_lines.insert(line_number, content.into());
    }

    /// Added lines keyed by 1-based line number, in registration order.
    pub fn edited_lines(&self) -> &IndexMap<usize, String> {
        &self.edited_lines
    }

    /// Whether `line_number` was added by the diff.
    pub fn is_edited(&self, line_number: usize) -> bool {
        self.edited_lines.contains_key(&line_number)
    }

    /// All added text concatenated in registration order, without separators.
    pub fn added_text(&self) -> String {
        self.edited_lines.values().map(String::as_str).collect()
    }

    /// File extension without the leading dot, compared case-sensitively by callers.
    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.name).extension().and_then(|ext| ext.to_str())
    }
}
