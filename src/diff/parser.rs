//! Core diff parsing logic.

use crate::files::{EditedFile, Files};

use super::helpers::{HUNK_MARKER, normalize_path, parse_new_start, split_file_segments};

/// A hunk whose header carried no new-file start line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedHunk {
    /// File the hunk belongs to.
    pub file: String,
    /// The header line as found in the diff.
    pub header: String,
}

/// Observations made while parsing that did not stop the parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseDiagnostics {
    /// Hunks numbered from zero because their header was unparsable.
    pub malformed_hunks: Vec<MalformedHunk>,
}

impl ParseDiagnostics {
    pub fn malformed_hunk_count(&self) -> usize {
        self.malformed_hunks.len()
    }

    pub fn is_clean(&self) -> bool {
        self.malformed_hunks.is_empty()
    }
}

/// Result of parsing a diff: the edited files plus diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ParsedDiff {
    pub files: Files,
    pub diagnostics: ParseDiagnostics,
}

/// Parser for zero-context unified diffs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffParser;

impl DiffParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse diff text into edited files, in file-encounter order.
    pub fn parse(&self, diff: &str) -> Files {
        self.parse_with_diagnostics(diff).files
    }

    /// Parse diff text, also reporting hunks whose header could not be read.
    ///
    /// # Arguments
    ///
    /// * `diff` - Output of `git diff -U0`, restricted to added/copied/modified/renamed files
    pub fn parse_with_diagnostics(&self, diff: &str) -> ParsedDiff {
        let mut parsed = ParsedDiff::default();

        for segment in split_file_segments(diff) {
            let (path_line, body) = segment.split_once('\n').unwrap_or((segment, ""));
            let mut file = EditedFile::new(normalize_path(path_line.trim()));

            let mut start = 0;
            let mut index = 0;
            let mut in_hunk = false;

            // Split on '\n' only: a CRLF file keeps its '\r' in the added text.
            for line in body.split('\n') {
                if line.starts_with(HUNK_MARKER) {
                    in_hunk = true;
                    index = 0;
                    start = match parse_new_start(line) {
                        Some(start) => start,
                        None => {
                            parsed.diagnostics.malformed_hunks.push(MalformedHunk {
                                file: file.name().to_string(),
                                header: line.to_string(),
                            });
                            0
                        }
                    };
                    continue;
                }

                if !in_hunk {
                    continue;
                }

                if let Some(content) = line.strip_prefix('+') {
                    file.register_edited_line(start + index, content);
                    index += 1;
                }
            }

            parsed.files.push(file);
        }

        parsed
    }
}
