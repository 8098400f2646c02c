//! Diff parsing for commit-guard.
//!
//! Turns the output of `git diff -U0 --diff-filter=ACMR --cached` into the
//! edited-line universe every checker works against:
//! - One [`EditedFile`](crate::files::EditedFile) per `+++ b/<path>` segment
//! - Only `+` lines are registered, numbered from the hunk's new-file start
//! - Malformed hunk headers fall back to line zero and are reported as diagnostics
//!
//! The parser never fails; well-formed input is the caller's precondition.

mod helpers;
mod parser;
mod staged;


// Re-export public API
pub use parser::{DiffParser, MalformedHunk, ParseDiagnostics, ParsedDiff};
pub use staged::staged_changes;
