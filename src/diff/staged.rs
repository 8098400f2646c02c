//! Diff source for the changes staged for commit.

use crate::error::Result;
use crate::git::run_git_raw;
use std::path::Path;

use super::parser::{DiffParser, ParsedDiff};

/// Parse the changes currently staged in the index.
///
/// Runs `git diff -U0 --diff-filter=ACMR --cached`, which limits the diff to
/// added, copied, modified, and renamed files with no context lines.
/// Prefixes and external drivers are pinned so `diff.noprefix`,
/// `diff.mnemonicPrefix` and `diff.external` cannot change the `+++ b/` lines.
///
/// # Returns
///
/// * `Ok(ParsedDiff)` - Edited files with their added lines
/// * `Err(GuardError::GitError)` - Git command failed
pub fn staged_changes<P: AsRef<Path>>(cwd: P) -> Result<ParsedDiff> {
    let output = run_git_raw(
        &cwd,
        &[
            "diff",
            "-U0",
            "--diff-filter=ACMR",
            "--cached",
            "--no-color",
            "--no-ext-diff",
            "--src-prefix=a/",
            "--dst-prefix=b/",
        ],
    )?;
    let diff = String::from_utf8_lossy(&output);

    Ok(DiffParser::new().parse_with_diagnostics(&diff))
}
