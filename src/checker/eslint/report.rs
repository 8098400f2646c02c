//! ESLint JSON report parsing and correlation with edited lines.

use crate::error::{GuardError, Result};
use crate::files::{EditedFile, FileManager};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Results for one linted file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileReport {
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(default)]
    pub messages: Vec<LintMessage>,
}

/// A single reported problem.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LintMessage {
    /// Absent for messages not tied to a line.
    #[serde(default)]
    pub line: Option<usize>,
    #[serde(default)]
    pub message: String,
}

/// Parse the report of a single-file run.
///
/// Only the first entry matters; an empty array, or a first entry that is
/// null or an empty object, means nothing was reported.
///
/// # Returns
///
/// * `Ok(Some(FileReport))` - The first entry
/// * `Ok(None)` - No output or no entry
/// * `Err(GuardError::InternalError)` - Output is not a report array
pub fn parse_report(stdout: &str) -> Result<Option<FileReport>> {
    let stdout = stdout.trim();
    if stdout.is_empty() {
        return Ok(None);
    }

    let entries: Vec<Value> = serde_json::from_str(stdout).map_err(|e| {
        GuardError::InternalError(format!("failed to parse ESLint JSON report: {}", e))
    })?;

    let Some(first) = entries.into_iter().next() else {
        return Ok(None);
    };

    match &first {
        Value::Null => return Ok(None),
        Value::Object(map) if map.is_empty() => return Ok(None),
        _ => {}
    }

    serde_json::from_value(first)
        .map(Some)
        .map_err(|e| GuardError::InternalError(format!("unexpected ESLint report entry: {}", e)))
}

/// Keep messages on edited lines, formatted as `<message> in <file> on line <n>`.
///
/// The reported path is made relative to `repo_root` before it is looked up
/// in `files`. A path missing from `files` is an internal error.
pub fn correlate(
    report: &FileReport,
    files: &[&EditedFile],
    repo_root: &Path,
) -> Result<Vec<String>> {
    let name = relativize(&report.file_path, repo_root);
    let file = FileManager::find_file_by_name(files, &name)?;

    Ok(report
        .messages
        .iter()
        .filter_map(|msg| {
            let line = msg.line?;
            file.is_edited(line)
                .then(|| format!("{} in {} on line {}", msg.message, file.name(), line))
        })
        .collect())
}

/// Repository-relative form of a reported path, with `/` separators.
///
/// The root is also tried in canonical form, since tools may report resolved
/// paths (e.g. `/private/var` for `/var` on macOS).
pub fn relativize(file_path: &str, repo_root: &Path) -> String {
    let path = Path::new(file_path);
    if !path.is_absolute() {
        return file_path.replace('\\', "/");
    }

    if let Ok(rel) = path.strip_prefix(repo_root) {
        return rel.to_string_lossy().replace('\\', "/");
    }

    if let Ok(canonical) = repo_root.canonicalize()
        && let Ok(rel) = path.strip_prefix(&canonical)
    {
        return rel.to_string_lossy().replace('\\', "/");
    }

    file_path.replace('\\', "/")
}
