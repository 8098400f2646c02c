//! Helper functions for diff parsing.

use regex::Regex;
use std::sync::LazyLock;

/// Marker introducing the post-change path of each file.
pub(super) const NEW_FILE_MARKER: &str = "+++ b/";

/// Prefix of a hunk header line.
pub(super) const HUNK_MARKER: &str = "@@";

static NEW_START_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+([0-9]+)(,[0-9]+)? @@").expect("Invalid hunk header regex"));

/// Extract the new-file start line from a hunk header.
///
/// Matches `+<start>[,<count>] @@`; the count is ignored.
/// Returns `None` when the header carries no parsable start.
pub(super) fn parse_new_start(header: &str) -> Option<usize> {
    NEW_START_REGEX
        .captures(header)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Split a diff into per-file segments, one per line starting with `+++ b/`.
///
/// Each returned segment starts right after the marker, so its first line is
/// the path. Text before the first marker is dropped.
pub(super) fn split_file_segments(diff: &str) -> Vec<&str> {
    let starts: Vec<usize> = diff
        .match_indices(NEW_FILE_MARKER)
        .map(|(idx, _)| idx)
        .filter(|&idx| idx == 0 || diff.as_bytes()[idx - 1] == b'\n')
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(diff.len());
            &diff[start + NEW_FILE_MARKER.len()..end]
        })
        .collect()
}

/// Normalize a file path to use forward slashes.
///
/// This ensures consistent path format for glob matching,
/// regardless of the platform where the diff was generated.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
