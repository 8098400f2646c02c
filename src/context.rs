//! Run context resolution for commit-guard.
//!
//! A run needs a handful of locations besides the diff itself: where the
//! guard is installed (its `vendor/bin` and `node_modules/.bin` tool
//! directories live there), the repository root (external tools run there),
//! the directory holding the standards file (relative option paths resolve
//! against it), and the staging directory for config-file copies. This module
//! resolves them once, and the orchestrator hands them to every checker.

use crate::error::{GuardError, Result};
use crate::git;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the staging directory for config-file copies, under the script path.
pub const DEFAULT_STAGING_DIR: &str = "eslint-config-copies";

/// Default bound on a single external tool invocation.
pub const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 120;

/// Directories holding helper executables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolDirectories {
    /// `<script>/vendor/bin/`
    pub composer: PathBuf,
    /// `<script>/node_modules/.bin/`
    pub node: PathBuf,
}

impl ToolDirectories {
    /// Tool directories of an installation rooted at `script_path`.
    pub fn under(script_path: &Path) -> Self {
        Self {
            composer: script_path.join("vendor").join("bin"),
            node: script_path.join("node_modules").join(".bin"),
        }
    }
}

/// Resolved locations and limits for one run. All paths are absolute.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Installation directory of the guard.
    pub script_path: PathBuf,

    /// Helper executable directories derived from `script_path`.
    pub tool_dirs: ToolDirectories,

    /// Root of the repository being committed to.
    pub repo_root: PathBuf,

    /// Standards file in use.
    pub standards_path: PathBuf,

    /// Directory of the standards file.
    pub config_dir: PathBuf,

    /// Where checkers stage copies of their config files.
    pub staging_dir: PathBuf,

    /// Bound on each external tool invocation.
    pub tool_timeout: Duration,

    /// NDJSON event log, when enabled.
    pub events_log: Option<PathBuf>,
}

impl RunContext {
    /// Build a context from already-resolved locations, applying defaults for the rest.
    pub fn new(script_path: PathBuf, repo_root: PathBuf, standards_path: PathBuf) -> Self {
        let config_dir = standards_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            tool_dirs: ToolDirectories::under(&script_path),
            staging_dir: script_path.join(DEFAULT_STAGING_DIR),
            script_path,
            repo_root,
            standards_path,
            config_dir,
            tool_timeout: Duration::from_secs(DEFAULT_TOOL_TIMEOUT_SECS),
            events_log: None,
        }
    }

    /// Override the staging directory.
    pub fn with_staging_dir(mut self, staging_dir: PathBuf) -> Self {
        self.staging_dir = staging_dir;
        self
    }

    /// Override the tool timeout.
    pub fn with_tool_timeout(mut self, timeout: Duration) -> Self {
        self.tool_timeout = timeout;
        self
    }

    /// Enable the event log.
    pub fn with_events_log(mut self, path: Option<PathBuf>) -> Self {
        self.events_log = path;
        self
    }
}

/// Directory containing the running executable, used as the default script path.
pub fn default_script_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| {
        GuardError::UserError(format!("failed to locate the running executable: {}", e))
    })?;

    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        GuardError::UserError(format!(
            "executable path '{}' has no parent directory",
            exe.display()
        ))
    })
}

/// Repository root for `cwd`.
pub fn resolve_repo_root(cwd: &Path) -> Result<PathBuf> {
    git::get_repo_root(cwd)
}

/// Make `path` absolute against `base` when it is relative.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
