//! Per-checker configuration.

use crate::config::CheckerOptions;
use crate::context::{DEFAULT_TOOL_TIMEOUT_SECS, RunContext, ToolDirectories, absolutize};
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Option key overriding the tool timeout of a single checker.
pub const TIMEOUT_OPTION: &str = "timeout_seconds";

/// Everything a checker needs besides the files it inspects.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckerSettings {
    /// Display name (the configuration key, first letter upper-cased).
    pub name: String,
    pub tool_dirs: ToolDirectories,
    pub script_path: PathBuf,
    /// Directory of the standards file; relative option paths resolve against it.
    pub config_dir: PathBuf,
    pub staging_dir: PathBuf,
    pub repo_root: PathBuf,
    pub timeout: Duration,
    /// Extension allow-list override.
    pub extensions: Option<Vec<String>>,
    pub options: CheckerOptions,
}

impl CheckerSettings {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            tool_dirs: ToolDirectories::default(),
            script_path: PathBuf::new(),
            config_dir: PathBuf::new(),
            staging_dir: PathBuf::new(),
            repo_root: PathBuf::new(),
            timeout: Duration::from_secs(DEFAULT_TOOL_TIMEOUT_SECS),
            extensions: None,
            options: CheckerOptions::new(),
        }
    }

    /// Settings carrying every shared location of `ctx`.
    pub fn from_context(ctx: &RunContext) -> Self {
        Self::new()
            .with_tool_dirs(ctx.tool_dirs.clone())
            .with_script_path(ctx.script_path.clone())
            .with_config_dir(ctx.config_dir.clone())
            .with_staging_dir(ctx.staging_dir.clone())
            .with_repo_root(ctx.repo_root.clone())
            .with_timeout(ctx.tool_timeout)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_tool_dirs(mut self, tool_dirs: ToolDirectories) -> Self {
        self.tool_dirs = tool_dirs;
        self
    }

    pub fn with_script_path(mut self, script_path: PathBuf) -> Self {
        self.script_path = script_path;
        self
    }

    pub fn with_config_dir(mut self, config_dir: PathBuf) -> Self {
        self.config_dir = config_dir;
        self
    }

    pub fn with_staging_dir(mut self, staging_dir: PathBuf) -> Self {
        self.staging_dir = staging_dir;
        self
    }

    pub fn with_repo_root(mut self, repo_root: PathBuf) -> Self {
        self.repo_root = repo_root;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_extensions(mut self, extensions: Option<Vec<String>>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_options(mut self, options: CheckerOptions) -> Self {
        self.options = options;
        self
    }

    /// Tool timeout, honoring a per-checker `timeout_seconds` option.
    ///
    /// Zero, negative, and non-integer values are a `ConfigError`.
    pub fn effective_timeout(&self) -> Result<Duration> {
        Ok(self
            .options
            .positive_u64(&self.name, TIMEOUT_OPTION)?
            .map(Duration::from_secs)
            .unwrap_or(self.timeout))
    }

    /// Resolve a path option against the standards file directory.
    pub fn resolve_config_path(&self, path: &str) -> PathBuf {
        absolutize(Path::new(path), &self.config_dir)
    }
}

impl Default for CheckerSettings {
    fn default() -> Self {
        Self::new()
    }
}
