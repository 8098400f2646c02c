//! Collaborators of the ESLint checker: staged content lookup and linter invocation.

use crate::checker::process::{self, ToolOutput};
use crate::error::{GuardError, Result};
use crate::git;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Access to file content as staged for commit.
pub trait StagedContent {
    fn staged_content(&self, path: &str) -> Result<Vec<u8>>;
}

/// Reads staged content from the git index of a repository.
#[derive(Debug, Clone)]
pub struct GitIndex {
    repo_root: PathBuf,
}

impl GitIndex {
    pub fn new(repo_root: PathBuf) -> Self {
        Self { repo_root }
    }
}

impl StagedContent for GitIndex {
    fn staged_content(&self, path: &str) -> Result<Vec<u8>> {
        git::show_staged(&self.repo_root, path)
    }
}

/// One linter run over a single file's staged content.
#[derive(Debug, Clone, Copy)]
pub struct LintRequest<'a> {
    pub content: &'a [u8],
    /// Staged copy of the linter configuration.
    pub config_path: &'a Path,
    /// Repository-relative name, used by the linter for reporting only.
    pub file_name: &'a str,
}

/// A synchronous linter call returning its exit code and JSON stdout.
pub trait LintInvoker {
    fn lint(&self, request: &LintRequest<'_>) -> Result<ToolOutput>;

    /// Short description used in failure messages.
    fn describe(&self) -> String;
}

/// Runs the `eslint` executable with content on stdin.
#[derive(Debug, Clone)]
pub struct EslintCommand {
    program: Vec<String>,
    cwd: PathBuf,
    timeout: Duration,
}

impl EslintCommand {
    /// `program` is the executable followed by any fixed leading arguments.
    pub fn new(program: Vec<String>, cwd: PathBuf, timeout: Duration) -> Result<Self> {
        if program.is_empty() {
            return Err(GuardError::ConfigError(
                "ESLint executable must not be empty".to_string(),
            ));
        }
        Ok(Self {
            program,
            cwd,
            timeout,
        })
    }

    /// Arguments after the executable for `request`.
    pub fn arguments(&self, request: &LintRequest<'_>) -> Vec<String> {
        let mut args: Vec<String> = self.program[1..].to_vec();
        args.extend([
            "--no-eslintrc".to_string(),
            "--format=json".to_string(),
            "--config".to_string(),
            request.config_path.to_string_lossy().into_owned(),
            "--stdin".to_string(),
            format!("--stdin-filename={}", request.file_name),
        ]);
        args
    }
}

impl LintInvoker for EslintCommand {
    fn lint(&self, request: &LintRequest<'_>) -> Result<ToolOutput> {
        process::run_with_input(
            &self.program[0],
            &self.arguments(request),
            &self.cwd,
            request.content,
            self.timeout,
        )
    }

    fn describe(&self) -> String {
        self.program.join(" ")
    }
}
