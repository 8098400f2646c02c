//! Git command runner for commit-guard.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git operations should go through this module.

use crate::error::{GuardError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Captured, trimmed output of a git command.
#[derive(Debug, Clone)]
struct GitOutput {
    /// Standard output from the command (trimmed).
    stdout: String,
    /// Standard error from the command (trimmed).
    stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

fn execute<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<Output> {
    Command::new("git")
        .current_dir(cwd.as_ref())
        .args(args)
        .output()
        .map_err(|e| {
            GuardError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })
}

fn failure(args: &[&str], output: &Output) -> GuardError {
    let git_output = GitOutput::from_output(output);
    let exit_code = output.status.code().unwrap_or(-1);
    let error_msg = if git_output.stderr.is_empty() {
        git_output.stdout
    } else {
        git_output.stderr
    };

    GuardError::GitError(format!(
        "git {} failed (exit code {}): {}",
        args.first().unwrap_or(&""),
        exit_code,
        error_msg
    ))
}

/// Run a git command and return its stdout bytes untouched.
///
/// Used where trailing whitespace is significant: diffs and file contents.
pub fn run_git_raw<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<Vec<u8>> {
    let output = execute(cwd, args)?;

    if output.status.success() {
        Ok(output.stdout)
    } else {
        Err(failure(args, &output))
    }
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(GuardError::UserError)` - If not inside a git repository
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .map_err(|e| {
            GuardError::UserError(format!("failed to execute git: {} (is git installed?)", e))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(PathBuf::from(&git_output.stdout))
    } else {
        Err(GuardError::UserError(
            "not inside a git repository. Run this command from within a git repository."
                .to_string(),
        ))
    }
}

/// Content of `path` as currently staged in the index (`git show :<path>`).
///
/// This is what the commit will contain, which may differ from the working tree.
pub fn show_staged<P: AsRef<Path>>(cwd: P, path: &str) -> Result<Vec<u8>> {
    let spec = format!(":{}", path);
    run_git_raw(cwd, &["show", &spec])
}
