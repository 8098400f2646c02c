//! Implementation of the `commit-guard check-staged` command.
//!
//! # Steps
//!
//! 1. Resolve the run context (script path, repository root, standards file)
//! 2. Load and validate the standards file
//! 3. Build every declared checker (configuration errors surface here)
//! 4. Read the diff: `git diff -U0 --diff-filter=ACMR --cached`, or `--diff-file`
//! 5. Parse it into edited files and group them by standard
//! 6. Run each standard's checkers in order and report violations
//! 7. Accept the commit if nothing was reported, reject it otherwise

mod report;
mod runner;


use report::Reporter;
use runner::check_diff;

use crate::checker::CheckerRegistry;
use crate::cli::CheckStagedArgs;
use crate::commands::Verdict;
use crate::config::{StandardsConfig, resolve_standards_path};
use crate::context::{RunContext, absolutize, default_script_path, resolve_repo_root};
use crate::diff::{DiffParser, ParsedDiff, staged_changes};
use crate::error::{GuardError, Result};
use crate::events::EventLog;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Execute the `commit-guard check-staged` command.
///
/// # Exit Codes
///
/// - 0: Commit accepted
/// - 1: Violations found, commit rejected
/// - 2: Configuration or usage error
/// - 3: External tool failure
/// - 4: Git failure
/// - 5: Internal error
pub fn cmd_check_staged(args: CheckStagedArgs) -> Result<Verdict> {
    let cwd = std::env::current_dir().map_err(|e| {
        GuardError::UserError(format!("failed to read the current directory: {}", e))
    })?;

    let ctx = resolve_context(&args, &cwd)?;
    let config = StandardsConfig::load(&ctx.standards_path)?;
    let checkers = CheckerRegistry::with_builtin().instantiate(&config, &ctx)?;
    let events = EventLog::new(ctx.events_log.clone());

    let parsed = read_diff(args.diff_file.as_deref(), &cwd, &ctx.repo_root)?;

    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock());
    let summary = check_diff(&parsed, &config, &checkers, &events, &mut reporter)?;

    Ok(summary.verdict)
}

/// Resolve every location the run needs from the arguments and `cwd`.
///
/// Outside a git repository the current directory stands in for the
/// repository root, but only when the diff comes from `--diff-file`.
pub fn resolve_context(args: &CheckStagedArgs, cwd: &Path) -> Result<RunContext> {
    if args.timeout == 0 {
        return Err(GuardError::UserError(
            "--timeout must be at least 1 second".to_string(),
        ));
    }

    let script_path = match &args.script_path {
        Some(path) => absolutize(path, cwd),
        None => default_script_path()?,
    };

    let repo_root = match resolve_repo_root(cwd) {
        Ok(root) => root,
        Err(_) if args.diff_file.is_some() => cwd.to_path_buf(),
        Err(e) => return Err(e),
    };

    let standards_path = absolutize(
        &resolve_standards_path(args.standards_config.as_deref(), &script_path, cwd)?,
        cwd,
    );

    let mut ctx = RunContext::new(script_path, repo_root, standards_path)
        .with_tool_timeout(Duration::from_secs(args.timeout))
        .with_events_log(args.events_log.as_ref().map(|p| absolutize(p, cwd)));

    if let Some(staging_dir) = &args.staging_dir {
        ctx = ctx.with_staging_dir(absolutize(staging_dir, cwd));
    }

    Ok(ctx)
}

/// Parse the diff from `diff_file` (`-` for stdin), or the staged changes of `repo_root`.
pub fn read_diff(diff_file: Option<&Path>, cwd: &Path, repo_root: &Path) -> Result<ParsedDiff> {
    let Some(diff_file) = diff_file else {
        return staged_changes(repo_root);
    };

    let text = if diff_file == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map_err(|e| {
            GuardError::UserError(format!("failed to read diff from stdin: {}", e))
        })?;
        text
    } else {
        let path = absolutize(diff_file, cwd);
        let bytes = std::fs::read(&path).map_err(|e| {
            GuardError::UserError(format!(
                "failed to read diff file '{}': {}",
                path.display(),
                e
            ))
        })?;
        String::from_utf8_lossy(&bytes).into_owned()
    };

    Ok(DiffParser::new().parse_with_diagnostics(&text))
}
