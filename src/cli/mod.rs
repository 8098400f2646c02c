//! CLI argument parsing for commit-guard.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Commit-guard: runs coding-standard checkers against the lines a commit adds.
///
/// Staged files are grouped by the standards declared in a YAML file; each
/// standard's checkers inspect only edited lines, and any violation rejects
/// the commit.
#[derive(Parser, Debug)]
#[command(name = "commit-guard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for commit-guard.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check the staged changes against the configured standards.
    ///
    /// Exits 0 when the commit is accepted and 1 when violations were found.
    #[command(visible_alias = "check")]
    CheckStaged(CheckStagedArgs),

    /// List the available checker identities and their default extensions.
    Checkers,
}

/// Arguments for the `check-staged` command.
#[derive(Args, Debug, Clone, Default)]
pub struct CheckStagedArgs {
    /// Standards description file (default: <script path>/config/standards.yml).
    #[arg(short = 's', long = "standards-config", value_name = "PATH")]
    pub standards_config: Option<PathBuf>,

    /// Read the diff from a file instead of git (`-` for stdin).
    #[arg(long, value_name = "PATH")]
    pub diff_file: Option<PathBuf>,

    /// Seconds an external tool may run before it is killed.
    #[arg(long, value_name = "SECS", default_value_t = crate::context::DEFAULT_TOOL_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Installation directory holding vendor/bin and node_modules/.bin
    /// (default: directory of the executable).
    #[arg(long, value_name = "PATH")]
    pub script_path: Option<PathBuf>,

    /// Directory for staged linter config copies
    /// (default: <script path>/eslint-config-copies).
    #[arg(long, value_name = "PATH")]
    pub staging_dir: Option<PathBuf>,

    /// Append NDJSON run events to this file.
    #[arg(long, value_name = "PATH")]
    pub events_log: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
