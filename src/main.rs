//! Commit-guard: a pre-commit hook that checks only the lines a commit adds.
//!
//! This is the main entry point for the `commit-guard` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and maps the verdict or error
//! to the process exit code.

mod checker;
mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod diff;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod files;
pub mod fs;
pub mod git;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(verdict) => ExitCode::from(verdict.exit_code() as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
