//! Command implementations for commit-guard.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check_staged;
mod checkers;

use crate::cli::Command;
use crate::error::Result;
use crate::exit_codes;

/// Final state of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Accepted => exit_codes::ACCEPTED,
            Verdict::Rejected => exit_codes::REJECTED,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "accepted"),
            Verdict::Rejected => write!(f, "rejected"),
        }
    }
}

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<Verdict> {
    match command {
        Command::CheckStaged(args) => check_staged::cmd_check_staged(args),
        Command::Checkers => {
            checkers::cmd_checkers()?;
            Ok(Verdict::Accepted)
        }
    }
}
