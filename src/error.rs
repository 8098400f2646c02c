//! Error types for the commit-guard CLI.
//!
//! Uses thiserror for derive macros. Violations found by checkers are not
//! errors; they are collected as messages and only decide the final verdict.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for commit-guard operations.
#[derive(Error, Debug)]
pub enum GuardError {
    /// Invalid invocation (unreadable diff file, bad path arguments).
    #[error("{0}")]
    UserError(String),

    /// Standards or checker configuration is unusable. Raised before any file is checked.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An external tool failed (as opposed to reporting violations) or timed out.
    #[error("Tool invocation failed: {0}")]
    ToolError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// An internal invariant did not hold.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl GuardError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GuardError::UserError(_) => exit_codes::CONFIG_ERROR,
            GuardError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            GuardError::ToolError(_) => exit_codes::TOOL_FAILURE,
            GuardError::GitError(_) => exit_codes::GIT_FAILURE,
            GuardError::InternalError(_) => exit_codes::INTERNAL_ERROR,
        }
    }
}

/// Result type alias for commit-guard operations.
pub type Result<T> = std::result::Result<T, GuardError>;
