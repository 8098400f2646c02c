//! Exit code constants for the commit-guard CLI.
//!
//! - 0: Commit accepted (no violations)
//! - 1: Commit rejected (violations on edited lines)
//! - 2: Configuration or invocation error
//! - 3: External tool failure (fault or timeout)
//! - 4: Git operation failure
//! - 5: Internal error

/// No violations were found on any edited line.
pub const ACCEPTED: i32 = 0;

/// At least one checker reported a violation on an edited line.
pub const REJECTED: i32 = 1;

/// Configuration error: missing option, unknown checker, bad standards file or arguments.
pub const CONFIG_ERROR: i32 = 2;

/// An external tool signalled that it failed, or did not finish in time.
pub const TOOL_FAILURE: i32 = 3;

/// A git command failed.
pub const GIT_FAILURE: i32 = 4;

/// Broken internal invariant (e.g. a tool reported on a file it was never given).
pub const INTERNAL_ERROR: i32 = 5;
