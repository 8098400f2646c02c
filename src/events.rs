//! Run event log for commit-guard.
//!
//! Events are appended to an NDJSON file (one JSON object per line) when the
//! run is started with `--events-log <path>`.
//!
//! # Event Format
//!
//! Each event is a JSON object with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `action`: What happened (run_start, malformed_hunk, checker_finished, run_finished)
//! - `actor`: The owner string (e.g., `user@HOST`)
//! - `standard`: Optional standard name
//! - `checker`: Optional checker name
//! - `details`: Freeform object with action-specific details

use crate::error::{GuardError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Checkers built, about to read the diff
    RunStart,
    /// A hunk header could not be parsed; its lines were numbered from zero
    MalformedHunk,
    /// A checker finished over one standard's files
    CheckerFinished,
    /// Final verdict reached
    RunFinished,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::RunStart => write!(f, "run_start"),
            EventAction::MalformedHunk => write!(f, "malformed_hunk"),
            EventAction::CheckerFinished => write!(f, "checker_finished"),
            EventAction::RunFinished => write!(f, "run_finished"),
        }
    }
}

/// An event record for the run log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// Who ran the hook (e.g., `user@HOST`).
    pub actor: String,

    /// Standard the event belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,

    /// Checker the event belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checker: Option<String>,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event with the given action, stamped now.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            standard: None,
            checker: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn with_standard(mut self, standard: impl Into<String>) -> Self {
        self.standard = Some(standard.into());
        self
    }

    pub fn with_checker(mut self, checker: impl Into<String>) -> Self {
        self.checker = Some(checker.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| GuardError::UserError(format!("failed to serialize event to JSON: {}", e)))
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the log at `path`, creating the file and its directory if needed.
///
/// # Returns
///
/// * `Ok(())` - Event was appended
/// * `Err(GuardError::UserError)` - Serialization or write failed
pub fn append_event(path: &Path, event: &Event) -> Result<()> {
    let json_line = event.to_ndjson_line()?;

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        fs::create_dir_all(dir).map_err(|e| {
            GuardError::UserError(format!(
                "failed to create events directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            GuardError::UserError(format!(
                "failed to open events file '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        GuardError::UserError(format!(
            "failed to write event to '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

/// Event sink that is a no-op when logging is disabled.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    path: Option<std::path::PathBuf>,
}

impl EventLog {
    pub fn new(path: Option<std::path::PathBuf>) -> Self {
        Self { path }
    }

    /// Append `event` if logging is enabled.
    pub fn record(&self, event: Event) -> Result<()> {
        match &self.path {
            Some(path) => append_event(path, &event),
            None => Ok(()),
        }
    }
}
