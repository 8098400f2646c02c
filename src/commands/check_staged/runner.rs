//! The check pipeline: parsed diff -> standard groups -> checkers -> verdict.

use super::report::Reporter;
use crate::checker::StandardCheckers;
use crate::commands::Verdict;
use crate::config::StandardsConfig;
use crate::diff::ParsedDiff;
use crate::error::Result;
use crate::events::{Event, EventAction, EventLog};
use crate::files::FileManager;
use serde_json::json;
use std::io::Write;
use std::time::Instant;

/// Messages one checker reported for one standard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub standard: String,
    pub checker: String,
    pub messages: Vec<String>,
}

/// Outcome of a check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub verdict: Verdict,
    /// Edited files in the diff.
    pub files: usize,
    /// Standards whose checkers ran, in order.
    pub standards_checked: Vec<String>,
    /// Non-empty checker results only.
    pub findings: Vec<Finding>,
    pub malformed_hunks: usize,
}

impl RunSummary {
    pub fn violation_count(&self) -> usize {
        self.findings.iter().map(|f| f.messages.len()).sum()
    }
}

/// Run every standard's checkers over its share of `parsed`.
///
/// Standards run in declaration order and checkers in declaration order
/// within a standard. Standards without files or without checkers are
/// skipped. Violations are reported and counted; any error from a checker
/// aborts the run.
pub fn check_diff<W: Write>(
    parsed: &ParsedDiff,
    config: &StandardsConfig,
    checkers: &StandardCheckers,
    events: &EventLog,
    reporter: &mut Reporter<W>,
) -> Result<RunSummary> {
    events.record(Event::new(EventAction::RunStart).with_details(json!({
        "standards": config.standards.len(),
        "files": parsed.files.len(),
    })))?;

    reporter.start();

    for hunk in &parsed.diagnostics.malformed_hunks {
        events.record(Event::new(EventAction::MalformedHunk).with_details(json!({
            "file": hunk.file,
            "header": hunk.header,
        })))?;
    }
    if !parsed.diagnostics.is_clean() {
        reporter.malformed_hunks(parsed.diagnostics.malformed_hunk_count());
    }

    let manager = FileManager::new(config)?;
    let groups = manager.group_files_by_standard(&parsed.files);
    let several = config.has_several_standards();

    let mut standards_checked = Vec::new();
    let mut findings = Vec::new();

    for (standard, files) in &groups {
        let Some(standard_checkers) = checkers.get(standard) else {
            continue;
        };
        if standard_checkers.is_empty() {
            continue;
        }

        if several {
            reporter.standard(standard);
        }
        standards_checked.push(standard.clone());

        for checker in standard_checkers {
            let started = Instant::now();
            let messages = checker.check_files(files)?;

            events.record(
                Event::new(EventAction::CheckerFinished)
                    .with_standard(standard.as_str())
                    .with_checker(checker.name())
                    .with_details(json!({
                        "files": files.len(),
                        "violations": messages.len(),
                        "duration_ms": started.elapsed().as_millis() as u64,
                    })),
            )?;

            if !messages.is_empty() {
                reporter.violations(checker.name(), &messages);
                findings.push(Finding {
                    standard: standard.clone(),
                    checker: checker.name().to_string(),
                    messages,
                });
            }
        }
    }

    let verdict = if findings.is_empty() {
        Verdict::Accepted
    } else {
        Verdict::Rejected
    };
    reporter.finish(verdict == Verdict::Accepted);

    let summary = RunSummary {
        verdict,
        files: parsed.files.len(),
        standards_checked,
        findings,
        malformed_hunks: parsed.diagnostics.malformed_hunk_count(),
    };

    events.record(Event::new(EventAction::RunFinished).with_details(json!({
        "verdict": summary.verdict.to_string(),
        "files": summary.files,
        "standards": summary.standards_checked,
        "violations": summary.violation_count(),
        "malformed_hunks": summary.malformed_hunks,
    })))?;

    Ok(summary)
}
