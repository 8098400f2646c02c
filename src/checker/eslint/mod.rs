//! ESLint checker: lints the staged content of each file and keeps the
//! messages reported on edited lines.
//!
//! For every file the staged (index) content is piped to the linter, which
//! is told to skip config discovery, emit JSON, and use a staged copy of the
//! configured config file. The linter's exit code is judged by a
//! [`ToolFailurePolicy`]; its report is correlated back to edited lines.

pub mod invoker;
pub mod report;
pub mod staging;


pub use invoker::{EslintCommand, GitIndex, LintInvoker, LintRequest, StagedContent};
pub use report::{FileReport, correlate, parse_report};
pub use staging::stage_config;

use super::{Checker, CheckerSettings};
use crate::error::{GuardError, Result};
use crate::files::EditedFile;
use std::path::PathBuf;

/// Extensions linted when the standards file does not override them.
pub const ESLINT_EXTENSIONS: &[&str] = &["js", "ts", "tsx"];

/// Exit code meaning "violations found", never a failure.
pub const VIOLATIONS_EXIT_CODE: i32 = 1;

/// Exit code meaning the linter itself failed.
pub const TOOL_FAULT_EXIT_CODE: i32 = 2;

/// Option naming the config file, relative to the standards file directory.
pub const STANDARD_OPTION: &str = "standard";

/// Option overriding the linter command line (split like a shell would).
pub const EXECUTABLE_OPTION: &str = "executable";

/// Option selecting the [`ToolFailurePolicy`].
pub const TOOL_FAILURE_OPTION: &str = "tool_failure";

/// Which exit codes count as a linter fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolFailurePolicy {
    /// Any code above [`VIOLATIONS_EXIT_CODE`] is a fault.
    #[default]
    AboveOne,
    /// Only [`TOOL_FAULT_EXIT_CODE`] is a fault.
    ExactlyTwo,
}

impl ToolFailurePolicy {
    /// Parse the `tool_failure` option value.
    pub fn parse(value: Option<&str>) -> Result<Self> {
        match value {
            None | Some("above_one") => Ok(ToolFailurePolicy::AboveOne),
            Some("exactly_two") => Ok(ToolFailurePolicy::ExactlyTwo),
            Some(other) => Err(GuardError::ConfigError(format!(
                "invalid {} '{}': expected 'above_one' or 'exactly_two'",
                TOOL_FAILURE_OPTION, other
            ))),
        }
    }

    /// Whether an exit code signals a linter fault. A missing code (killed by a signal) always does.
    pub fn is_fault(self, exit_code: Option<i32>) -> bool {
        let Some(code) = exit_code else {
            return true;
        };

        match self {
            ToolFailurePolicy::AboveOne => code > VIOLATIONS_EXIT_CODE || code < 0,
            ToolFailurePolicy::ExactlyTwo => code == TOOL_FAULT_EXIT_CODE,
        }
    }
}

/// Lints staged content and reports messages on edited lines.
pub struct EsLintChecker {
    settings: CheckerSettings,
    config_file: PathBuf,
    policy: ToolFailurePolicy,
    staged: Box<dyn StagedContent>,
    invoker: Box<dyn LintInvoker>,
}

impl EsLintChecker {
    /// Build the checker with the git index and the `eslint` executable.
    ///
    /// # Returns
    ///
    /// * `Ok(EsLintChecker)` - Options are valid and the config file exists
    /// * `Err(GuardError::ConfigError)` - `standard` is missing or unresolvable,
    ///   or another option is invalid
    pub fn new(settings: CheckerSettings) -> Result<Self> {
        let program = match settings.options.get_str(EXECUTABLE_OPTION) {
            Some(cmd) => shell_words::split(cmd).map_err(|e| {
                GuardError::ConfigError(format!(
                    "checker '{}' has an invalid {} '{}': {}",
                    settings.name, EXECUTABLE_OPTION, cmd, e
                ))
            })?,
            None => vec![
                settings
                    .tool_dirs
                    .node
                    .join("eslint")
                    .to_string_lossy()
                    .into_owned(),
            ],
        };

        let staged = GitIndex::new(settings.repo_root.clone());
        let invoker = EslintCommand::new(
            program,
            settings.repo_root.clone(),
            settings.effective_timeout()?,
        )?;

        Self::with_collaborators(settings, Box::new(staged), Box::new(invoker))
    }

    /// Build the checker with explicit collaborators.
    pub fn with_collaborators(
        settings: CheckerSettings,
        staged: Box<dyn StagedContent>,
        invoker: Box<dyn LintInvoker>,
    ) -> Result<Self> {
        let standard = settings
            .options
            .require_str(&settings.name, STANDARD_OPTION)?;
        let config_file = settings.resolve_config_path(standard);
        if !config_file.is_file() {
            return Err(GuardError::ConfigError(format!(
                "ESLint standard file not found ({})",
                config_file.display()
            )));
        }

        let policy = ToolFailurePolicy::parse(settings.options.get_str(TOOL_FAILURE_OPTION))?;

        Ok(Self {
            settings,
            config_file,
            policy,
            staged,
            invoker,
        })
    }

    fn lint_file(&self, file: &EditedFile, config_copy: &std::path::Path) -> Result<Option<FileReport>> {
        let content = self.staged.staged_content(file.name())?;
        let request = LintRequest {
            content: &content,
            config_path: config_copy,
            file_name: file.name(),
        };

        let output = self.invoker.lint(&request)?;
        if self.policy.is_fault(output.exit_code) {
            return Err(GuardError::ToolError(
                output.describe_failure(&self.invoker.describe()),
            ));
        }

        parse_report(&output.stdout)
    }
}

impl Checker for EsLintChecker {
    fn settings(&self) -> &CheckerSettings {
        &self.settings
    }

    fn default_extensions(&self) -> &'static [&'static str] {
        ESLINT_EXTENSIONS
    }

    fn get_errors(&self, files: &[&EditedFile]) -> Result<Vec<String>> {
        let config_copy = stage_config(&self.config_file, &self.settings.staging_dir)?;

        let mut errors = Vec::new();
        for file in files {
            if let Some(report) = self.lint_file(file, &config_copy)? {
                errors.extend(correlate(&report, files, &self.settings.repo_root)?);
            }
        }

        Ok(errors)
    }
}
