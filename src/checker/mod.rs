//! Checker framework for commit-guard.
//!
//! A checker inspects the edited files of one standard and yields violation
//! messages. Every implementation shares the same dispatch pipeline through
//! the provided [`Checker::check_files`] method:
//!
//! 1. Keep only files whose extension is in the checker's allow-list
//!    (the configured `extensions` override, else the checker's defaults).
//! 2. If nothing is left, return no messages without running the strategy.
//! 3. Otherwise delegate to [`Checker::get_errors`].
//!
//! Implementations are created by identity through [`CheckerRegistry`].

pub mod eslint;
pub mod pattern;
pub mod process;
pub mod registry;
pub mod settings;

#[cfg(test)]
mod tests;

pub use registry::{CheckerRegistry, StandardCheckers};
pub use settings::CheckerSettings;

use crate::error::Result;
use crate::files::EditedFile;

/// A pluggable analysis strategy over edited files.
pub trait Checker {
    /// Configuration this checker was built with.
    fn settings(&self) -> &CheckerSettings;

    /// Extensions (without leading dot) inspected when no override is configured.
    fn default_extensions(&self) -> &'static [&'static str];

    /// Strategy-specific analysis. Receives only files that passed the extension filter.
    fn get_errors(&self, files: &[&EditedFile]) -> Result<Vec<String>>;

    /// Display name used in report headings.
    fn name(&self) -> &str {
        &self.settings().name
    }

    /// Whether `file` is in this checker's extension allow-list. Case-sensitive.
    fn accepts(&self, file: &EditedFile) -> bool {
        let Some(extension) = file.extension() else {
            return false;
        };

        match &self.settings().extensions {
            Some(allowed) => allowed.iter().any(|e| e == extension),
            None => self.default_extensions().contains(&extension),
        }
    }

    /// Filter `files` by extension and run the strategy on what remains.
    fn check_files(&self, files: &[&EditedFile]) -> Result<Vec<String>> {
        let applicable: Vec<&EditedFile> =
            files.iter().copied().filter(|f| self.accepts(f)).collect();

        if applicable.is_empty() {
            return Ok(Vec::new());
        }

        self.get_errors(&applicable)
    }
}
