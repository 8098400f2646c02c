//! Standards loading, validation, and path resolution.

use super::model::StandardsConfig;
use super::types::DEFAULT_STANDARDS_FILE;
use crate::error::{GuardError, Result};
use crate::files::build_globset;
use std::path::{Path, PathBuf};

impl StandardsConfig {
    /// Load the standards file from disk.
    ///
    /// # Returns
    ///
    /// * `Ok(StandardsConfig)` - Parsed and validated standards
    /// * `Err(GuardError::ConfigError)` - Read, parse, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GuardError::ConfigError(format!(
                "failed to read standards file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse standards from a YAML string.
    ///
    /// An empty document yields an empty configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: StandardsConfig = serde_yaml::from_str(yaml).map_err(|e| {
            GuardError::ConfigError(format!("failed to parse standards YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate rules and checker declarations.
    ///
    /// Validation rules:
    /// - `files` and `exclude` entries must be valid globs
    /// - checker identities must be non-empty
    /// - `extensions` entries must be non-empty and have no leading dots
    pub fn validate(&self) -> Result<()> {
        for (name, standard) in &self.standards {
            build_globset(&standard.files).map_err(|e| {
                GuardError::ConfigError(format!(
                    "standard '{}' has an invalid file rule: {}",
                    name, e
                ))
            })?;
            build_globset(&standard.exclude).map_err(|e| {
                GuardError::ConfigError(format!(
                    "standard '{}' has an invalid exclude rule: {}",
                    name, e
                ))
            })?;

            for (checker_name, checker) in &standard.checkers {
                if checker.checker.trim().is_empty() {
                    return Err(GuardError::ConfigError(format!(
                        "checker '{}' in standard '{}' does not name a checker implementation",
                        checker_name, name
                    )));
                }

                for ext in checker.extensions.iter().flatten() {
                    if ext.is_empty() {
                        return Err(GuardError::ConfigError(format!(
                            "checker '{}' in standard '{}': extensions entries must be non-empty",
                            checker_name, name
                        )));
                    }
                    if ext.starts_with('.') {
                        return Err(GuardError::ConfigError(format!(
                            "checker '{}' in standard '{}': extensions entries must not have leading dots (found '{}'). Use '{}' instead.",
                            checker_name,
                            name,
                            ext,
                            ext.trim_start_matches('.')
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Whether more than one standard is declared (drives per-standard headings).
    pub fn has_several_standards(&self) -> bool {
        self.standards.len() > 1
    }
}

/// Locate the standards file.
///
/// Uses `requested` when given, otherwise `<script_path>/config/standards.yml`.
/// A path that does not exist as given but exists relative to `cwd` is taken
/// relative to `cwd`.
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path to an existing standards file
/// * `Err(GuardError::ConfigError)` - No such file
pub fn resolve_standards_path(
    requested: Option<&Path>,
    script_path: &Path,
    cwd: &Path,
) -> Result<PathBuf> {
    let candidate = match requested {
        Some(path) => path.to_path_buf(),
        None => script_path.join(DEFAULT_STANDARDS_FILE),
    };

    if candidate.exists() {
        return Ok(candidate);
    }

    let from_cwd = cwd.join(&candidate);
    if from_cwd.exists() {
        return Ok(from_cwd);
    }

    Err(GuardError::ConfigError(format!(
        "Project standards description file not found ({})",
        candidate.display()
    )))
}
