//! Configuration types and defaults for commit-guard.

use crate::error::{GuardError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Default location of the standards file, relative to the script path.
pub const DEFAULT_STANDARDS_FILE: &str = "config/standards.yml";

/// Default path rules of a standard that declares none: every file.
pub fn default_file_rules() -> Vec<String> {
    vec!["**".to_string()]
}

/// Display name of a checker from its configuration key (`esLint` -> `EsLint`).
pub fn display_name(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Treat an explicit YAML `null` (e.g. `checkers:` with nothing below) as the default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Free-form option bag handed to a checker (pattern strings, config file paths, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckerOptions(BTreeMap<String, serde_yaml::Value>);

impl CheckerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and programmatic setup.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_yaml::Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// String value of `key`, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }

    /// Value of an optional positive integer option.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - The option is absent
    /// * `Ok(Some(n))` - The option is an integer above zero
    /// * `Err(GuardError::ConfigError)` - Any other value
    pub fn positive_u64(&self, checker: &str, key: &str) -> Result<Option<u64>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(value) => match value.as_u64() {
                Some(n) if n > 0 => Ok(Some(n)),
                _ => Err(GuardError::ConfigError(format!(
                    "checker '{}' option '{}' must be a positive integer",
                    checker, key
                ))),
            },
        }
    }

    /// String value of a mandatory option.
    ///
    /// # Returns
    ///
    /// * `Ok(&str)` - The option value
    /// * `Err(GuardError::ConfigError)` - The option is absent or not a string
    pub fn require_str(&self, checker: &str, key: &str) -> Result<&str> {
        match self.0.get(key) {
            None => Err(GuardError::ConfigError(format!(
                "checker '{}' requires option '{}'",
                checker, key
            ))),
            Some(value) => value.as_str().ok_or_else(|| {
                GuardError::ConfigError(format!(
                    "checker '{}' option '{}' must be a string",
                    checker, key
                ))
            }),
        }
    }
}
