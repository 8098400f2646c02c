//! Standards file model.

use super::types::{CheckerOptions, default_file_rules, null_as_default};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The whole standards file: standard name -> standard, in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StandardsConfig {
    pub standards: IndexMap<String, Standard>,
}

/// A named policy: which files it covers and which checkers run on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Standard {
    /// Glob rules; a file belongs to the standard if any rule matches its path.
    #[serde(default = "default_file_rules")]
    pub files: Vec<String>,

    /// Glob rules that take a file back out of this standard.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// Checkers keyed by configuration name, run in declaration order.
    #[serde(deserialize_with = "null_as_default")]
    pub checkers: IndexMap<String, CheckerConfig>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for Standard {
    fn default() -> Self {
        Self {
            files: default_file_rules(),
            exclude: Vec::new(),
            checkers: IndexMap::new(),
            extra: BTreeMap::new(),
        }
    }
}

/// Declaration of one checker within a standard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Registry identity of the checker implementation (e.g. `eslint`).
    #[serde(alias = "class")]
    pub checker: String,

    /// Overrides the checker's own extension allow-list (no leading dots).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    /// Checker-specific options.
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: CheckerOptions,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}
