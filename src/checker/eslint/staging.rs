//! Staging of linter config files.
//!
//! The linter is pointed at a copy of its config inside the staging
//! directory. Configs named in `extends` are copied alongside it, flat, and
//! the copy's `extends` entries are rewritten to `./<name>` when the source
//! reached them through a subdirectory. Two configs with the same file name
//! share one copy.

use crate::error::{GuardError, Result};
use crate::fs::atomic_write;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Copy `source` and its `extends` chain into `staging_dir`.
///
/// Copies are named by the source file name. `extends` entries are resolved
/// against the directory of the file that names them; entries that are not
/// existing files (shareable configs, plugins) are left for the linter.
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the staged copy of `source`
/// * `Err(GuardError::ConfigError)` - A config could not be read or written
pub fn stage_config(source: &Path, staging_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(staging_dir).map_err(|e| {
        GuardError::ConfigError(format!(
            "failed to create staging directory '{}': {}",
            staging_dir.display(),
            e
        ))
    })?;

    let mut visited = HashSet::new();
    copy_config(source, staging_dir, &mut visited)
}

fn copy_config(source: &Path, staging_dir: &Path, visited: &mut HashSet<PathBuf>) -> Result<PathBuf> {
    let file_name = source.file_name().ok_or_else(|| {
        GuardError::ConfigError(format!(
            "config path '{}' does not name a file",
            source.display()
        ))
    })?;
    let copy = staging_dir.join(file_name);

    let key = source.canonicalize().unwrap_or_else(|_| source.to_path_buf());
    if !visited.insert(key) {
        return Ok(copy);
    }

    let bytes = fs::read(source).map_err(|e| {
        GuardError::ConfigError(format!(
            "failed to read config file '{}': {}",
            source.display(),
            e
        ))
    })?;

    let base = source.parent().unwrap_or_else(|| Path::new("."));
    let mut renamed = HashMap::new();
    for extended in extends_entries(&bytes) {
        let extended_path = base.join(&extended);
        if !extended_path.is_file() {
            continue;
        }
        let staged = copy_config(&extended_path, staging_dir, visited)?;
        if let Some(name) = staged.file_name().and_then(|n| n.to_str())
            && !names_sibling(&extended, name)
        {
            renamed.insert(extended, format!("./{}", name));
        }
    }

    let contents = if renamed.is_empty() {
        bytes
    } else {
        rewrite_extends(&bytes, &renamed)?
    };

    atomic_write(&copy, &contents).map_err(|e| {
        GuardError::ConfigError(format!(
            "failed to stage config file '{}': {}",
            copy.display(),
            e
        ))
    })?;

    Ok(copy)
}

/// True when `entry` already names `name` in the same directory.
fn names_sibling(entry: &str, name: &str) -> bool {
    let mut parts = Path::new(entry)
        .components()
        .filter(|c| !matches!(c, Component::CurDir));
    matches!(
        (parts.next(), parts.next()),
        (Some(Component::Normal(first)), None) if first == name
    )
}

/// Re-serialize a JSON config with its `extends` entries renamed.
fn rewrite_extends(bytes: &[u8], renamed: &HashMap<String, String>) -> Result<Vec<u8>> {
    let mut config: Value = serde_json::from_slice(bytes)
        .map_err(|e| GuardError::InternalError(format!("config became unparseable: {}", e)))?;

    let rename = |entry: &mut Value| {
        if let Value::String(text) = entry
            && let Some(to) = renamed.get(text.as_str())
        {
            *text = to.clone();
        }
    };
    match config.get_mut("extends") {
        Some(Value::Array(entries)) => entries.iter_mut().for_each(rename),
        Some(entry) => rename(entry),
        None => {}
    }

    serde_json::to_vec_pretty(&config)
        .map_err(|e| GuardError::InternalError(format!("failed to serialize config: {}", e)))
}

/// `extends` entries of a JSON config. Anything unparseable has none.
fn extends_entries(bytes: &[u8]) -> Vec<String> {
    let Ok(config) = serde_json::from_slice::<Value>(bytes) else {
        return Vec::new();
    };

    match config.get("extends") {
        Some(Value::String(entry)) => vec![entry.clone()],
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(|e| e.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}
