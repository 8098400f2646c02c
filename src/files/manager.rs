//! Grouping of edited files by coding standard.

use super::collection::Files;
use super::edited_file::EditedFile;
use crate::config::StandardsConfig;
use crate::error::{GuardError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use indexmap::IndexMap;

/// Files assigned to each standard, in the standards file's declaration order.
///
/// Only standards that received at least one file appear as keys.
pub type StandardGroups<'a> = IndexMap<String, Vec<&'a EditedFile>>;

/// Compiled path rules of one standard.
#[derive(Debug)]
struct StandardMatcher {
    name: String,
    include: GlobSet,
    exclude: GlobSet,
}

impl StandardMatcher {
    fn matches(&self, path: &str) -> bool {
        self.include.is_match(path) && !self.exclude.is_match(path)
    }
}

/// Assigns edited files to standards and resolves tool reports back to files.
#[derive(Debug)]
pub struct FileManager {
    matchers: Vec<StandardMatcher>,
}

impl FileManager {
    /// Compile the path rules of every standard.
    ///
    /// # Returns
    ///
    /// * `Ok(FileManager)` - All rules compiled
    /// * `Err(GuardError::ConfigError)` - A rule is not a valid glob
    pub fn new(config: &StandardsConfig) -> Result<Self> {
        let mut matchers = Vec::with_capacity(config.standards.len());

        for (name, standard) in &config.standards {
            let include = build_globset(&standard.files).map_err(|e| {
                GuardError::ConfigError(format!(
                    "invalid file rule in standard '{}': {}",
                    name, e
                ))
            })?;
            let exclude = build_globset(&standard.exclude).map_err(|e| {
                GuardError::ConfigError(format!(
                    "invalid exclude rule in standard '{}': {}",
                    name, e
                ))
            })?;
            matchers.push(StandardMatcher {
                name: name.clone(),
                include,
                exclude,
            });
        }

        Ok(Self { matchers })
    }

    /// Group files by the first standard whose rules match their path.
    ///
    /// Standards are tried in declaration order, so a file lands in at most
    /// one group. Files no standard matches are left out without notice.
    pub fn group_files_by_standard<'a>(&self, files: &'a Files) -> StandardGroups<'a> {
        let mut groups: StandardGroups<'a> = IndexMap::new();

        // Seed keys in declaration order so the map iterates like the config.
        for matcher in &self.matchers {
            groups.insert(matcher.name.clone(), Vec::new());
        }

        for file in files {
            if let Some(matcher) = self.matchers.iter().find(|m| m.matches(file.name()))
                && let Some(group) = groups.get_mut(&matcher.name)
            {
                group.push(file);
            }
        }

        groups.retain(|_, group| !group.is_empty());
        groups
    }

    /// Find the file a tool reported on, by exact path.
    ///
    /// A miss means the tool reported a path it was never given, which is an
    /// internal error rather than a user-facing one.
    pub fn find_file_by_name<'a>(files: &[&'a EditedFile], name: &str) -> Result<&'a EditedFile> {
        files
            .iter()
            .copied()
            .find(|f| f.name() == name)
            .ok_or_else(|| {
                GuardError::InternalError(format!(
                    "tool reported on '{}', which is not among the checked files",
                    name
                ))
            })
    }
}

/// Build a glob set from path rules.
///
/// Backslashes are normalized to forward slashes. A rule ending in `/`
/// matches everything below that directory.
pub(crate) fn build_globset(patterns: &[String]) -> std::result::Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let mut normalized = pattern.trim().replace('\\', "/");
        if normalized.is_empty() {
            continue;
        }
        if normalized.ends_with('/') {
            normalized.push_str("**");
        }
        builder.add(Glob::new(&normalized)?);
    }

    builder.build()
}
