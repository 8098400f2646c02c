//! Checker registry: maps configuration identities to constructors.

use super::eslint::{ESLINT_EXTENSIONS, EsLintChecker};
use super::pattern::{FORBIDDEN_WORDS_EXTENSIONS, ForbiddenWordsChecker};
use super::{Checker, CheckerSettings};
use crate::config::StandardsConfig;
use crate::config::types::display_name;
use crate::context::RunContext;
use crate::error::{GuardError, Result};
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Builds a checker from its settings, validating required options.
pub type CheckerFactory = Box<dyn Fn(CheckerSettings) -> Result<Box<dyn Checker>>>;

/// Built checkers of each standard, in declaration order.
///
/// Standards that declare no checkers are not present.
pub type StandardCheckers = IndexMap<String, Vec<Box<dyn Checker>>>;

struct Registration {
    factory: CheckerFactory,
    default_extensions: &'static [&'static str],
}

/// Registered checker implementations, keyed by identity.
#[derive(Default)]
pub struct CheckerRegistry {
    entries: BTreeMap<String, Registration>,
    aliases: BTreeMap<String, String>,
}

impl CheckerRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in checkers.
    ///
    /// | Identity          | Alias      | Checker                   |
    /// |-------------------|------------|---------------------------|
    /// | `forbidden_words` | `pattern`  | [`ForbiddenWordsChecker`] |
    /// | `eslint`          | `es_lint`  | [`EsLintChecker`]         |
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();

        registry.register("forbidden_words", FORBIDDEN_WORDS_EXTENSIONS, |settings| {
            Ok(Box::new(ForbiddenWordsChecker::new(settings)?))
        });
        registry.register("eslint", ESLINT_EXTENSIONS, |settings| {
            Ok(Box::new(EsLintChecker::new(settings)?))
        });
        registry.alias("pattern", "forbidden_words");
        registry.alias("es_lint", "eslint");

        registry
    }

    /// Register (or replace) the checker built for `identity`.
    pub fn register<F>(
        &mut self,
        identity: &str,
        default_extensions: &'static [&'static str],
        factory: F,
    ) where
        F: Fn(CheckerSettings) -> Result<Box<dyn Checker>> + 'static,
    {
        self.entries.insert(
            identity.to_string(),
            Registration {
                factory: Box::new(factory),
                default_extensions,
            },
        );
    }

    /// Accept `alias` as another spelling of `identity`.
    pub fn alias(&mut self, alias: &str, identity: &str) {
        self.aliases.insert(alias.to_string(), identity.to_string());
    }

    fn resolve(&self, identity: &str) -> Option<&Registration> {
        let canonical = self
            .aliases
            .get(identity)
            .map(String::as_str)
            .unwrap_or(identity);
        self.entries.get(canonical)
    }

    /// Build the checker registered as `identity` (or one of its aliases).
    ///
    /// # Returns
    ///
    /// * `Ok(Box<dyn Checker>)` - The checker, with its options validated
    /// * `Err(GuardError::ConfigError)` - Unknown identity or invalid options
    pub fn build(&self, identity: &str, settings: CheckerSettings) -> Result<Box<dyn Checker>> {
        let registration = self.resolve(identity).ok_or_else(|| {
            GuardError::ConfigError(format!(
                "unknown checker '{}' for '{}'. Known checkers: {}",
                identity,
                settings.name,
                self.identities()
                    .map(|(id, _)| id)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })?;

        (registration.factory)(settings)
    }

    /// Identities with their default extensions, sorted by identity.
    pub fn identities(&self) -> impl Iterator<Item = (&str, &'static [&'static str])> {
        self.entries
            .iter()
            .map(|(id, r)| (id.as_str(), r.default_extensions))
    }

    /// Alternative spellings with the identity each stands for.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, id)| (alias.as_str(), id.as_str()))
    }

    /// Build every checker of every standard in `config`.
    ///
    /// Runs before any file is inspected, so configuration errors (unknown
    /// identity, missing option, unresolvable config file) abort the run early.
    pub fn instantiate(&self, config: &StandardsConfig, ctx: &RunContext) -> Result<StandardCheckers> {
        let mut built = StandardCheckers::new();

        for (standard, declaration) in &config.standards {
            if declaration.checkers.is_empty() {
                continue;
            }

            let mut checkers = Vec::with_capacity(declaration.checkers.len());
            for (key, checker) in &declaration.checkers {
                let settings = CheckerSettings::from_context(ctx)
                    .with_name(display_name(key))
                    .with_extensions(checker.extensions.clone())
                    .with_options(checker.options.clone());
                checkers.push(self.build(&checker.checker, settings)?);
            }
            built.insert(standard.clone(), checkers);
        }

        Ok(built)
    }
}
