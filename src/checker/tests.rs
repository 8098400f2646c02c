//! Tests for the checker dispatch pipeline and registry.

use super::settings::TIMEOUT_OPTION;
use super::*;
use crate::config::{CheckerOptions, StandardsConfig};
use crate::context::RunContext;
use crate::error::GuardError;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;
use tempfile::TempDir;

/// Records the files it receives and reports one message per file.
struct RecordingChecker {
    settings: CheckerSettings,
    seen: Rc<RefCell<Vec<String>>>,
}

impl RecordingChecker {
    fn new(settings: CheckerSettings) -> Self {
        Self {
            settings,
            seen: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl Checker for RecordingChecker {
    fn settings(&self) -> &CheckerSettings {
        &self.settings
    }

    fn default_extensions(&self) -> &'static [&'static str] {
        &["js", "ts"]
    }

    fn get_errors(&self, files: &[&EditedFile]) -> crate::error::Result<Vec<String>> {
        let mut errors = Vec::new();
        for file in files {
            self.seen.borrow_mut().push(file.name().to_string());
            errors.push(format!("seen {}", file.name()));
        }
        Ok(errors)
    }
}

fn file(name: &str) -> EditedFile {
    let mut file = EditedFile::new(name);
    file.register_edited_line(1, "x");
    file
}

fn context(temp: &TempDir) -> RunContext {
    RunContext::new(
        temp.path().join("guard"),
        temp.path().join("repo"),
        temp.path().join("config").join("standards.yml"),
    )
}

// =========================================================================
// Dispatch template
// =========================================================================

#[test]
fn test_check_files_filters_by_default_extensions() {
    let checker = RecordingChecker::new(CheckerSettings::new().with_name("Rec"));
    let seen = Rc::clone(&checker.seen);
    let (js, py, ts) = (file("a.js"), file("b.py"), file("c.ts"));

    let errors = checker.check_files(&[&js, &py, &ts]).unwrap();

    assert_eq!(errors, vec!["seen a.js", "seen c.ts"]);
    assert_eq!(*seen.borrow(), vec!["a.js", "c.ts"]);
}

#[test]
fn test_empty_intersection_skips_strategy() {
    let checker = RecordingChecker::new(CheckerSettings::new());
    let seen = Rc::clone(&checker.seen);
    let py = file("util.py");

    let errors = checker.check_files(&[&py]).unwrap();

    assert!(errors.is_empty());
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_no_files_skips_strategy() {
    let checker = RecordingChecker::new(CheckerSettings::new());
    let seen = Rc::clone(&checker.seen);

    assert!(checker.check_files(&[]).unwrap().is_empty());
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_configured_extensions_override_defaults() {
    let settings = CheckerSettings::new().with_extensions(Some(vec!["py".to_string()]));
    let checker = RecordingChecker::new(settings);
    let (js, py) = (file("a.js"), file("b.py"));

    let errors = checker.check_files(&[&js, &py]).unwrap();

    assert_eq!(errors, vec!["seen b.py"]);
}

#[test]
fn test_extension_match_is_case_sensitive() {
    let checker = RecordingChecker::new(CheckerSettings::new());
    let upper = file("LEGACY.JS");
    let none = file("Makefile");

    assert!(!checker.accepts(&upper));
    assert!(!checker.accepts(&none));
    assert!(checker.check_files(&[&upper, &none]).unwrap().is_empty());
}

#[test]
fn test_name_comes_from_settings() {
    let checker = RecordingChecker::new(CheckerSettings::new().with_name("ForbiddenWords"));
    assert_eq!(checker.name(), "ForbiddenWords");
}

// =========================================================================
// Settings
// =========================================================================

#[test]
fn test_settings_from_context() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp).with_tool_timeout(Duration::from_secs(7));

    let settings = CheckerSettings::from_context(&ctx);

    assert_eq!(settings.script_path, ctx.script_path);
    assert_eq!(settings.tool_dirs, ctx.tool_dirs);
    assert_eq!(settings.config_dir, temp.path().join("config"));
    assert_eq!(settings.staging_dir, ctx.staging_dir);
    assert_eq!(settings.repo_root, ctx.repo_root);
    assert_eq!(settings.timeout, Duration::from_secs(7));
}

#[test]
fn test_timeout_option_overrides_run_timeout() {
    let settings = CheckerSettings::new().with_timeout(Duration::from_secs(120));
    assert_eq!(settings.effective_timeout().unwrap(), Duration::from_secs(120));

    let settings = settings.with_options(CheckerOptions::new().with(TIMEOUT_OPTION, 5u64));
    assert_eq!(settings.effective_timeout().unwrap(), Duration::from_secs(5));
}

#[test]
fn test_zero_or_non_integer_timeout_option_is_config_error() {
    for value in [serde_yaml::Value::from(0u64), serde_yaml::Value::from("30")] {
        let settings = CheckerSettings::new()
            .with_name("EsLint")
            .with_options(CheckerOptions::new().with(TIMEOUT_OPTION, value));

        let err = settings.effective_timeout().unwrap_err();

        assert!(matches!(err, GuardError::ConfigError(_)));
        assert!(err.to_string().contains("'timeout_seconds' must be a positive integer"));
    }
}

#[test]
fn test_resolve_config_path() {
    let settings = CheckerSettings::new().with_config_dir(PathBuf::from("/repo/config"));
    assert_eq!(
        settings.resolve_config_path(".eslintrc.json"),
        PathBuf::from("/repo/config/.eslintrc.json")
    );
    assert_eq!(
        settings.resolve_config_path("/etc/eslint.json"),
        PathBuf::from("/etc/eslint.json")
    );
}

// =========================================================================
// Registry
// =========================================================================

#[test]
fn test_builtin_identities_and_aliases() {
    let registry = CheckerRegistry::with_builtin();

    let ids: Vec<&str> = registry.identities().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["eslint", "forbidden_words"]);

    let aliases: Vec<(&str, &str)> = registry.aliases().collect();
    assert_eq!(
        aliases,
        vec![("es_lint", "eslint"), ("pattern", "forbidden_words")]
    );
}

#[test]
fn test_build_by_alias() {
    let registry = CheckerRegistry::with_builtin();
    let settings = CheckerSettings::new()
        .with_name("ForbiddenWords")
        .with_options(CheckerOptions::new().with("pattern", "debugger"));

    let checker = registry.build("pattern", settings).unwrap();

    assert_eq!(checker.name(), "ForbiddenWords");
    assert_eq!(checker.default_extensions(), &["php", "js"]);
}

#[test]
fn test_unknown_identity_is_config_error() {
    let registry = CheckerRegistry::with_builtin();
    let err = registry
        .build("Adq\\Checker\\Phpcs", CheckerSettings::new().with_name("Phpcs"))
        .err()
        .unwrap();

    assert!(matches!(err, GuardError::ConfigError(_)));
    assert!(err.to_string().contains("unknown checker"));
    assert!(err.to_string().contains("eslint, forbidden_words"));
}

#[test]
fn test_custom_registration() {
    let mut registry = CheckerRegistry::new();
    registry.register("recording", &["js", "ts"], |settings| {
        Ok(Box::new(RecordingChecker::new(settings)))
    });

    let checker = registry.build("recording", CheckerSettings::new()).unwrap();
    let js = file("a.js");

    assert_eq!(checker.check_files(&[&js]).unwrap(), vec!["seen a.js"]);
}

#[test]
fn test_instantiate_builds_checkers_in_declaration_order() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("config")).unwrap();
    fs::write(temp.path().join("config").join(".eslintrc.json"), "{}").unwrap();
    let config = StandardsConfig::from_yaml(
        r#"
web:
  files: ["*.js"]
  checkers:
    forbiddenWords:
      checker: forbidden_words
      extensions: [js, ts]
      options:
        pattern: debugger
    esLint:
      checker: eslint
      options:
        standard: .eslintrc.json
docs:
  files: ["*.md"]
api:
  files: ["*.py"]
  checkers:
    pattern:
      checker: pattern
      options:
        pattern: "print\\("
"#,
    )
    .unwrap();

    let built = CheckerRegistry::with_builtin()
        .instantiate(&config, &context(&temp))
        .unwrap();

    let standards: Vec<&str> = built.keys().map(String::as_str).collect();
    assert_eq!(standards, vec!["web", "api"]);
    let web: Vec<&str> = built["web"].iter().map(|c| c.name()).collect();
    assert_eq!(web, vec!["ForbiddenWords", "EsLint"]);
    assert_eq!(
        built["web"][0].settings().extensions,
        Some(vec!["js".to_string(), "ts".to_string()])
    );
    assert_eq!(built["api"][0].name(), "Pattern");
}

#[test]
fn test_instantiate_fails_fast_on_missing_option() {
    let temp = TempDir::new().unwrap();
    let config = StandardsConfig::from_yaml(
        r#"
web:
  checkers:
    forbiddenWords:
      checker: forbidden_words
"#,
    )
    .unwrap();

    let err = CheckerRegistry::with_builtin()
        .instantiate(&config, &context(&temp))
        .err()
        .unwrap();

    assert!(matches!(err, GuardError::ConfigError(_)));
    assert!(err.to_string().contains("requires option 'pattern'"));
}

#[test]
fn test_instantiate_fails_on_unresolvable_eslint_config() {
    let temp = TempDir::new().unwrap();
    let config = StandardsConfig::from_yaml(
        r#"
web:
  checkers:
    esLint:
      checker: eslint
      options:
        standard: missing/.eslintrc.json
"#,
    )
    .unwrap();

    let err = CheckerRegistry::with_builtin()
        .instantiate(&config, &context(&temp))
        .err()
        .unwrap();

    assert!(matches!(err, GuardError::ConfigError(_)));
    assert!(err.to_string().contains("ESLint standard file not found"));
}

#[test]
fn test_instantiate_rejects_zero_eslint_timeout() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("config")).unwrap();
    fs::write(temp.path().join("config/.eslintrc.json"), "{}").unwrap();
    let config = StandardsConfig::from_yaml(
        r#"
web:
  checkers:
    esLint:
      checker: eslint
      options:
        standard: .eslintrc.json
        timeout_seconds: 0
"#,
    )
    .unwrap();

    let err = CheckerRegistry::with_builtin()
        .instantiate(&config, &context(&temp))
        .err()
        .unwrap();

    assert!(matches!(err, GuardError::ConfigError(_)));
    assert!(err.to_string().contains("must be a positive integer"));
}
