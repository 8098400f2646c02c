//! Forbidden-words checker: a regex scan over the added text of each file.

use super::{Checker, CheckerSettings};
use crate::error::{GuardError, Result};
use crate::files::EditedFile;
use regex::Regex;

/// Extensions scanned when the standards file does not override them.
pub const FORBIDDEN_WORDS_EXTENSIONS: &[&str] = &["php", "js"];

/// Option holding the pattern to search for.
pub const PATTERN_OPTION: &str = "pattern";

/// Reports every match of a configured pattern in the lines a file adds.
///
/// All added lines of a file are concatenated (no separator) and searched
/// once, so a file yields at most one message listing every match.
#[derive(Debug)]
pub struct ForbiddenWordsChecker {
    settings: CheckerSettings,
    pattern: Regex,
}

impl ForbiddenWordsChecker {
    /// Build the checker, compiling its `pattern` option.
    ///
    /// # Returns
    ///
    /// * `Ok(ForbiddenWordsChecker)` - Pattern present and valid
    /// * `Err(GuardError::ConfigError)` - Pattern missing or invalid
    pub fn new(settings: CheckerSettings) -> Result<Self> {
        let raw = settings
            .options
            .require_str(&settings.name, PATTERN_OPTION)?;
        let pattern = compile_pattern(raw).map_err(|e| {
            GuardError::ConfigError(format!(
                "checker '{}' has an invalid pattern '{}': {}",
                settings.name, raw, e
            ))
        })?;

        Ok(Self { settings, pattern })
    }
}

impl Checker for ForbiddenWordsChecker {
    fn settings(&self) -> &CheckerSettings {
        &self.settings
    }

    fn default_extensions(&self) -> &'static [&'static str] {
        FORBIDDEN_WORDS_EXTENSIONS
    }

    fn get_errors(&self, files: &[&EditedFile]) -> Result<Vec<String>> {
        let mut errors = Vec::new();

        for file in files {
            let text = file.added_text();
            let found: Vec<&str> = self.pattern.find_iter(&text).map(|m| m.as_str()).collect();

            if !found.is_empty() {
                errors.push(format!(
                    "\"{}\" found in {}",
                    found.join("\", \""),
                    file.name()
                ));
            }
        }

        Ok(errors)
    }
}

/// Compile a bare regex or a delimited `/body/flags` pattern.
///
/// The delimiter is the first character when it is one of `/ # ~ % ! | @`
/// and reappears later with only flag letters after it.
fn compile_pattern(raw: &str) -> std::result::Result<Regex, String> {
    let Some((body, flags)) = split_delimited(raw) else {
        return Regex::new(raw).map_err(|e| e.to_string());
    };

    let mut inline = String::new();
    for flag in flags.chars() {
        match flag {
            'i' | 'm' | 's' | 'x' => inline.push(flag),
            // Unicode matching is always on.
            'u' => {}
            other => return Err(format!("unsupported pattern flag '{}'", other)),
        }
    }

    let source = if inline.is_empty() {
        body.to_string()
    } else {
        format!("(?{}){}", inline, body)
    };
    Regex::new(&source).map_err(|e| e.to_string())
}

fn split_delimited(raw: &str) -> Option<(&str, &str)> {
    let delimiter = raw.chars().next()?;
    if !"/#~%!|@".contains(delimiter) {
        return None;
    }

    let end = raw.rfind(delimiter)?;
    if end == 0 {
        return None;
    }

    let flags = &raw[end + 1..];
    if !flags.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    Some((&raw[1..end], flags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheckerOptions;

    fn checker(pattern: &str) -> ForbiddenWordsChecker {
        let settings = CheckerSettings::new()
            .with_name("ForbiddenWords")
            .with_options(CheckerOptions::new().with(PATTERN_OPTION, pattern));
        ForbiddenWordsChecker::new(settings).unwrap()
    }

    fn file(name: &str, lines: &[(usize, &str)]) -> EditedFile {
        let mut file = EditedFile::new(name);
        for (n, text) in lines {
            file.register_edited_line(*n, *text);
        }
        file
    }

    #[test]
    fn test_reports_match_in_added_line() {
        let checker = checker(r"console\.log");
        let app = file("app.js", &[(10, "console.log('x')")]);

        let errors = checker.check_files(&[&app]).unwrap();

        assert_eq!(errors, vec!["\"console.log\" found in app.js"]);
    }

    #[test]
    fn test_one_message_per_file_listing_all_matches() {
        let checker = checker("debugger|var_dump");
        let f = file("a.js", &[(1, "debugger;"), (2, "var_dump($x);"), (3, "debugger;")]);

        let errors = checker.check_files(&[&f]).unwrap();

        assert_eq!(
            errors,
            vec!["\"debugger\", \"var_dump\", \"debugger\" found in a.js"]
        );
    }

    #[test]
    fn test_files_without_matches_contribute_nothing() {
        let checker = checker("debugger");
        let clean = file("clean.js", &[(1, "let a = 1;")]);
        let dirty = file("dirty.js", &[(4, "debugger;")]);

        let errors = checker.check_files(&[&clean, &dirty]).unwrap();

        assert_eq!(errors, vec!["\"debugger\" found in dirty.js"]);
    }

    #[test]
    fn test_lines_are_concatenated_without_separator() {
        let checker = checker("foobar");
        let f = file("a.php", &[(1, "foo"), (2, "bar")]);

        let errors = checker.check_files(&[&f]).unwrap();

        assert_eq!(errors, vec!["\"foobar\" found in a.php"]);
    }

    #[test]
    fn test_default_extensions_filter_files() {
        let checker = checker("TODO");
        let py = file("util.py", &[(1, "# TODO")]);
        let php = file("index.php", &[(1, "// TODO")]);

        let errors = checker.check_files(&[&py, &php]).unwrap();

        assert_eq!(errors, vec!["\"TODO\" found in index.php"]);
    }

    #[test]
    fn test_delimited_pattern_with_flags() {
        let checker = checker("/CONSOLE\\.LOG/i");
        let f = file("a.js", &[(1, "console.log(1)")]);

        let errors = checker.check_files(&[&f]).unwrap();

        assert_eq!(errors, vec!["\"console.log\" found in a.js"]);
    }

    #[test]
    fn test_delimited_pattern_without_flags() {
        let re = compile_pattern("#die\\(#").unwrap();
        assert_eq!(re.as_str(), "die\\(");
        assert!(re.is_match("die();"));
    }

    #[test]
    fn test_bare_pattern_is_not_treated_as_delimited() {
        // Trailing characters after the last slash are not all flags.
        let re = compile_pattern("/api/v1").unwrap();
        assert!(re.is_match("GET /api/v1"));
    }

    #[test]
    fn test_unsupported_flag_is_config_error() {
        let settings = CheckerSettings::new()
            .with_name("ForbiddenWords")
            .with_options(CheckerOptions::new().with(PATTERN_OPTION, "/x/e"));
        let err = ForbiddenWordsChecker::new(settings).unwrap_err();
        assert!(matches!(err, GuardError::ConfigError(_)));
        assert!(err.to_string().contains("unsupported pattern flag"));
    }

    #[test]
    fn test_missing_pattern_is_config_error() {
        let settings = CheckerSettings::new().with_name("ForbiddenWords");
        let err = ForbiddenWordsChecker::new(settings).unwrap_err();
        assert!(matches!(err, GuardError::ConfigError(_)));
        assert!(err.to_string().contains("'pattern'"));
    }

    #[test]
    fn test_invalid_regex_is_config_error() {
        let settings = CheckerSettings::new()
            .with_name("ForbiddenWords")
            .with_options(CheckerOptions::new().with(PATTERN_OPTION, "(unclosed"));
        let err = ForbiddenWordsChecker::new(settings).unwrap_err();
        assert!(matches!(err, GuardError::ConfigError(_)));
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let checker = checker("debugger");
        let f = file("a.js", &[(3, "debugger;"), (4, "x"), (5, "debugger")]);

        let first = checker.check_files(&[&f]).unwrap();
        let second = checker.check_files(&[&f]).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }
}
