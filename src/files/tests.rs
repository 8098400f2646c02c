//! Tests for the edited-file model and standard grouping.

use super::{EditedFile, FileManager, Files};
use crate::config::StandardsConfig;
use crate::error::GuardError;

fn file(name: &str, lines: &[(usize, &str)]) -> EditedFile {
    let mut file = EditedFile::new(name);
    for (n, text) in lines {
        file.register_edited_line(*n, *text);
    }
    file
}

fn files(names: &[&str]) -> Files {
    let mut files = Files::new();
    for name in names {
        files.push(file(name, &[(1, "x")]));
    }
    files
}

fn manager(yaml: &str) -> FileManager {
    FileManager::new(&StandardsConfig::from_yaml(yaml).unwrap()).unwrap()
}

// =========================================================================
// EditedFile
// =========================================================================

#[test]
fn test_edited_file_registers_lines() {
    let f = file("src/app.js", &[(10, "a"), (11, "b")]);

    assert_eq!(f.name(), "src/app.js");
    assert!(f.is_edited(10));
    assert!(f.is_edited(11));
    assert!(!f.is_edited(12));
    assert_eq!(f.edited_lines().len(), 2);
}

#[test]
fn test_added_text_concatenates_in_registration_order() {
    let f = file("a.js", &[(5, "five"), (2, "two"), (9, "nine")]);
    assert_eq!(f.added_text(), "fivetwonine");
}

#[test]
fn test_reregistering_a_line_keeps_its_position() {
    let mut f = file("a.js", &[(1, "one"), (2, "two")]);
    f.register_edited_line(1, "uno");
    assert_eq!(f.added_text(), "unotwo");
}

#[test]
fn test_extension_is_case_sensitive_suffix() {
    assert_eq!(EditedFile::new("src/app.js").extension(), Some("js"));
    assert_eq!(EditedFile::new("src/App.TS").extension(), Some("TS"));
    assert_eq!(EditedFile::new("archive.tar.gz").extension(), Some("gz"));
    assert_eq!(EditedFile::new("Makefile").extension(), None);
    assert_eq!(EditedFile::new(".eslintrc").extension(), None);
}

// =========================================================================
// Files
// =========================================================================

#[test]
fn test_files_keep_insertion_order() {
    let files = files(&["b.js", "a.js", "c.py"]);
    let names: Vec<&str> = files.iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["b.js", "a.js", "c.py"]);
}

#[test]
fn test_files_are_unique_by_name() {
    let mut files = Files::new();
    files.push(file("a.js", &[(1, "one")]));
    files.push(file("a.js", &[(7, "seven")]));

    assert_eq!(files.len(), 1);
    let merged = files.find("a.js").unwrap();
    assert!(merged.is_edited(1));
    assert!(merged.is_edited(7));
}

#[test]
fn test_files_find_by_name() {
    let files = files(&["src/a.js", "src/b.js"]);
    assert!(files.find("src/b.js").is_some());
    assert!(files.find("b.js").is_none());
}

// =========================================================================
// FileManager
// =========================================================================

#[test]
fn test_group_files_by_standard() {
    let manager = manager(
        r#"
web:
  files: ["*.js", "*.ts"]
api:
  files: ["*.py"]
"#,
    );
    let files = files(&["src/app.js", "api/views.py", "src/types.ts"]);

    let groups = manager.group_files_by_standard(&files);

    let web: Vec<&str> = groups["web"].iter().map(|f| f.name()).collect();
    let api: Vec<&str> = groups["api"].iter().map(|f| f.name()).collect();
    assert_eq!(web, vec!["src/app.js", "src/types.ts"]);
    assert_eq!(api, vec!["api/views.py"]);
}

#[test]
fn test_first_matching_standard_wins() {
    let manager = manager(
        r#"
frontend:
  files: ["web/"]
everything:
  files: ["**"]
"#,
    );
    let files = files(&["web/app.js", "server/main.go"]);

    let groups = manager.group_files_by_standard(&files);

    assert_eq!(groups["frontend"].len(), 1);
    assert_eq!(groups["frontend"][0].name(), "web/app.js");
    assert_eq!(groups["everything"].len(), 1);
    assert_eq!(groups["everything"][0].name(), "server/main.go");
}

#[test]
fn test_groups_follow_declaration_order() {
    let manager = manager(
        r#"
zeta:
  files: ["*.py"]
alpha:
  files: ["*.js"]
"#,
    );
    let files = files(&["a.js", "b.py"]);

    let groups = manager.group_files_by_standard(&files);

    let names: Vec<&str> = groups.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["zeta", "alpha"]);
}

#[test]
fn test_unmatched_files_are_dropped() {
    let manager = manager(
        r#"
web:
  files: ["*.js"]
"#,
    );
    let files = files(&["a.js", "README.md", "b.rb"]);

    let groups = manager.group_files_by_standard(&files);

    let grouped: Vec<&str> = groups.values().flatten().map(|f| f.name()).collect();
    assert_eq!(grouped, vec!["a.js"]);
    for name in grouped {
        assert!(files.find(name).is_some());
    }
}

#[test]
fn test_standards_without_files_are_absent() {
    let manager = manager(
        r#"
web:
  files: ["*.js"]
api:
  files: ["*.py"]
"#,
    );
    let files = files(&["a.js"]);

    let groups = manager.group_files_by_standard(&files);

    assert!(groups.contains_key("web"));
    assert!(!groups.contains_key("api"));
}

#[test]
fn test_exclude_rules_pass_file_to_next_standard() {
    let manager = manager(
        r#"
app:
  files: ["**/*.js"]
  exclude: ["vendor/"]
vendored:
  files: ["vendor/"]
"#,
    );
    let files = files(&["src/a.js", "vendor/lib.js"]);

    let groups = manager.group_files_by_standard(&files);

    assert_eq!(groups["app"][0].name(), "src/a.js");
    assert_eq!(groups["vendored"][0].name(), "vendor/lib.js");
}

#[test]
fn test_groups_borrow_the_same_instances() {
    let manager = manager("web:\n  files: [\"*.js\"]\n");
    let files = files(&["a.js"]);

    let groups = manager.group_files_by_standard(&files);

    let original = files.find("a.js").unwrap();
    assert!(std::ptr::eq(groups["web"][0], original));
}

#[test]
fn test_find_file_by_name() {
    let files = files(&["src/a.ts", "src/b.ts"]);
    let refs: Vec<&EditedFile> = files.iter().collect();

    let found = FileManager::find_file_by_name(&refs, "src/b.ts").unwrap();
    assert_eq!(found.name(), "src/b.ts");
}

#[test]
fn test_find_file_by_name_miss_is_internal_error() {
    let files = files(&["src/a.ts"]);
    let refs: Vec<&EditedFile> = files.iter().collect();

    let err = FileManager::find_file_by_name(&refs, "/abs/src/a.ts").unwrap_err();
    assert!(matches!(err, GuardError::InternalError(_)));
}
