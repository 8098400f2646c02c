//! Implementation of the `commit-guard checkers` command.

use crate::checker::CheckerRegistry;
use crate::error::Result;
use std::io::Write;

/// Print the checker identities accepted in standards files.
pub fn cmd_checkers() -> Result<()> {
    let stdout = std::io::stdout();
    write_checkers(&CheckerRegistry::with_builtin(), &mut stdout.lock());
    Ok(())
}

fn write_checkers<W: Write>(registry: &CheckerRegistry, out: &mut W) {
    writeln!(out, "Available checkers:").ok();
    for (identity, extensions) in registry.identities() {
        let aliases: Vec<&str> = registry
            .aliases()
            .filter(|(_, target)| *target == identity)
            .map(|(alias, _)| alias)
            .collect();

        write!(out, "  {:<16} extensions: {}", identity, extensions.join(", ")).ok();
        if !aliases.is_empty() {
            write!(out, " (alias: {})", aliases.join(", ")).ok();
        }
        writeln!(out).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_builtin_checkers_with_aliases() {
        let mut out = Vec::new();
        write_checkers(&CheckerRegistry::with_builtin(), &mut out);
        let output = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Available checkers:");
        assert!(lines[1].contains("eslint"));
        assert!(lines[1].contains("extensions: js, ts, tsx"));
        assert!(lines[1].contains("(alias: es_lint)"));
        assert!(lines[2].contains("forbidden_words"));
        assert!(lines[2].contains("extensions: php, js"));
        assert!(lines[2].contains("(alias: pattern)"));
    }
}
