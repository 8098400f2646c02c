//! Console output of the `check-staged` command.

use owo_colors::{OwoColorize, Stream::Stdout};
use std::io::Write;

/// Width of the banner blocks.
const BANNER_WIDTH: usize = 29;

/// Writes banners, headings, and violation messages.
///
/// Write failures are ignored: the exit code carries the verdict.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn start(&mut self) {
        self.banner(&["", "PRE-COMMIT HOOK", ""], Banner::Start);
        writeln!(self.out).ok();
    }

    /// Warn that some hunks were numbered from zero.
    pub fn malformed_hunks(&mut self, count: usize) {
        let text = format!(
            "warning: {} hunk header(s) could not be read; their lines are numbered from 0",
            count
        );
        writeln!(self.out, "{}", text.if_supports_color(Stdout, |s| s.yellow())).ok();
    }

    pub fn standard(&mut self, name: &str) {
        let text = format!("{} standard check...", name);
        writeln!(self.out, "{}", text.if_supports_color(Stdout, |s| s.green())).ok();
    }

    /// Heading followed by every message of one checker.
    pub fn violations(&mut self, checker: &str, messages: &[String]) {
        let heading = format!("{} found the following errors", checker);
        writeln!(
            self.out,
            "{}",
            heading.if_supports_color(Stdout, |s| s.black().on_yellow().to_string())
        )
        .ok();
        for message in messages {
            writeln!(self.out, "{}", message).ok();
        }
    }

    pub fn finish(&mut self, accepted: bool) {
        writeln!(self.out).ok();
        if accepted {
            self.banner(&["", "COMMIT ACCEPTED", ""], Banner::Accepted);
        } else {
            self.banner(
                &["", "COMMIT REJECTED", "(git commit --no-verify)", ""],
                Banner::Rejected,
            );
        }
    }

    fn banner(&mut self, lines: &[&str], kind: Banner) {
        for line in lines {
            let text = format!("{:^width$}", line, width = BANNER_WIDTH);
            let styled = match kind {
                Banner::Start => text
                    .if_supports_color(Stdout, |s| s.black().on_cyan().to_string())
                    .to_string(),
                Banner::Accepted => text
                    .if_supports_color(Stdout, |s| s.black().on_green().to_string())
                    .to_string(),
                Banner::Rejected => text
                    .if_supports_color(Stdout, |s| s.white().on_red().to_string())
                    .to_string(),
            };
            writeln!(self.out, "{}", styled).ok();
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Banner {
    Start,
    Accepted,
    Rejected,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Reporter<&mut Vec<u8>>)) -> String {
        let mut out = Vec::new();
        f(&mut Reporter::new(&mut out));
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_start_banner() {
        let output = render(|r| r.start());
        assert!(output.contains("PRE-COMMIT HOOK"));
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn test_accepted_banner() {
        let output = render(|r| r.finish(true));
        assert!(output.contains("COMMIT ACCEPTED"));
        assert!(!output.contains("--no-verify"));
    }

    #[test]
    fn test_rejected_banner_mentions_bypass() {
        let output = render(|r| r.finish(false));
        assert!(output.contains("COMMIT REJECTED"));
        assert!(output.contains("(git commit --no-verify)"));
    }

    #[test]
    fn test_violations_heading_then_messages() {
        let output = render(|r| {
            r.violations(
                "ForbiddenWords",
                &["\"dump\" found in a.php".to_string(), "\"dd\" found in b.php".to_string()],
            )
        });
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].contains("ForbiddenWords found the following errors"));
        assert_eq!(lines[1], "\"dump\" found in a.php");
        assert_eq!(lines[2], "\"dd\" found in b.php");
    }

    #[test]
    fn test_standard_heading() {
        let output = render(|r| r.standard("web"));
        assert!(output.contains("web standard check..."));
    }
}
