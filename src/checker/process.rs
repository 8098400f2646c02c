//! Subprocess execution for external tools.
//!
//! Tools are fed on stdin and read on stdout/stderr concurrently so a chatty
//! tool cannot deadlock on a full pipe. Every run is bounded by a timeout;
//! a tool that does not exit in time is killed and reported as a failure.

use crate::error::{GuardError, Result};
use std::io::{Read, Write};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Maximum number of output lines kept in failure messages.
pub const FAILURE_OUTPUT_MAX_LINES: usize = 50;

/// Maximum number of output characters kept in failure messages.
pub const FAILURE_OUTPUT_MAX_CHARS: usize = 4096;

/// Captured result of a finished tool run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code (None if the process was terminated by a signal).
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    /// Describe a failed run for a `ToolError`, with output truncated.
    pub fn describe_failure(&self, command: &str) -> String {
        let code = self
            .exit_code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "none (terminated by signal)".to_string());

        let combined = if self.stderr.is_empty() {
            self.stdout.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        };

        let mut msg = format!("{} failed with exit code {}", command, code);
        let truncated = truncate_output(
            combined.trim(),
            FAILURE_OUTPUT_MAX_LINES,
            FAILURE_OUTPUT_MAX_CHARS,
        );
        if !truncated.is_empty() {
            msg.push_str("\nOutput (truncated):\n");
            msg.push_str(&truncated);
        }
        msg
    }
}

/// Run `program` with `args` in `cwd`, writing `input` to its stdin.
///
/// # Returns
///
/// * `Ok(ToolOutput)` - The process exited (with any exit code)
/// * `Err(GuardError::ToolError)` - It could not be started or exceeded `timeout`
pub fn run_with_input(
    program: &str,
    args: &[String],
    cwd: &Path,
    input: &[u8],
    timeout: Duration,
) -> Result<ToolOutput> {
    let mut child = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            GuardError::ToolError(format!(
                "failed to execute '{}': {}\nFix: ensure the tool is installed.",
                program, e
            ))
        })?;

    let writer = child.stdin.take().map(|mut stdin| {
        let input = input.to_vec();
        // A tool may exit without draining stdin; the broken pipe is not our failure.
        std::thread::spawn(move || {
            let _ = stdin.write_all(&input);
        })
    });
    let stdout_reader = child.stdout.take().map(spawn_reader);
    let stderr_reader = child.stderr.take().map(spawn_reader);

    let exit_code = match wait_with_timeout(&mut child, timeout)? {
        Some(code) => code,
        None => {
            return Err(GuardError::ToolError(format!(
                "'{}' did not finish within {} seconds and was killed",
                program,
                timeout.as_secs_f64()
            )));
        }
    };

    if let Some(handle) = writer {
        let _ = handle.join();
    }

    Ok(ToolOutput {
        exit_code,
        stdout: join_reader(stdout_reader),
        stderr: join_reader(stderr_reader),
    })
}

fn spawn_reader<R: Read + Send + 'static>(mut source: R) -> JoinHandle<Vec<u8>> {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = source.read_to_end(&mut buf);
        buf
    })
}

fn join_reader(handle: Option<JoinHandle<Vec<u8>>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}

/// Wait for a child process with timeout.
///
/// Returns `Some(exit_code)` when it exited, `None` when it was killed on timeout.
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> Result<Option<Option<i32>>> {
    let start = Instant::now();
    let poll_interval = Duration::from_millis(20);

    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(Some(status.code())),
            Ok(None) => {
                if start.elapsed() >= timeout {
                    // On Unix this is SIGKILL; on Windows it is TerminateProcess.
                    let _ = child.kill();
                    let _ = child.wait();
                    return Ok(None);
                }
                std::thread::sleep(poll_interval);
            }
            Err(e) => {
                let _ = child.kill();
                return Err(GuardError::ToolError(format!(
                    "failed to check process status: {}",
                    e
                )));
            }
        }
    }
}

/// Keep the last `max_lines` lines, then at most the last `max_chars` characters.
pub fn truncate_output(output: &str, max_lines: usize, max_chars: usize) -> String {
    let lines: Vec<&str> = output.lines().collect();

    let relevant_lines: Vec<&str> = if lines.len() > max_lines {
        lines[lines.len() - max_lines..].to_vec()
    } else {
        lines
    };

    let result = relevant_lines.join("\n");

    let char_count = result.chars().count();
    if char_count > max_chars {
        let tail: String = result.chars().skip(char_count - max_chars).collect();
        format!("...(truncated)...\n{}", tail)
    } else {
        result
    }
}
