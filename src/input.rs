//! Text acquisition and block geometry.
//!
//! The text to render comes from one of three places: command-line
//! arguments joined with single spaces, the whole of stdin when no
//! arguments are given, or (in execute mode) the captured stdout of the
//! assembled string run as a shell command.
//!
//! Width defaults to the longest line's byte length and height to the line
//! count; explicit overrides always win over inference.

use std::io::{self, BufRead};
use std::process::Command;

/// Errors raised while gathering input text. Fatal, like everything else
/// at this boundary.
#[derive(Debug)]
pub enum InputError {
    /// Could not read stdin to completion.
    StdinRead(io::Error),
    /// Execute mode could not spawn the shell.
    SpawnFailed { command: String, source: io::Error },
    /// Execute mode ran the command but it exited non-zero.
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::StdinRead(e) => write!(f, "Failed to read stdin: {}", e),
            InputError::SpawnFailed { command, source } => {
                write!(f, "Failed to execute command '{}': {}", command, source)
            }
            InputError::CommandFailed {
                command,
                exit_code,
                stderr,
            } => {
                write!(
                    f,
                    "Command '{}' exited with code {:?}\n{}",
                    command, exit_code, stderr
                )
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::StdinRead(e) => Some(e),
            InputError::SpawnFailed { source, .. } => Some(source),
            InputError::CommandFailed { .. } => None,
        }
    }
}

/// A rectangular block of text lines plus its resolved output geometry.
/// Line order is vertical order; byte index within a line is the column.
pub struct TextBlock {
    pub lines: Vec<String>,
    pub width: u32,
    pub height: u32,
}

impl TextBlock {
    /// Splits `text` on newlines and resolves geometry. Width falls back
    /// to the longest line's byte length, height to the line count.
    /// Splitting the empty string still yields one (empty) line.
    pub fn from_text(text: &str, width: Option<u32>, height: Option<u32>) -> Self {
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        let inferred_w = lines.iter().map(|l| l.len()).max().unwrap_or(0) as u32;
        let inferred_h = lines.len() as u32;

        Self {
            width: width.unwrap_or(inferred_w),
            height: height.unwrap_or(inferred_h),
            lines,
        }
    }
}

/// Assembles the raw text: argv joined with spaces, or all of stdin when
/// argv is empty. With `execute` set, the assembled string is run through
/// `bash -c` and its stdout substituted.
pub fn gather_text(args: &[String], execute: bool) -> Result<String, InputError> {
    let text = if args.is_empty() {
        read_stdin()?
    } else {
        args.join(" ")
    };

    if execute {
        run_command(&text)
    } else {
        Ok(text)
    }
}

fn read_stdin() -> Result<String, InputError> {
    let stdin = io::stdin();
    let lines: Vec<String> = stdin
        .lock()
        .lines()
        .collect::<Result<_, _>>()
        .map_err(InputError::StdinRead)?;
    Ok(lines.join("\n"))
}

fn run_command(command: &str) -> Result<String, InputError> {
    log::debug!("executing: {}", command);
    let output = Command::new("bash")
        .arg("-c")
        .arg(command)
        .output()
        .map_err(|source| InputError::SpawnFailed {
            command: command.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(InputError::CommandFailed {
            command: command.to_string(),
            exit_code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
