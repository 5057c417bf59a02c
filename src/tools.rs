//! External tool runner for pystolint.
//!
//! Provides a wrapper around the linting/type-checking tools with captured
//! stdout/stderr. Statuses 0 and 1 are normal tool completions (clean run and
//! "findings reported"); anything greater is an abnormal failure and
//! propagates the tool's own exit code.

use crate::error::{PystolintError, Result};
use std::process::{Command, Output};

/// Captured output of a normally completed tool run.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// The tool's exit status (0 or 1).
    pub code: i32,
    /// Standard output from the command.
    pub stdout: String,
    /// Standard error from the command.
    pub stderr: String,
}

impl ToolOutput {
    fn from_output(code: i32, output: &Output) -> Self {
        Self {
            code,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Returns true if the tool reported findings (status 1).
    pub fn has_findings(&self) -> bool {
        self.code != 0
    }
}

/// Run an external tool and capture its output.
///
/// # Arguments
///
/// * `program` - The tool binary to run (e.g. "ruff", "mypy")
/// * `args` - Command arguments
///
/// # Returns
///
/// * `Ok(ToolOutput)` - The tool completed normally (status 0 or 1)
/// * `Err(PystolintError::ToolError)` - Abnormal exit; carries the tool's
///   own status so it can be propagated as the process exit code
pub fn run_tool(program: &str, args: &[&str]) -> Result<ToolOutput> {
    let output = Command::new(program).args(args).output().map_err(|e| {
        PystolintError::UserError(format!("failed to execute {}: {}", program, e))
    })?;

    // A termination without an exit status (killed by signal) is abnormal.
    let code = output.status.code().unwrap_or(2);

    if code > 1 {
        let tool_output = ToolOutput::from_output(code, &output);
        return Err(PystolintError::ToolError {
            command: command_line(program, args),
            code,
            output: format!("{}{}", tool_output.stdout, tool_output.stderr)
                .trim_end()
                .to_string(),
        });
    }

    Ok(ToolOutput::from_output(code, &output))
}

fn command_line(program: &str, args: &[&str]) -> String {
    // Only the tool name and subcommand matter for error messages; file
    // lists would drown the useful part.
    match args.first() {
        Some(first) if !first.starts_with('-') => format!("{} {}", program, first),
        _ => program.to_string(),
    }
}
