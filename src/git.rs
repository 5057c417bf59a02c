//! Git plumbing for the `check --diff` mode.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling.

use crate::error::{PystolintError, Result};
use std::path::Path;
use std::process::Command;

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(String)` - Trimmed stdout on successful execution
/// * `Err(PystolintError::GitError)` - On non-zero exit code
fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .current_dir(cwd.as_ref())
        .args(args)
        .output()
        .map_err(|e| {
            PystolintError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    if output.status.success() {
        Ok(stdout)
    } else {
        let error_msg = if stderr.is_empty() { stdout } else { stderr };
        Err(PystolintError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            output.status.code().unwrap_or(-1),
            error_msg
        )))
    }
}

/// List files with uncommitted changes (working tree against HEAD).
///
/// Paths are repo-relative, one per entry; an empty vector means a clean
/// working tree. Deleted files appear here too and are dropped later by the
/// existence check in path filtering.
pub fn changed_files<P: AsRef<Path>>(cwd: P) -> Result<Vec<String>> {
    let stdout = run_git(cwd, &["diff", "--name-only", "HEAD"])?;
    Ok(stdout.lines().map(str::to_string).collect())
}
