//! Error types for the pystolint CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for pystolint operations.
///
/// Each variant maps to a specific exit code. Exit codes 0 and 1 are reserved
/// for normal completions (clean run and "findings reported"); every error
/// here exits with a code greater than 1.
#[derive(Error, Debug)]
pub enum PystolintError {
    /// User provided invalid arguments or an invalid exclusion pattern.
    #[error("{0}")]
    UserError(String),

    /// A configuration document is missing, unparseable, or malformed.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Git operation failed (used by `check --diff`).
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// An external tool exited abnormally (status greater than 1).
    #[error("{command} failed with exit code {code}\n{output}")]
    ToolError {
        /// The command line that was run.
        command: String,
        /// The tool's exit code (always > 1).
        code: i32,
        /// Combined stdout/stderr from the failed run.
        output: String,
    },
}

impl PystolintError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Abnormal tool exits propagate the tool's own code so callers can
    /// distinguish "ruff crashed" from "pystolint misconfigured".
    pub fn exit_code(&self) -> i32 {
        match self {
            PystolintError::UserError(_) => exit_codes::USER_ERROR,
            PystolintError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            PystolintError::GitError(_) => exit_codes::GIT_FAILURE,
            PystolintError::ToolError { code, .. } => *code,
        }
    }
}

/// Result type alias for pystolint operations.
pub type Result<T> = std::result::Result<T, PystolintError>;
