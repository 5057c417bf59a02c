//! Exit code constants for the pystolint CLI.
//!
//! The contract mirrors the tools being orchestrated:
//! - 0: Clean run, no findings
//! - 1: Findings reported (normal completion)
//! - >1: Abnormal failure
//!
//! Abnormal tool exits propagate the tool's own code instead of one of the
//! constants below.

/// Clean run: no lint or type findings.
pub const SUCCESS: i32 = 0;

/// Findings reported by at least one tool. A normal completion, not an error.
pub const FINDINGS: i32 = 1;

/// User error: bad arguments or an invalid exclusion pattern.
pub const USER_ERROR: i32 = 2;

/// Configuration failure: missing or unparseable TOML document, or a
/// malformed project version shape.
pub const CONFIG_FAILURE: i32 = 3;

/// Git operation failure during `check --diff`.
pub const GIT_FAILURE: i32 = 4;
