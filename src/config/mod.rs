//! Merged configuration for pystolint.
//!
//! This module loads the local `pyproject.toml` and a base (default)
//! configuration document, infers the project's minimum Python version, and
//! deep-merges the two documents with the local one winning on conflicts.
//! The merged result is what gets handed to ruff and mypy.

mod loader;
mod merge;


// Re-export public API
pub use loader::{DEFAULT_LOCAL_TOML_PATH, excluded_patterns, get_merged_config};
pub use merge::deep_merge;
