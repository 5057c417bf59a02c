//! Minimum Python version inference from project dependency metadata.
//!
//! A project declares its supported Python range either through Poetry
//! (`tool.poetry.dependencies.python`) or PEP 621 (`project.requires-python`).
//! This module parses those specifiers and produces the lowest supported
//! `MAJOR.MINOR` version, which the config loader injects into the merged
//! document for ruff and mypy.

mod parse;
mod resolve;


// Re-export public API
pub use parse::parse_min_version;
pub use resolve::{PythonVersion, python_min_version};
