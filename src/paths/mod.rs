//! Candidate-path filtering for the tool pipeline.
//!
//! Raw candidate paths (CLI arguments or a git diff) pass through two
//! filters before reaching ruff and mypy: first only Python files and
//! directories that actually contain Python files are kept, then anything
//! matching a configured exclusion pattern is dropped.

mod exclude;
mod filter;

#[cfg(test)]
mod tests;

// Re-export public API
pub use exclude::filter_excluded;
pub use filter::filter_py_files;
