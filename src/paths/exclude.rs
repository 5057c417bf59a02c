//! Exclusion-pattern filtering for candidate paths.

use crate::error::{PystolintError, Result};
use regex::Regex;

/// Drop every path matching any of the configured exclusion patterns.
///
/// Patterns are regexes matched with search semantics (a match anywhere in
/// the path string), replicating how mypy and ruff apply their own exclude
/// lists. This matters when passing an explicit file list, which bypasses the
/// tools' directory-walking exclusion logic.
///
/// An invalid pattern is an immediate error, not a skipped entry.
pub fn filter_excluded(file_paths: &[String], excluded_patterns: &[String]) -> Result<Vec<String>> {
    let mut regexes = Vec::with_capacity(excluded_patterns.len());
    for pattern in excluded_patterns {
        let regex = Regex::new(pattern).map_err(|e| {
            PystolintError::UserError(format!("invalid exclusion pattern '{}': {}", pattern, e))
        })?;
        regexes.push(regex);
    }

    let is_excluded = |path: &str| regexes.iter().any(|regex| regex.is_match(path));

    Ok(file_paths
        .iter()
        .filter(|path| !is_excluded(path.as_str()))
        .cloned()
        .collect())
}
