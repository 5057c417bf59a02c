//! Minimum-version extraction from dependency version specifiers.

use regex::Regex;
use std::sync::LazyLock;

/// Matches one constraint token: an optional operator immediately followed by
/// a dotted numeric version. Tokens that don't match are ignored.
static CONSTRAINT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(>=|~=|>|\^|)([\d.]+)").expect("constraint pattern compiles"));

/// Extract the minimal version from a version specifier such as
/// `">=3.9,<4.0"` or `"^3.10"`.
///
/// Each comma-separated constraint contributes at most one candidate:
/// - `>=`, `~=`, `^`, or a bare version: the version itself
/// - `>`: the next minor version (`>3.8` gives `3.9`, `>3` gives `3.0`);
///   patch components are ignored, so `>3.8.5` behaves like `>3.8`
/// - any other operator, or a malformed token: nothing
///
/// The result is the greatest candidate under component-wise numeric
/// comparison, or `None` when no constraint yields one.
pub fn parse_min_version(version_spec: &str) -> Option<String> {
    // Remove spaces so "  >= 3.9, < 4.0" tokenizes cleanly.
    let spec: String = version_spec.split_whitespace().collect();

    let mut min_versions: Vec<String> = Vec::new();
    for constraint in spec.split(',') {
        let Some(caps) = CONSTRAINT_PATTERN.captures(constraint) else {
            continue;
        };
        let operator = &caps[1];
        let version = &caps[2];

        match operator {
            ">=" | "~=" | "^" | "" => min_versions.push(version.to_string()),
            ">" => {
                let parts: Vec<&str> = version.split('.').collect();
                if parts.len() == 1 {
                    // ">3" means 3.0 is the first supported version.
                    min_versions.push(format!("{}.0", parts[0]));
                } else if let Ok(minor) = parts[1].parse::<u64>() {
                    min_versions.push(format!("{}.{}", parts[0], minor + 1));
                }
                // A token with an empty minor component (">3.") is skipped
                // like any other malformed constraint.
            }
            _ => {}
        }
    }

    // Most restrictive minimum wins. Comparison must be numeric per
    // component; string comparison would order "3.9" above "3.10".
    min_versions
        .into_iter()
        .max_by_key(|version| version_components(version))
}

/// Dot-separated numeric components, empty segments skipped.
fn version_components(version: &str) -> Vec<u64> {
    version
        .split('.')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse().unwrap_or(u64::MAX))
        .collect()
}
