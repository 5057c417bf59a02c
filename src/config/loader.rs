//! Loading and merging of the local and base configuration documents.

use super::merge::deep_merge;
use crate::error::{PystolintError, Result};
use crate::version::python_min_version;
use toml::{Table, Value};

/// Local document name used when no path is given.
pub const DEFAULT_LOCAL_TOML_PATH: &str = "pyproject.toml";

/// Bundled default configuration, used when neither an explicit base path nor
/// `tool.pystolint.base_toml_path` is present.
const DEFAULT_BASE_TOML: &str = include_str!("../../default_config/pyproject.toml");

/// Load, version-inject, and merge the base and local configuration documents.
///
/// The base document path is resolved with this precedence: explicit
/// `base_toml_path` argument, then a `tool.pystolint.base_toml_path` string in
/// the local document, then the bundled default config.
///
/// If the local document declares a minimum Python version (Poetry or
/// PEP 621 shape), it is written into the base document's
/// `tool.ruff.target-version` and `tool.mypy.python_version` before the merge,
/// so local overrides of those fields still win.
///
/// A missing or unparseable document is a hard failure; no partial merge is
/// attempted.
pub fn get_merged_config(
    local_toml_path: Option<&str>,
    base_toml_path: Option<&str>,
) -> Result<Table> {
    let local_path = local_toml_path.unwrap_or(DEFAULT_LOCAL_TOML_PATH);
    let local = load_toml(local_path)?;

    let mut merged = match get_base_toml_path(base_toml_path, &local)? {
        Some(path) => load_toml(&path)?,
        None => parse_toml(DEFAULT_BASE_TOML, "bundled default config")?,
    };

    if let Some(version) = python_min_version(&local)? {
        set_nested(
            &mut merged,
            &["tool", "ruff"],
            "target-version",
            Value::String(version.ruff_target()),
        );
        set_nested(
            &mut merged,
            &["tool", "mypy"],
            "python_version",
            Value::String(version.to_string()),
        );
    }

    deep_merge(&mut merged, &local);

    Ok(merged)
}

/// Exclusion patterns declared in the merged document (`tool.mypy.exclude`).
///
/// Mypy accepts either a single regex string or a list of them; both forms
/// are supported here. Absent or unrecognized values yield no patterns.
pub fn excluded_patterns(merged: &Table) -> Vec<String> {
    let exclude = merged
        .get("tool")
        .and_then(Value::as_table)
        .and_then(|tool| tool.get("mypy"))
        .and_then(Value::as_table)
        .and_then(|mypy| mypy.get("exclude"));

    match exclude {
        Some(Value::String(pattern)) => vec![pattern.clone()],
        Some(Value::Array(patterns)) => patterns
            .iter()
            .filter_map(|p| p.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Resolve the base document path, if any; `None` means the bundled default.
fn get_base_toml_path(
    base_toml_path_provided: Option<&str>,
    local: &Table,
) -> Result<Option<String>> {
    if let Some(path) = base_toml_path_provided {
        return Ok(Some(path.to_string()));
    }
    Ok(nested_str(local, &["tool", "pystolint", "base_toml_path"])?.map(str::to_string))
}

fn load_toml(path: &str) -> Result<Table> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        PystolintError::ConfigError(format!("failed to read config file '{}': {}", path, e))
    })?;
    parse_toml(&content, path)
}

fn parse_toml(content: &str, source: &str) -> Result<Table> {
    toml::from_str(content).map_err(|e| {
        PystolintError::ConfigError(format!("failed to parse TOML from '{}': {}", source, e))
    })
}

/// Look up a string at a nested key path. Missing keys along the way yield
/// `None`; a non-table intermediate or non-string leaf is a config error.
fn nested_str<'a>(table: &'a Table, keys: &[&str]) -> Result<Option<&'a str>> {
    let mut current = table;
    for key in &keys[..keys.len() - 1] {
        current = match current.get(*key) {
            Some(Value::Table(nested)) => nested,
            Some(other) => {
                return Err(PystolintError::ConfigError(format!(
                    "expected '{}' to be a table, got {}",
                    key,
                    other.type_str()
                )));
            }
            None => return Ok(None),
        };
    }
    match current.get(keys[keys.len() - 1]) {
        Some(Value::String(value)) => Ok(Some(value)),
        Some(other) => Err(PystolintError::ConfigError(format!(
            "expected '{}' to be a string, got {}",
            keys.join("."),
            other.type_str()
        ))),
        None => Ok(None),
    }
}

/// Set `key` to `value` under the nested table path `parents`, creating
/// intermediate tables as needed. A non-table value in the way is replaced.
fn set_nested(table: &mut Table, parents: &[&str], key: &str, value: Value) {
    let mut current = table;
    for parent in parents {
        let entry = current
            .entry(parent.to_string())
            .or_insert_with(|| Value::Table(Table::new()));
        if !matches!(entry, Value::Table(_)) {
            *entry = Value::Table(Table::new());
        }
        let Value::Table(nested) = entry else {
            unreachable!()
        };
        current = nested;
    }
    current.insert(key.to_string(), value);
}
