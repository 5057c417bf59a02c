//! Project-metadata inspection for the minimum supported Python version.

use super::parse::parse_min_version;
use crate::error::{PystolintError, Result};
use std::fmt;
use toml::{Table, Value};

/// A Python version in strict `MAJOR.MINOR` form.
///
/// Displays as `"3.10"`; [`PythonVersion::ruff_target`] renders the ruff
/// `target-version` form `"py310"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
}

impl PythonVersion {
    /// Build from a minimal-version string produced by the specifier parser.
    ///
    /// A trailing dot is tolerated; anything other than exactly `MAJOR.MINOR`
    /// after that indicates malformed project metadata and is a hard failure.
    fn from_min_version(version: &str) -> Result<Self> {
        let trimmed = version.trim_end_matches('.');
        let parts: Vec<&str> = trimmed.split('.').collect();
        if let [major, minor] = parts.as_slice() {
            if let (Ok(major), Ok(minor)) = (major.parse(), minor.parse()) {
                return Ok(Self { major, minor });
            }
        }
        Err(PystolintError::ConfigError(format!(
            "version '{}' does not match format MAJOR.MINOR",
            version
        )))
    }

    /// Render as a ruff `target-version` value, e.g. `"py310"`.
    pub fn ruff_target(&self) -> String {
        format!("py{}{}", self.major, self.minor)
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Supported project-metadata shapes for declaring a Python requirement,
/// in priority order. Adding support for another manifest convention means
/// adding a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DependencyShape {
    /// Poetry: `tool.poetry.dependencies.python`.
    Poetry,
    /// PEP 621: `project.requires-python`.
    Pep621,
}

impl DependencyShape {
    /// Detect which shape the document uses. Poetry wins when both are
    /// present; a Poetry project without a `python` dependency does not fall
    /// through to PEP 621.
    fn detect(doc: &Table) -> Option<Self> {
        if doc
            .get("tool")
            .and_then(Value::as_table)
            .is_some_and(|tool| tool.contains_key("poetry"))
        {
            return Some(Self::Poetry);
        }
        if doc
            .get("project")
            .and_then(Value::as_table)
            .is_some_and(|project| project.contains_key("requires-python"))
        {
            return Some(Self::Pep621);
        }
        None
    }

    /// Extract the raw specifier value for this shape, if declared.
    fn specifier<'a>(self, doc: &'a Table) -> Result<Option<&'a Value>> {
        match self {
            Self::Poetry => {
                let Some(poetry) = doc
                    .get("tool")
                    .and_then(Value::as_table)
                    .and_then(|tool| tool.get("poetry"))
                else {
                    return Ok(None);
                };
                let poetry = poetry.as_table().ok_or_else(|| {
                    PystolintError::ConfigError(format!(
                        "expected 'tool.poetry' to be a table, got {}",
                        poetry.type_str()
                    ))
                })?;
                match poetry.get("dependencies") {
                    None => Ok(None),
                    Some(Value::Table(dependencies)) => Ok(dependencies.get("python")),
                    Some(other) => Err(PystolintError::ConfigError(format!(
                        "expected 'tool.poetry.dependencies' to be a table, got {}",
                        other.type_str()
                    ))),
                }
            }
            Self::Pep621 => Ok(doc
                .get("project")
                .and_then(Value::as_table)
                .and_then(|project| project.get("requires-python"))),
        }
    }
}

/// Resolve the minimum supported Python version declared by a project
/// document.
///
/// Returns `Ok(None)` when the document declares no recognized shape, no
/// specifier, or no parseable constraint; absence is a valid terminal state.
/// A non-string specifier or a resolved version outside `MAJOR.MINOR` is
/// malformed upstream metadata and fails hard.
pub fn python_min_version(doc: &Table) -> Result<Option<PythonVersion>> {
    let spec_value = match DependencyShape::detect(doc) {
        Some(shape) => shape.specifier(doc)?,
        None => None,
    };
    let Some(spec_value) = spec_value else {
        return Ok(None);
    };

    let spec = spec_value.as_str().ok_or_else(|| {
        PystolintError::ConfigError(format!(
            "python version specifier must be a string, got {}",
            spec_value.type_str()
        ))
    })?;
    if spec.is_empty() {
        return Ok(None);
    }

    match parse_min_version(spec) {
        Some(min_version) => PythonVersion::from_min_version(&min_version).map(Some),
        None => Ok(None),
    }
}
