//! Python source-file filtering for candidate paths.

use std::path::Path;
use walkdir::WalkDir;

/// Recognized Python source suffix.
const PY_SUFFIX: &str = ".py";

/// Keep only paths that downstream tools can usefully analyze.
///
/// - an existing plain file ending in `.py` is kept as-is
/// - an existing directory is kept iff at least one `.py` file exists
///   anywhere beneath it; mypy misbehaves when handed a directory with no
///   Python sources, so empty ones must never reach it
/// - anything else (vanished files, non-Python files) is dropped silently
///
/// The result is an order-preserving subsequence of the input.
pub fn filter_py_files(paths: &[String]) -> Vec<String> {
    let mut py_files = Vec::new();
    for path in paths {
        let fs_path = Path::new(path);
        if fs_path.is_file() && path.ends_with(PY_SUFFIX) {
            py_files.push(path.clone());
        } else if fs_path.is_dir() && contains_py_file(fs_path) {
            py_files.push(path.clone());
        }
    }
    py_files
}

/// True if at least one `.py` file exists anywhere beneath `dir`.
///
/// Entries that vanish or are unreadable during the walk are skipped.
fn contains_py_file(dir: &Path) -> bool {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .any(|entry| {
            entry.file_type().is_file() && entry.file_name().to_string_lossy().ends_with(PY_SUFFIX)
        })
}
