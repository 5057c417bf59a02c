//! Tests for path filtering and exclusion.

use crate::error::PystolintError;
use crate::paths::{filter_excluded, filter_py_files};
use crate::test_support::{create_dir, create_project};
use std::path::Path;

fn entry(root: &Path, rel_path: &str) -> String {
    root.join(rel_path).to_string_lossy().to_string()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// filter_py_files
// ============================================================================

#[test]
fn keeps_py_files_and_nonempty_dirs_in_order() {
    let project = create_project(&[
        ("a.py", "x = 1\n"),
        ("has_py_dir/nested/inner.py", "y = 2\n"),
        ("readme.txt", "hello\n"),
    ]);
    create_dir(project.path(), "empty_dir");
    let root = project.path();

    let paths = vec![
        entry(root, "a.py"),
        entry(root, "empty_dir"),
        entry(root, "has_py_dir"),
        entry(root, "readme.txt"),
    ];
    let filtered = filter_py_files(&paths);

    assert_eq!(filtered, vec![entry(root, "a.py"), entry(root, "has_py_dir")]);
}

#[test]
fn nonexistent_paths_are_dropped() {
    let project = create_project(&[("a.py", "")]);
    let root = project.path();

    let paths = vec![entry(root, "vanished.py"), entry(root, "a.py")];
    assert_eq!(filter_py_files(&paths), vec![entry(root, "a.py")]);
}

#[test]
fn non_python_files_are_dropped() {
    let project = create_project(&[("setup.cfg", ""), ("a.py", "")]);
    let root = project.path();

    let paths = vec![entry(root, "setup.cfg"), entry(root, "a.py")];
    assert_eq!(filter_py_files(&paths), vec![entry(root, "a.py")]);
}

#[test]
fn deeply_nested_python_file_keeps_the_dir() {
    let project = create_project(&[("pkg/sub/deeper/mod.py", "")]);
    let root = project.path();

    let paths = vec![entry(root, "pkg")];
    assert_eq!(filter_py_files(&paths), vec![entry(root, "pkg")]);
}

#[test]
fn dir_with_only_non_python_files_is_dropped() {
    let project = create_project(&[("docs/index.md", ""), ("docs/conf.txt", "")]);
    let root = project.path();

    assert!(filter_py_files(&[entry(root, "docs")]).is_empty());
}

// ============================================================================
// filter_excluded
// ============================================================================

#[test]
fn matching_paths_are_dropped() {
    let paths = strings(&["src/a.py", "src/vendor/b.py"]);
    let filtered = filter_excluded(&paths, &strings(&["vendor/"])).unwrap();
    assert_eq!(filtered, strings(&["src/a.py"]));
}

#[test]
fn matching_is_partial_anywhere_in_the_path() {
    let paths = strings(&["app/migrations/0001.py", "app/models.py"]);
    let filtered = filter_excluded(&paths, &strings(&["migrations"])).unwrap();
    assert_eq!(filtered, strings(&["app/models.py"]));
}

#[test]
fn anchors_are_respected() {
    let paths = strings(&["vendor/a.py", "src/vendor/b.py"]);
    let filtered = filter_excluded(&paths, &strings(&["^vendor/"])).unwrap();
    assert_eq!(filtered, strings(&["src/vendor/b.py"]));
}

#[test]
fn any_of_several_patterns_drops_a_path() {
    let paths = strings(&["build/lib/a.py", "proto/msg_pb2.py", "src/a.py"]);
    let filtered = filter_excluded(&paths, &strings(&["^build/", r"_pb2\.py$"])).unwrap();
    assert_eq!(filtered, strings(&["src/a.py"]));
}

#[test]
fn no_patterns_keeps_everything() {
    let paths = strings(&["src/a.py", "src/b.py"]);
    assert_eq!(filter_excluded(&paths, &[]).unwrap(), paths);
}

#[test]
fn invalid_pattern_is_a_user_error() {
    let err = filter_excluded(&strings(&["src/a.py"]), &strings(&["("])).unwrap_err();
    assert!(matches!(err, PystolintError::UserError(_)));
}
