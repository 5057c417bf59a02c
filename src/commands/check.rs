//! The `check` command: run ruff and mypy with the merged configuration.

use super::{load_config, write_merged_config};
use crate::cli::CheckArgs;
use crate::config::excluded_patterns;
use crate::error::Result;
use crate::exit_codes;
use crate::git;
use crate::paths::{filter_excluded, filter_py_files};
use crate::tools::{ToolOutput, run_tool};
use std::path::Path;

pub fn cmd_check(args: CheckArgs) -> Result<i32> {
    let merged = load_config(&args.config)?;
    let config_file = write_merged_config(&merged)?;
    let config_path = config_file.path().to_string_lossy().to_string();

    let candidates = if args.diff {
        git::changed_files(Path::new("."))?
    } else if args.paths.is_empty() {
        vec![".".to_string()]
    } else {
        args.paths
    };

    let files = filter_py_files(&candidates);
    let files = filter_excluded(&files, &excluded_patterns(&merged))?;

    if files.is_empty() {
        println!("No Python files to check.");
        return Ok(exit_codes::SUCCESS);
    }

    let mut ruff_args = vec!["check", "--config", config_path.as_str()];
    ruff_args.extend(files.iter().map(String::as_str));
    let ruff = run_tool("ruff", &ruff_args)?;
    report(&ruff);

    let mut mypy_args = vec!["--config-file", config_path.as_str()];
    mypy_args.extend(files.iter().map(String::as_str));
    let mypy = run_tool("mypy", &mypy_args)?;
    report(&mypy);

    if ruff.has_findings() || mypy.has_findings() {
        Ok(exit_codes::FINDINGS)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

/// Relay a tool's output to our own streams.
fn report(output: &ToolOutput) {
    print!("{}", output.stdout);
    eprint!("{}", output.stderr);
}
