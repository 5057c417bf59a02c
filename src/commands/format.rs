//! The `format` command: reformat and autofix with the merged configuration.

use super::{load_config, write_merged_config};
use crate::cli::FormatArgs;
use crate::config::excluded_patterns;
use crate::error::Result;
use crate::exit_codes;
use crate::paths::{filter_excluded, filter_py_files};
use crate::tools::run_tool;

pub fn cmd_format(args: FormatArgs) -> Result<i32> {
    let merged = load_config(&args.config)?;
    let config_file = write_merged_config(&merged)?;
    let config_path = config_file.path().to_string_lossy().to_string();

    let candidates = if args.paths.is_empty() {
        vec![".".to_string()]
    } else {
        args.paths
    };

    let files = filter_py_files(&candidates);
    let files = filter_excluded(&files, &excluded_patterns(&merged))?;

    if files.is_empty() {
        println!("No Python files to format.");
        return Ok(exit_codes::SUCCESS);
    }

    let file_args: Vec<&str> = files.iter().map(String::as_str).collect();

    let mut format_args = vec!["format", "--config", config_path.as_str()];
    format_args.extend(&file_args);
    let format = run_tool("ruff", &format_args)?;
    print!("{}", format.stdout);
    eprint!("{}", format.stderr);

    // Autofix after reformatting; unfixable findings surface as status 1.
    let mut fix_args = vec!["check", "--fix", "--config", config_path.as_str()];
    fix_args.extend(&file_args);
    let fix = run_tool("ruff", &fix_args)?;
    print!("{}", fix.stdout);
    eprint!("{}", fix.stderr);

    if fix.has_findings() {
        Ok(exit_codes::FINDINGS)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}
