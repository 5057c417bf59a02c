//! Command implementations for pystolint.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Commands return the final process exit code: 0 for a
//! clean run, 1 when tools reported findings; abnormal failures surface
//! as errors.

mod check;
mod format;

use crate::cli::{Command, ConfigArgs};
use crate::config::get_merged_config;
use crate::error::{PystolintError, Result};
use crate::exit_codes;
use std::io::Write;
use tempfile::NamedTempFile;
use toml::Table;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<i32> {
    match command {
        Command::Check(args) => check::cmd_check(args),
        Command::Format(args) => format::cmd_format(args),
        Command::ShowConfig(args) => cmd_show_config(args),
    }
}

fn cmd_show_config(args: ConfigArgs) -> Result<i32> {
    let merged = load_config(&args)?;
    print!("{}", render_toml(&merged)?);
    Ok(exit_codes::SUCCESS)
}

/// Load the merged configuration for a command invocation.
fn load_config(args: &ConfigArgs) -> Result<Table> {
    get_merged_config(
        args.local_toml_path.as_deref(),
        args.base_toml_path.as_deref(),
    )
}

/// Write the merged configuration to a temp file for the tools to read.
///
/// The file lives as long as the returned handle; keep it in scope for the
/// duration of the tool runs.
fn write_merged_config(merged: &Table) -> Result<NamedTempFile> {
    let rendered = render_toml(merged)?;

    let mut file = tempfile::Builder::new()
        .prefix("pystolint-")
        .suffix(".toml")
        .tempfile()
        .map_err(|e| {
            PystolintError::UserError(format!("failed to create merged config file: {}", e))
        })?;
    file.write_all(rendered.as_bytes()).map_err(|e| {
        PystolintError::UserError(format!("failed to write merged config file: {}", e))
    })?;

    Ok(file)
}

fn render_toml(merged: &Table) -> Result<String> {
    toml::to_string_pretty(merged)
        .map_err(|e| PystolintError::ConfigError(format!("failed to render merged config: {}", e)))
}
