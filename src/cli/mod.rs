//! CLI argument parsing for pystolint.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};

/// Pystolint: Python linting and type-checking with merged configuration.
///
/// Merges a base (bundled or project-declared) configuration with the local
/// pyproject.toml, infers the project's minimum supported Python version, and
/// hands the result to ruff and mypy.
#[derive(Parser, Debug)]
#[command(name = "pystolint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for pystolint.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run ruff and mypy over the given paths with the merged configuration.
    ///
    /// Exits 0 on a clean run, 1 when findings are reported, and greater
    /// than 1 on abnormal failures.
    Check(CheckArgs),

    /// Reformat and autofix the given paths with the merged configuration.
    ///
    /// Runs `ruff format` followed by `ruff check --fix`.
    Format(FormatArgs),

    /// Print the merged configuration document as TOML.
    ShowConfig(ConfigArgs),
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Paths to check (defaults to the current directory).
    pub paths: Vec<String>,

    /// Check only files with uncommitted changes (git diff against HEAD).
    #[arg(long)]
    pub diff: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Arguments for the `format` command.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Paths to format (defaults to the current directory).
    pub paths: Vec<String>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Configuration document locations, shared by all commands.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Path to the local configuration document (default: pyproject.toml).
    #[arg(long)]
    pub local_toml_path: Option<String>,

    /// Path to the base configuration document (default:
    /// tool.pystolint.base_toml_path from the local document, then the
    /// bundled config).
    #[arg(long)]
    pub base_toml_path: Option<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
