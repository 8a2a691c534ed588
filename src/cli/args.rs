// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// Prefixer - pull request title prefixes that follow a repository's
/// commit convention.
#[derive(Parser, Debug)]
#[command(name = "prefixer")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Infer commit conventions and build PR title prefixes", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the pull request title prefix
    Prefix(InferArgs),

    /// Print whether the first word of the title should be capitalised
    Capitalize(InferArgs),

    /// Print the detected commit style
    Style(InferArgs),

    /// Print version information
    Version,

    /// Initialize prefixer configuration
    Init(InitArgs),
}

/// Inputs of an inference run.
#[derive(Parser, Debug, Clone)]
#[command(group(ArgGroup::new("history").required(true).args(["commits", "local"])))]
pub struct InferArgs {
    /// Hosting provider of the repository (github or gitlab)
    #[arg(short, long)]
    pub provider: String,

    /// Repository identifier, for example owner/name
    #[arg(short, long)]
    pub repo: String,

    /// JSON file with the repository's commit list
    #[arg(long, value_name = "FILE")]
    pub commits: Option<PathBuf>,

    /// Local checkout to read the commit list from
    #[arg(long, value_name = "DIR")]
    pub local: Option<PathBuf>,

    /// Production dependency being updated (repeatable)
    #[arg(long = "dep", value_name = "NAME")]
    pub deps: Vec<String>,

    /// Development dependency being updated (repeatable)
    #[arg(long = "dev-dep", value_name = "NAME")]
    pub dev_deps: Vec<String>,

    /// Package manager of the dependencies
    #[arg(long, default_value = "cargo")]
    pub package_manager: String,

    /// The pull request fixes a security vulnerability
    #[arg(long)]
    pub security_fix: bool,

    /// Explicit prefix, skipping style inference
    #[arg(long)]
    pub prefix: Option<String>,

    /// Explicit prefix for development-only updates
    #[arg(long)]
    pub prefix_development: Option<String>,

    /// Append the dependency scope to an explicit prefix
    #[arg(long)]
    pub include_scope: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}
