//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// windeploy - Windows package deployment automation.
#[derive(Debug, Parser)]
#[command(name = "windeploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON manifest listing the packages to deploy
    pub manifest: PathBuf,

    /// Run without prompts: install everything missing, then upgrade all
    #[arg(short, long)]
    pub unattended: bool,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
