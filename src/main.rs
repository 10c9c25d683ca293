//! windeploy CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use windeploy::cli::Cli;
use windeploy::runner::{self, RunOptions};
use windeploy::ui::{create_ui, OutputMode};
use windeploy::DeployError;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("windeploy=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("windeploy=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    // Covers Ctrl-C outside prompts (bootstraps, installs); prompts map
    // their own interrupt to DeployError::Cancelled below.
    windeploy::interrupt::install_handler();

    tracing::debug!("windeploy starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Prompts need a terminal; unattended runs never prompt.
    let interactive = !cli.unattended && console::user_attended();
    let mut ui = create_ui(interactive, output_mode);

    let opts = RunOptions {
        manifest: cli.manifest.clone(),
        unattended: cli.unattended,
    };

    match runner::run(&opts, ui.as_mut()) {
        Ok(code) => ExitCode::from(code as u8),
        Err(DeployError::Cancelled) => {
            ui.warning("Interrupted by user.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
