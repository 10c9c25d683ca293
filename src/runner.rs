//! Run orchestration.
//!
//! One run walks a fixed sequence with no retries: elevation gate, manifest
//! load, a single inventory query, selection (interactive checkbox or the
//! unattended rule), planning, then either manager bootstraps (ending with
//! a restart instruction) or the package installs.

use std::path::PathBuf;

use crate::elevation;
use crate::error::Result;
use crate::executor;
use crate::inventory::{self, Inventory};
use crate::managers;
use crate::manifest;
use crate::packages::PackageSpec;
use crate::planner::{self, InstallPlan};
use crate::ui::UserInterface;

/// Options for one deployment run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Path to the JSON package manifest.
    pub manifest: PathBuf,

    /// Run without prompts and upgrade everything afterwards.
    pub unattended: bool,
}

/// Execute a full deployment run. Returns the process exit code.
pub fn run(opts: &RunOptions, ui: &mut dyn UserInterface) -> Result<i32> {
    elevation::ensure_elevated()?;

    let mut packages = manifest::load_manifest(&opts.manifest)?;

    let spinner = ui.start_spinner("Querying installed packages");
    match Inventory::fetch() {
        Some(inv) => {
            inventory::classify(&mut packages, &inv);
            let installed = packages.iter().filter(|p| p.installed).count();
            spinner.finish_success(&format!(
                "{} of {} packages already installed",
                installed,
                packages.len()
            ));
        }
        None => {
            spinner.finish_and_clear();
            ui.warning("Could not query installed packages via winget; assuming none are installed.");
        }
    }

    if opts.unattended {
        unattended(&packages, ui)
    } else {
        interactive(&packages, ui)
    }
}

fn interactive(packages: &[PackageSpec], ui: &mut dyn UserInterface) -> Result<i32> {
    ui.show_header("windeploy", "Windows package deployment");

    let selected_names = ui.select_packages(packages)?;
    if selected_names.is_empty() {
        ui.warning("No packages selected.");
        return Ok(0);
    }

    let selected: Vec<PackageSpec> = packages
        .iter()
        .filter(|p| selected_names.contains(&p.name))
        .cloned()
        .collect();

    if !ui.confirm("Continue?", true)? {
        ui.warning("Operation cancelled.");
        return Ok(0);
    }

    execute_plan(&selected, ui);
    Ok(0)
}

/// Unattended selection rule: everything not already installed. The final
/// bulk upgrade then refreshes whatever was present before the run.
fn unattended(packages: &[PackageSpec], ui: &mut dyn UserInterface) -> Result<i32> {
    ui.message("Installing packages...");
    let selected: Vec<PackageSpec> = packages
        .iter()
        .filter(|p| !p.installed)
        .cloned()
        .collect();

    if execute_plan(&selected, ui) == Outcome::RestartPending {
        return Ok(0);
    }

    ui.message("Upgrading packages...");
    executor::bulk_upgrade()?;
    ui.success("All packages upgraded.");
    Ok(0)
}

#[derive(Debug, PartialEq)]
enum Outcome {
    Installed,
    RestartPending,
}

fn execute_plan(selected: &[PackageSpec], ui: &mut dyn UserInterface) -> Outcome {
    match planner::plan(selected, managers::probe_installed) {
        InstallPlan::BootstrapOnly(kinds) => {
            for package in selected {
                if kinds.contains(&package.manager) {
                    ui.message(&format!(
                        "\"{}\" needs {} before it can be installed.",
                        package.name,
                        package.manager.name()
                    ));
                }
            }
            executor::run_bootstraps(&kinds, ui);
            Outcome::RestartPending
        }
        InstallPlan::Install(packages) => {
            executor::install_all(&packages, ui);
            Outcome::Installed
        }
    }
}
