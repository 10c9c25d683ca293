//! windeploy - Windows package deployment automation.
//!
//! windeploy takes a declarative JSON list of desired packages, detects
//! which are already present, resolves which package managers (Winget,
//! Chocolatey, Scoop) must themselves be bootstrapped, and drives the
//! installs through the managers' command-line tools.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument parsing
//! - [`elevation`] - Administrator-rights gate and relaunch
//! - [`error`] - Error types and result alias
//! - [`executor`] - Bootstrap, install, and bulk-upgrade execution
//! - [`interrupt`] - Process-level Ctrl-C acknowledgement
//! - [`inventory`] - Installed-software probe and classification
//! - [`managers`] - Package manager catalog, detection, and bootstrap
//! - [`manifest`] - JSON manifest schema and loading
//! - [`packages`] - Resolved package declarations
//! - [`planner`] - Bootstrap-vs-install planning
//! - [`runner`] - Run orchestration
//! - [`shell`] - Blocking shell command execution
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! A run either installs packages or bootstraps missing managers, never
//! both: a manager bootstrapped in this process is not reliably usable
//! until the next run, so the user is asked to restart in between.

pub mod cli;
pub mod elevation;
pub mod error;
pub mod executor;
pub mod interrupt;
pub mod inventory;
pub mod managers;
pub mod manifest;
pub mod packages;
pub mod planner;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{DeployError, Result};
