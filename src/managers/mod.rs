//! Package manager catalog, detection and bootstrap.
//!
//! The set of supported managers is closed: Winget, Chocolatey, Scoop, plus
//! the pseudo-manager `Custom` for literal shell commands. Each real manager
//! carries a detection command, an install argument template, and the
//! PowerShell script that installs the manager itself.

pub mod bootstrap;
pub mod catalog;

pub use bootstrap::{bootstrap, probe_installed};
pub use catalog::{ManagerDescriptor, ManagerKind};
