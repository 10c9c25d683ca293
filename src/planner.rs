//! Install planning.
//!
//! A plan is one of two shapes, never a mix: either every required manager
//! is present and the selection installs in order, or at least one manager
//! is missing and the run only bootstraps managers. A freshly bootstrapped
//! manager is not reliably usable in the same process (PATH and environment
//! are stale), so package installs wait for the next run.

use std::collections::HashSet;

use crate::managers::ManagerKind;
use crate::packages::PackageSpec;

/// The actions computed from a user selection.
#[derive(Debug, Clone, PartialEq)]
pub enum InstallPlan {
    /// All managers present: install the selection, in selection order.
    Install(Vec<PackageSpec>),

    /// One or more managers missing: bootstrap them (first-seen order,
    /// de-duplicated) and ask the user to restart. No installs this run.
    BootstrapOnly(Vec<ManagerKind>),
}

impl InstallPlan {
    /// Whether this plan requires a restart before any install can happen.
    pub fn needs_restart(&self) -> bool {
        matches!(self, InstallPlan::BootstrapOnly(_))
    }
}

/// Compute the plan for a selection.
///
/// `probe` answers whether a manager's CLI is currently available; it is
/// injected so planning is testable without the host tools. Each manager
/// is probed at most once per call. `Custom` is neither probed nor ever
/// bootstrapped.
pub fn plan(selected: &[PackageSpec], mut probe: impl FnMut(ManagerKind) -> bool) -> InstallPlan {
    let mut missing: Vec<ManagerKind> = Vec::new();
    let mut probed: HashSet<ManagerKind> = HashSet::new();

    for package in selected {
        let manager = package.manager;
        if manager.is_custom() {
            continue;
        }
        if probed.insert(manager) && !probe(manager) {
            missing.push(manager);
        }
    }

    if missing.is_empty() {
        InstallPlan::Install(selected.to_vec())
    } else {
        InstallPlan::BootstrapOnly(missing)
    }
}
