//! Manager presence probing and bootstrap execution.

use super::catalog::ManagerKind;
use crate::shell;

/// Check whether a manager's CLI is available.
///
/// Runs `<tool> --version` through the shell; present iff the process
/// starts and exits 0. A tool that cannot be started reads as "not
/// installed" so that a missing manager is always installable.
pub fn probe_installed(kind: ManagerKind) -> bool {
    let Some(tool) = kind.descriptor().detection_command() else {
        // Custom has nothing to probe.
        return false;
    };
    shell::execute_check(&format!("{tool} --version"))
}

/// Install the manager itself via its PowerShell bootstrap script.
///
/// The exit status is deliberately not inspected: a freshly bootstrapped
/// manager is only trusted after it passes [`probe_installed`] on the next
/// run, so failure here surfaces as "still missing" rather than an error.
pub fn bootstrap(kind: ManagerKind) {
    let desc = kind.descriptor();
    if desc.bootstrap_script.is_empty() {
        return;
    }

    tracing::info!(manager = desc.name, "running bootstrap script");
    let result = shell::execute_program(
        "powershell",
        &[
            "-NoProfile",
            "-InputFormat",
            "None",
            "-ExecutionPolicy",
            "Bypass",
            "-Command",
            desc.bootstrap_script,
        ],
        false,
    );
    if let Err(err) = result {
        tracing::warn!(manager = desc.name, %err, "bootstrap script did not start");
    }

    // Winget needs its source list refreshed after a fresh install.
    if kind == ManagerKind::Winget {
        let _ = shell::execute_program(
            "winget",
            &["source", "update", "--accept-source-agreements"],
            true,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_is_never_probed_as_installed() {
        assert!(!probe_installed(ManagerKind::Custom));
    }

    #[test]
    fn probe_missing_manager_is_false_not_error() {
        // None of the Windows managers exist on a typical dev host; the
        // probe must degrade to false either way.
        let _ = probe_installed(ManagerKind::Chocolatey);
    }

    #[test]
    fn bootstrap_custom_is_a_no_op() {
        bootstrap(ManagerKind::Custom);
    }
}
