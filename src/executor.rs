//! Plan execution.
//!
//! Everything here runs synchronously, one external process at a time.
//! A package install that exits non-zero is reported and the remaining
//! installs continue; each install is independent and best-effort. The
//! one exception is the bulk upgrade at the end of an unattended run,
//! whose failure is fatal for that run.

use crate::error::{DeployError, Result};
use crate::managers::{self, ManagerKind};
use crate::packages::PackageSpec;
use crate::shell;
use crate::ui::UserInterface;

/// Bootstrap each missing manager, then instruct the user to restart.
///
/// Returning normally signals "needs restart"; it is not an error. A
/// manager bootstrapped in this process is only trusted after the next
/// run re-probes it with a fresh environment.
pub fn run_bootstraps(kinds: &[ManagerKind], ui: &mut dyn UserInterface) {
    for kind in kinds {
        ui.message(&format!("Installing {}...", kind.name()));
        managers::bootstrap(*kind);
        ui.success(&format!("{} bootstrap finished", kind.name()));
    }
    ui.warning("Please restart windeploy before installing packages.");
}

/// Install each package in order, one at a time.
///
/// Failures are reported but never abort the remaining installs.
pub fn install_all(packages: &[PackageSpec], ui: &mut dyn UserInterface) {
    for package in packages {
        install_one(package, ui);
    }
}

fn install_one(package: &PackageSpec, ui: &mut dyn UserInterface) {
    let command = package.install_command_line();
    ui.message(&format!("Install/command \"{}\" started...", package.name));
    tracing::debug!(package = %package.name, %command, "running install");

    match shell::execute(&command, false) {
        Ok(result) if result.success => {
            ui.message(&format!("Install/command \"{}\" finished!", package.name));
        }
        Ok(result) => {
            ui.error(&format!(
                "\"{}\" exited with code {:?}; continuing with remaining packages",
                package.name, result.exit_code
            ));
        }
        Err(err) => {
            ui.error(&format!(
                "\"{}\" could not be started ({err}); continuing with remaining packages",
                package.name
            ));
        }
    }
}

/// Upgrade everything through the primary manager.
///
/// Runs after the individual installs of an unattended run; a failure here
/// is fatal for that run but does not undo prior installs.
pub fn bulk_upgrade() -> Result<()> {
    let result = shell::execute_program(
        "winget",
        &[
            "upgrade",
            "--all",
            "--silent",
            "--accept-package-agreements",
            "--accept-source-agreements",
        ],
        false,
    )
    .map_err(|err| match err {
        DeployError::CommandFailed { code, .. } => DeployError::BulkUpgradeFailed { code },
        other => other,
    })?;

    if result.success {
        Ok(())
    } else {
        Err(DeployError::BulkUpgradeFailed {
            code: result.exit_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mock::MockUI;

    fn custom(name: &str, command: &str) -> PackageSpec {
        PackageSpec::new(
            name.to_string(),
            vec![command.to_string()],
            ManagerKind::Custom,
        )
    }

    #[test]
    fn install_all_reports_failures_and_continues() {
        let packages = vec![
            custom("Fails", "exit 7"),
            custom("Succeeds", "exit 0"),
        ];
        let mut ui = MockUI::new();

        install_all(&packages, &mut ui);

        assert_eq!(ui.errors.len(), 1);
        assert!(ui.errors[0].contains("Fails"));
        // The second package still ran to completion.
        assert!(ui
            .messages
            .iter()
            .any(|m| m.contains("Succeeds") && m.contains("finished")));
    }

    #[test]
    fn install_all_of_nothing_is_quiet() {
        let mut ui = MockUI::new();
        install_all(&[], &mut ui);
        assert!(ui.messages.is_empty());
        assert!(ui.errors.is_empty());
    }

    #[test]
    fn bootstrap_run_always_asks_for_restart() {
        let mut ui = MockUI::new();

        run_bootstraps(&[], &mut ui);

        assert!(ui.warnings.iter().any(|w| w.contains("restart")));
    }

    // Would start a real upgrade on a Windows host with winget present.
    #[cfg(not(windows))]
    #[test]
    fn bulk_upgrade_without_winget_is_fatal() {
        let err = bulk_upgrade().unwrap_err();
        assert!(matches!(err, DeployError::BulkUpgradeFailed { .. }));
    }
}
