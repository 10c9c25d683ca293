//! Interactive prompts.

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, MultiSelect};

use crate::error::{DeployError, Result};
use crate::packages::PackageSpec;

/// Convert dialoguer errors; an interrupted prompt (Esc / Ctrl-C) becomes
/// `Cancelled` so the run ends gracefully with a success exit.
fn map_dialoguer_err(e: dialoguer::Error) -> DeployError {
    let io_err: std::io::Error = e.into();
    if io_err.kind() == std::io::ErrorKind::Interrupted {
        DeployError::Cancelled
    } else {
        DeployError::Io(io_err)
    }
}

/// Checkbox prompt over the declared packages.
///
/// Already-installed packages keep a check-mark marker in their label.
/// Returns the selected display names in list order; empty when the user
/// confirms without selecting anything.
pub fn select_packages(packages: &[PackageSpec], term: &Term) -> Result<Vec<String>> {
    let labels: Vec<String> = packages
        .iter()
        .map(|p| {
            if p.installed {
                format!("✅ {}", p.name)
            } else {
                p.name.clone()
            }
        })
        .collect();

    let selections = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select the packages to install or update")
        .report(false)
        .items(&labels)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(selections
        .into_iter()
        .map(|i| packages[i].name.clone())
        .collect())
}

/// Yes/no confirmation.
pub fn confirm(question: &str, default: bool, term: &Term) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(question)
        .default(default)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupted_io_maps_to_cancelled() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Interrupted, "ctrl-c");
        let err = map_dialoguer_err(dialoguer::Error::IO(io_err));
        assert!(matches!(err, DeployError::Cancelled));
    }

    #[test]
    fn other_io_maps_to_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        let err = map_dialoguer_err(dialoguer::Error::IO(io_err));
        assert!(matches!(err, DeployError::Io(_)));
    }
}
