//! Resolved package declarations.

use crate::managers::ManagerKind;

/// A package declared in the manifest, resolved against the manager catalog.
///
/// Immutable after construction except for `installed`, which the inventory
/// probe sets exactly once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageSpec {
    /// Human-readable label, unique within a manifest.
    pub name: String,

    /// Manager-specific identifier(s) plus optional extra CLI arguments,
    /// appended verbatim to the manager's install template. For `Custom`
    /// this sequence is itself the full command.
    pub identifiers: Vec<String>,

    /// The manager this package installs through.
    pub manager: ManagerKind,

    /// Set by the inventory probe; starts false.
    pub installed: bool,
}

impl PackageSpec {
    pub fn new(name: String, identifiers: Vec<String>, manager: ManagerKind) -> Self {
        Self {
            name,
            identifiers,
            manager,
            installed: false,
        }
    }

    /// The full install invocation: manager template + identifiers.
    pub fn install_command(&self) -> Vec<String> {
        self.manager
            .descriptor()
            .install_args
            .iter()
            .map(|s| s.to_string())
            .chain(self.identifiers.iter().cloned())
            .collect()
    }

    /// The install invocation as a single shell command line.
    ///
    /// Installs run through the shell so that `Custom` entries may use
    /// operators and paths with backslashes survive intact.
    pub fn install_command_line(&self) -> String {
        self.install_command().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkg(manager: ManagerKind, identifiers: &[&str]) -> PackageSpec {
        PackageSpec::new(
            "Test".to_string(),
            identifiers.iter().map(|s| s.to_string()).collect(),
            manager,
        )
    }

    #[test]
    fn new_package_starts_not_installed() {
        assert!(!pkg(ManagerKind::Winget, &["Mozilla.Firefox"]).installed);
    }

    #[test]
    fn winget_install_command_prepends_template() {
        let cmd = pkg(ManagerKind::Winget, &["Mozilla.Firefox"]).install_command();
        assert_eq!(cmd[0], "winget");
        assert_eq!(cmd[1], "install");
        assert_eq!(cmd.last().unwrap(), "Mozilla.Firefox");
    }

    #[test]
    fn chocolatey_install_command_keeps_extra_args() {
        let cmd = pkg(ManagerKind::Chocolatey, &["vlc", "--params", "/NoDesktopShortcut"])
            .install_command_line();
        assert_eq!(cmd, "choco install -y vlc --params /NoDesktopShortcut");
    }

    #[test]
    fn custom_identifiers_are_the_whole_command() {
        let cmd = pkg(ManagerKind::Custom, &["reg", "import", "C:\\tweaks.reg"]).install_command();
        assert_eq!(cmd, vec!["reg", "import", "C:\\tweaks.reg"]);
    }
}
