//! The closed set of known package managers.

use crate::error::{DeployError, Result};

/// A supported package manager.
///
/// `Custom` is a pseudo-manager: its packages carry a literal command line
/// instead of identifiers, it is never probed and never bootstrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManagerKind {
    Winget,
    Chocolatey,
    Scoop,
    Custom,
}

/// Static descriptor for one manager: how to detect it, how to invoke an
/// install through it, and how to install the manager itself.
#[derive(Debug)]
pub struct ManagerDescriptor {
    /// Display name, also the manifest spelling.
    pub name: &'static str,

    /// Arguments prepended to a package's identifiers to form its install
    /// command line. Empty for `Custom`.
    pub install_args: &'static [&'static str],

    /// PowerShell script that installs the manager itself. Empty for `Custom`.
    pub bootstrap_script: &'static str,
}

impl ManagerDescriptor {
    /// The executable probed for presence (`<tool> --version`).
    pub fn detection_command(&self) -> Option<&'static str> {
        self.install_args.first().copied()
    }
}

static WINGET: ManagerDescriptor = ManagerDescriptor {
    name: "Winget",
    install_args: &[
        "winget",
        "install",
        "--silent",
        "--accept-package-agreements",
        "--accept-source-agreements",
        "--scope",
        "machine",
    ],
    bootstrap_script:
        "irm https://github.com/asheroto/winget-install/releases/latest/download/winget-install.ps1 | iex",
};

static CHOCOLATEY: ManagerDescriptor = ManagerDescriptor {
    name: "Chocolatey",
    install_args: &["choco", "install", "-y"],
    bootstrap_script: "[System.Net.ServicePointManager]::SecurityProtocol = 3072; \
         iex ((New-Object System.Net.WebClient).DownloadString('https://community.chocolatey.org/install.ps1'))",
};

static SCOOP: ManagerDescriptor = ManagerDescriptor {
    name: "Scoop",
    install_args: &["scoop", "install", "-y"],
    bootstrap_script: "Set-ExecutionPolicy -ExecutionPolicy RemoteSigned -Scope CurrentUser;\
         Invoke-RestMethod -Uri https://get.scoop.sh | Invoke-Expression",
};

static CUSTOM: ManagerDescriptor = ManagerDescriptor {
    name: "Custom",
    install_args: &[],
    bootstrap_script: "",
};

impl ManagerKind {
    /// Resolve a manifest manager name.
    ///
    /// The set is closed: anything else is `UnknownManager`, never a
    /// silent default.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "Winget" => Ok(ManagerKind::Winget),
            "Chocolatey" => Ok(ManagerKind::Chocolatey),
            "Scoop" => Ok(ManagerKind::Scoop),
            "Custom" => Ok(ManagerKind::Custom),
            _ => Err(DeployError::UnknownManager {
                name: name.to_string(),
            }),
        }
    }

    /// The static descriptor for this manager.
    pub fn descriptor(&self) -> &'static ManagerDescriptor {
        match self {
            ManagerKind::Winget => &WINGET,
            ManagerKind::Chocolatey => &CHOCOLATEY,
            ManagerKind::Scoop => &SCOOP,
            ManagerKind::Custom => &CUSTOM,
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        self.descriptor().name
    }

    /// Whether this is the pseudo-manager for literal commands.
    pub fn is_custom(&self) -> bool {
        matches!(self, ManagerKind::Custom)
    }
}

impl std::fmt::Display for ManagerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
