//! Installed-software inventory probe.
//!
//! The host's installed-software listing is queried exactly once per run
//! (a single `winget list`, not one query per package) and each declared
//! package is classified against it by case-insensitive substring match.
//! The substring heuristic can both under- and over-match; it is kept
//! because the listing carries no stable identifiers for every source.

use crate::managers::ManagerKind;
use crate::packages::PackageSpec;
use crate::shell;

/// A lowercased snapshot of the host's installed-software listing.
#[derive(Debug, Clone)]
pub struct Inventory {
    listing: String,
}

impl Inventory {
    /// Query the host listing once via `winget list`.
    ///
    /// Returns `None` when the tool is missing or errors; the caller
    /// degrades to "nothing installed" with a warning instead of failing
    /// the run.
    pub fn fetch() -> Option<Self> {
        let result = shell::execute_program(
            "winget",
            &["list", "--accept-source-agreements"],
            true,
        );
        match result {
            Ok(r) if r.success => Some(Self::from_listing(&r.stdout)),
            Ok(r) => {
                tracing::warn!(code = ?r.exit_code, "winget list exited non-zero");
                None
            }
            Err(err) => {
                tracing::warn!(%err, "winget list could not be started");
                None
            }
        }
    }

    /// Build an inventory from raw listing text.
    pub fn from_listing(listing: &str) -> Self {
        Self {
            listing: listing.to_lowercase(),
        }
    }

    /// Case-insensitive substring search over the listing.
    pub fn contains(&self, identifier: &str) -> bool {
        self.listing.contains(&identifier.to_lowercase())
    }
}

/// Set each package's `installed` flag from the inventory.
///
/// A non-Custom package is installed iff any of its identifiers appears in
/// the listing. `Custom` entries represent actions, not installable
/// software, and are always classified as not installed.
pub fn classify(packages: &mut [PackageSpec], inventory: &Inventory) {
    for package in packages.iter_mut() {
        package.installed = if package.manager == ManagerKind::Custom {
            false
        } else {
            package
                .identifiers
                .iter()
                .any(|id| inventory.contains(id))
        };
    }
}
