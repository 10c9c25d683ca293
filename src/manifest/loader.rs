//! Manifest file loading.

use std::fs;
use std::path::Path;

use crate::error::{DeployError, Result};
use crate::managers::ManagerKind;
use crate::packages::PackageSpec;

use super::schema::PackageRecord;

/// Load and resolve a JSON manifest.
///
/// A malformed file or a record referencing a manager outside the closed
/// set is fatal for the run; both surface as errors here, before anything
/// has been executed.
pub fn load_manifest(path: &Path) -> Result<Vec<PackageSpec>> {
    if !path.exists() {
        return Err(DeployError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path)?;
    let records: Vec<PackageRecord> =
        serde_json::from_str(&text).map_err(|e| DeployError::ManifestParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(count = records.len(), path = %path.display(), "manifest loaded");
    records.into_iter().map(resolve).collect()
}

fn resolve(record: PackageRecord) -> Result<PackageSpec> {
    let manager = ManagerKind::from_name(&record.package_manager)?;
    Ok(PackageSpec::new(record.name, record.package_name, manager))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn manifest_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_valid_manifest() {
        let file = manifest_file(
            r#"[
                {"name": "Firefox", "package_name": ["Mozilla.Firefox"], "package_manager": "Winget"},
                {"name": "Git", "package_name": ["git"], "package_manager": "Chocolatey"}
            ]"#,
        );

        let packages = load_manifest(file.path()).unwrap();

        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].name, "Firefox");
        assert_eq!(packages[0].manager, ManagerKind::Winget);
        assert!(!packages[0].installed);
        assert_eq!(packages[1].manager, ManagerKind::Chocolatey);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_manifest(Path::new("/nonexistent/packages.json")).unwrap_err();
        assert!(matches!(err, DeployError::ManifestNotFound { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let file = manifest_file(r#"[{"name": "Firefox""#);

        let err = load_manifest(file.path()).unwrap_err();

        assert!(matches!(err, DeployError::ManifestParseError { .. }));
    }

    #[test]
    fn unknown_manager_fails_at_load() {
        let file = manifest_file(
            r#"[{"name": "Vim", "package_name": ["vim"], "package_manager": "Apt"}]"#,
        );

        let err = load_manifest(file.path()).unwrap_err();

        match err {
            DeployError::UnknownManager { name } => assert_eq!(name, "Apt"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn custom_records_resolve() {
        let file = manifest_file(
            r#"[{"name": "Tweaks", "package_name": ["reg import tweaks.reg"], "package_manager": "Custom"}]"#,
        );

        let packages = load_manifest(file.path()).unwrap();

        assert_eq!(packages[0].manager, ManagerKind::Custom);
        assert_eq!(packages[0].install_command_line(), "reg import tweaks.reg");
    }
}
