//! Manifest record schema.

use serde::Deserialize;

/// One manifest entry, as written by the user.
///
/// ```json
/// {
///   "name": "Firefox",
///   "package_name": ["Mozilla.Firefox"],
///   "package_manager": "Winget"
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PackageRecord {
    /// Display name.
    pub name: String,

    /// Identifier(s) plus optional extra arguments, in order.
    pub package_name: Vec<String>,

    /// Manager name: `Winget`, `Chocolatey`, `Scoop` or `Custom`.
    pub package_manager: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_from_json() {
        let json = r#"{
            "name": "Firefox",
            "package_name": ["Mozilla.Firefox"],
            "package_manager": "Winget"
        }"#;
        let record: PackageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Firefox");
        assert_eq!(record.package_name, vec!["Mozilla.Firefox"]);
        assert_eq!(record.package_manager, "Winget");
    }

    #[test]
    fn record_requires_all_fields() {
        let json = r#"{"name": "Firefox", "package_manager": "Winget"}"#;
        assert!(serde_json::from_str::<PackageRecord>(json).is_err());
    }
}
