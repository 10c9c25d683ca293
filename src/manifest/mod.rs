//! Package manifest loading and resolution.
//!
//! The manifest is a JSON array of records, each naming a package, its
//! manager-specific identifiers, and the manager it installs through.

pub mod loader;
pub mod schema;

pub use loader::load_manifest;
pub use schema::PackageRecord;
