//! Package and file records
//!
//! Records are immutable once built. Field names serialize in camelCase,
//! matching the registry's own spelling.

use serde::{Deserialize, Serialize};

/// A single published package version as listed by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    /// Registry-assigned global id (e.g., "gid://gitlab/Packages::Package/42")
    pub id: String,

    /// Package name
    pub name: String,

    /// Version string exactly as published
    pub version: String,
}

impl PackageRecord {
    #[allow(dead_code)] // Used by tests
    pub fn new(id: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: version.into(),
        }
    }
}

/// A downloadable file belonging to a resolved package version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// File name within the package
    pub file_name: String,

    /// Registry-relative download path
    pub download_path: String,

    /// Absolute download URL
    pub resolved_url: String,

    /// Version of the owning package
    pub version: String,
}
