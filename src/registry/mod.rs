//! Package registry access
//!
//! The [`Catalog`] trait is the seam between resolution logic and the network:
//! - `graphql.rs`: blocking GraphQL-over-HTTP transport
//! - `gitlab.rs`: GitLab package registry catalog built on that transport
//!
//! Each catalog call is a single bounded request. There is no pagination
//! beyond [`PAGE_SIZE`] records and no retry.

pub mod gitlab;
pub mod graphql;

pub use gitlab::GitlabCatalog;

use serde::Deserialize;

use crate::domain::PackageRecord;
use crate::error::Result;

/// Upper bound on records fetched by one catalog query
pub const PAGE_SIZE: usize = 100;

/// A file entry as listed by the registry, before URL derivation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageFile {
    pub file_name: String,
    pub download_path: String,
}

impl PackageFile {
    #[allow(dead_code)] // Used by tests
    pub fn new(file_name: impl Into<String>, download_path: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            download_path: download_path.into(),
        }
    }
}

/// Read access to a package catalog
pub trait Catalog {
    /// List published versions of a package, at most [`PAGE_SIZE`] of them
    fn list_packages(&self, package_name: &str) -> Result<Vec<PackageRecord>>;

    /// List files of one package version, at most [`PAGE_SIZE`] of them
    fn list_files(&self, package: &PackageRecord) -> Result<Vec<PackageFile>>;
}
