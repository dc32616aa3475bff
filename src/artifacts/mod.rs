//! Artifact lookup for a resolved package version
//!
//! Lists the files of one package record and derives their download URLs:
//!
//! ```text
//! <host>/api/v4/projects/<project id>/packages/generic/<name>/<version>/<file name>
//! ```
//!
//! Name, version and file name are percent-encoded as single path segments.
//! An empty file list and a missing package are the same outcome: `None`.

use crate::config::Config;
use crate::domain::{FileRecord, PackageRecord};
use crate::error::Result;
use crate::registry::{Catalog, PackageFile};

/// Download URL of a file in the generic package registry
pub fn download_url(config: &Config, package: &PackageRecord, file_name: &str) -> String {
    format!(
        "{}/api/v4/projects/{}/packages/generic/{}/{}/{}",
        config.host,
        config.project_id,
        urlencoding::encode(&package.name),
        urlencoding::encode(&package.version),
        urlencoding::encode(file_name)
    )
}

/// Build the file record of a listed file
pub fn file_record(config: &Config, package: &PackageRecord, file: PackageFile) -> FileRecord {
    FileRecord {
        resolved_url: download_url(config, package, &file.file_name),
        file_name: file.file_name,
        download_path: file.download_path,
        version: package.version.clone(),
    }
}

/// List the files of a package version, or `None` when it has none
pub fn lookup<C: Catalog + ?Sized>(
    catalog: &C,
    config: &Config,
    package: &PackageRecord,
) -> Result<Option<Vec<FileRecord>>> {
    let files = catalog.list_files(package)?;
    if files.is_empty() {
        tracing::info!(package = %package.name, version = %package.version, "Package has no files");
        return Ok(None);
    }

    Ok(Some(
        files
            .into_iter()
            .map(|file| file_record(config, package, file))
            .collect(),
    ))
}
