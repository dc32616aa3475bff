//! Version resolution
//!
//! Selects exactly one package record for a request from the records the
//! catalog returned, or nothing.
//!
//! ## Algorithm
//!
//! 1. No records: nothing to select.
//! 2. Sort all versions by semantic-version precedence.
//! 3. `latest` targets the highest version, an exact selector targets itself.
//! 4. The first record, in catalog order, whose version equals the target
//!    string wins. Duplicate publishes of one version resolve to the first seen.
//!
//! Records are not re-filtered by name: the catalog query already filters.
//! Exact selectors are compared verbatim, so `1.0` never matches `1.0.0`.

use crate::domain::{PackageRecord, ResolutionRequest, VersionSelector};
use crate::version;

/// Select the record matching a request
pub fn resolve<'a>(
    request: &ResolutionRequest,
    records: &'a [PackageRecord],
) -> Option<&'a PackageRecord> {
    if records.is_empty() {
        tracing::debug!(package = %request.package_name, "No published versions");
        return None;
    }

    let mut versions: Vec<&str> = records.iter().map(|r| r.version.as_str()).collect();
    version::sort_ascending(&mut versions);

    let invalid = versions.iter().filter(|v| !version::is_valid(v)).count();
    if invalid > 0 {
        tracing::debug!(
            package = %request.package_name,
            invalid,
            "Some versions are not semantic versions and sort lowest"
        );
    }
    tracing::debug!(versions = ?versions, "Sorted versions");

    let target = match &request.selector {
        VersionSelector::Latest => version::max(&versions)?,
        VersionSelector::Exact(version) => version.as_str(),
    };

    let found = records.iter().find(|r| r.version == target);
    match found {
        Some(record) => tracing::info!(
            package = %record.name,
            version = %record.version,
            id = %record.id,
            "Resolved package"
        ),
        None => tracing::info!(package = %request.package_name, version = target, "Version not found"),
    }
    found
}
