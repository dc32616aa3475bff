//! Semantic version ordering over plain version strings
//!
//! Registry versions arrive as free-form strings. This module orders them by
//! semantic-version precedence without ever handing a normalized form back to
//! callers: they pass `&str` in and get the same `&str` values out.
//!
//! ## Ordering rules
//!
//! - An optional leading `v`/`V` is ignored.
//! - Missing minor and patch components count as `0`, so `1.2` orders like `1.2.0`.
//! - Build metadata (`+...`) does not affect precedence.
//! - Strings that do not parse sort below every valid version, lexically among themselves.
//! - Versions of equal precedence are ordered by their text, which keeps the
//!   order total and independent of input order.

use std::cmp::Ordering;

use semver::{BuildMetadata, Version};

/// Compare two version strings by semantic-version precedence
pub fn compare(a: &str, b: &str) -> Ordering {
    match (ordering_key(a), ordering_key(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}

/// Sort version strings in ascending precedence
pub fn sort_ascending(versions: &mut [&str]) {
    versions.sort_by(|a, b| compare(a, b));
}

/// Highest version of a set, or `None` when the set is empty
pub fn max<'a>(versions: &[&'a str]) -> Option<&'a str> {
    versions.iter().copied().max_by(|a, b| compare(a, b))
}

/// Whether a string is recognized as a semantic version
pub fn is_valid(version: &str) -> bool {
    ordering_key(version).is_some()
}

/// Parse a version string into the key used for ordering
fn ordering_key(version: &str) -> Option<Version> {
    let trimmed = version.trim();
    let bare = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    let mut parsed = Version::parse(&pad_components(bare)).ok()?;
    parsed.build = BuildMetadata::EMPTY;
    Some(parsed)
}

/// Expand `1` and `1.2` shorthands to three components
///
/// Shorthands are only accepted without pre-release or build suffixes.
fn pad_components(bare: &str) -> String {
    if bare.contains(['-', '+']) {
        return bare.to_string();
    }
    match bare.matches('.').count() {
        0 => format!("{bare}.0.0"),
        1 => format!("{bare}.0"),
        _ => bare.to_string(),
    }
}
