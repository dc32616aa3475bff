//! Package spec parsing
//!
//! A package spec is a single token, `name` or `name@version`:
//! - `tool` - latest version of `tool`
//! - `tool@1.2.0` - exactly version `1.2.0`
//! - `@scope/tool@V1.2.0` - split at the last `@`, version lower-cased to `v1.2.0`
//!
//! A name must not be blank. Beyond that, names and versions are not
//! validated here; an unknown name simply yields no records from the registry.

use std::fmt;

use crate::error::{PkgverError, Result};

/// Which version of a package to resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSelector {
    /// Highest version by semantic-version precedence
    Latest,
    /// This exact version string
    Exact(String),
}

impl fmt::Display for VersionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSelector::Latest => f.write_str("latest"),
            VersionSelector::Exact(version) => f.write_str(version),
        }
    }
}

/// A parsed package spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    pub package_name: String,
    pub selector: VersionSelector,
}

impl ResolutionRequest {
    /// Parse a package spec token
    ///
    /// # Errors
    ///
    /// Returns [`PkgverError::MissingPackageSpec`] for a blank token or a
    /// blank name before the version, as in `@1.0.0`.
    pub fn parse(spec: &str) -> Result<Self> {
        if spec.trim().is_empty() {
            return Err(PkgverError::MissingPackageSpec);
        }

        let Some((name, version)) = spec.rsplit_once('@') else {
            return Ok(Self {
                package_name: spec.to_string(),
                selector: VersionSelector::Latest,
            });
        };

        // A blank packageName filter matches every package in the project
        if name.trim().is_empty() {
            return Err(PkgverError::MissingPackageSpec);
        }

        let version = version.to_lowercase();
        let selector = if version.is_empty() || version == "latest" {
            VersionSelector::Latest
        } else {
            VersionSelector::Exact(version)
        };

        Ok(Self {
            package_name: name.to_string(),
            selector,
        })
    }

    /// Parse an optional command-line argument, treating absence as a usage error
    pub fn from_arg(arg: Option<&str>) -> Result<Self> {
        arg.map_or(Err(PkgverError::MissingPackageSpec), Self::parse)
    }
}

impl fmt::Display for ResolutionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.package_name, self.selector)
    }
}
