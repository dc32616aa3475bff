//! Domain models for pkgver
//!
//! This module contains the plain data handled during one invocation:
//! the parsed request, the package records returned by the registry,
//! and the file records derived from them. None of it outlives the run.

pub mod package;
pub mod request;

pub use package::{FileRecord, PackageRecord};
pub use request::{ResolutionRequest, VersionSelector};
