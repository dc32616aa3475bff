//! Error types and handling for pkgver
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration errors
//! - [`registry`]: Registry transport and protocol errors
//!
//! A package or version that cannot be found is not an error. It is reported
//! through [`crate::commands::resolve::Outcome::NotFound`] on the normal
//! output channel.

pub mod config;
pub mod registry;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pkgver operations
#[derive(Error, Diagnostic, Debug)]
pub enum PkgverError {
    // Usage errors
    #[error("No package name given")]
    #[diagnostic(
        code(pkgver::usage::missing_package),
        help("Pass a package as `name` or `name@version`, e.g. `pkgver my-tool@1.2.0`")
    )]
    MissingPackageSpec,

    // Configuration errors
    #[error("Missing required configuration: {}", .keys.join(", "))]
    #[diagnostic(
        code(pkgver::config::missing),
        help("Set each value with a flag, a PKGVER_* environment variable, or the config file")
    )]
    ConfigMissing { keys: Vec<String> },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(pkgver::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(pkgver::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(pkgver::config::invalid))]
    ConfigInvalid { message: String },

    // Registry errors
    #[error("Failed to make a request to {url}: {reason}")]
    #[diagnostic(
        code(pkgver::registry::request_failed),
        help("Check the registry host and your network connection")
    )]
    RequestFailed { url: String, reason: String },

    #[error("Registry responded with HTTP {status}: {body}")]
    #[diagnostic(
        code(pkgver::registry::http_status),
        help("A 401 or 403 usually means the token is missing a read_api or read_package_registry scope")
    )]
    HttpStatus { status: u16, body: String },

    #[error("Registry query failed: {}", .messages.join("; "))]
    #[diagnostic(code(pkgver::registry::query_failed))]
    QueryFailed { messages: Vec<String> },

    #[error("Malformed registry response: {reason}")]
    #[diagnostic(code(pkgver::registry::malformed_response))]
    MalformedResponse { reason: String },

    #[error("Project '{path}' not found")]
    #[diagnostic(
        code(pkgver::registry::project_not_found),
        help("Check the project path and that the token can access it")
    )]
    ProjectNotFound { path: String },

    // Output errors
    #[error("Failed to write output: {message}")]
    #[diagnostic(code(pkgver::output::write_failed))]
    OutputFailed { message: String },
}

impl From<std::io::Error> for PkgverError {
    fn from(err: std::io::Error) -> Self {
        PkgverError::OutputFailed {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PkgverError {
    fn from(err: serde_json::Error) -> Self {
        PkgverError::OutputFailed {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PkgverError {
    fn from(err: serde_yaml::Error) -> Self {
        PkgverError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PkgverError>;
