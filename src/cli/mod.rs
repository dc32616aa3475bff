//! CLI definitions using clap derive API
//!
//! This module is organized into submodules by argument group:
//! - config: Registry connection and logging settings

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};

pub mod config;

pub use config::ConfigArgs;

use crate::commands::resolve::OutputMode;

/// pkgver - package version resolver
///
/// Resolve a generic package in a GitLab package registry to a published version.
#[derive(Parser, Debug)]
#[command(
    name = "pkgver",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve a registry package to a published version",
    long_about = "Resolves a generic package in a GitLab package registry to its latest \
                  or an exact published version, and optionally lists the download URLs \
                  of that version's files. Prints a single JSON value on stdout.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  pkgver my-tool                        \x1b[90m# Latest version of my-tool\x1b[0m\n   \
                  pkgver my-tool@1.4.0                  \x1b[90m# Exactly version 1.4.0\x1b[0m\n   \
                  pkgver my-tool --files                \x1b[90m# Files of the latest version\x1b[0m\n   \
                  pkgver my-tool@1.4.0 --file tool.zip  \x1b[90m# One file of version 1.4.0\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Package to resolve, as `name` or `name@version`
    #[arg(value_name = "PACKAGE")]
    pub package: Option<String>,

    /// Print every file of the resolved version with its download URL
    #[arg(long, conflicts_with = "file")]
    pub files: bool,

    /// Print only the file with this name from the resolved version
    #[arg(long, value_name = "NAME")]
    pub file: Option<String>,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Enable verbose output (debug logging on stderr)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Output mode selected by the flags
    pub fn output_mode(&self) -> OutputMode {
        match (&self.file, self.files) {
            (Some(name), _) => OutputMode::File(name.clone()),
            (None, true) => OutputMode::Files,
            (None, false) => OutputMode::Package,
        }
    }
}
