//! pkgver - package version resolver
//!
//! A command line tool that resolves a generic package in a GitLab package
//! registry to its latest or an exact published version, and optionally the
//! download URLs of that version's files.

use clap::Parser;
use console::style;
use miette::Diagnostic;

mod artifacts;
mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod logging;
mod registry;
mod resolver;
mod version;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::resolve::run(cli) {
        eprintln!("{} {}", style("Error:").red().bold().for_stderr(), e);
        if let Some(help) = e.help() {
            eprintln!("  {} {}", style("help:").cyan().for_stderr(), help);
        }
        std::process::exit(1);
    }
}
