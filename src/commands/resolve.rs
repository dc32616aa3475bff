//! Resolve command implementation
//!
//! parse spec -> list packages -> resolve version -> (list files) -> print JSON
//!
//! Exactly one JSON value is written to stdout: the `"not found"` sentinel or
//! the result selected by [`OutputMode`].

use std::io::Write;

use serde::{Serialize, Serializer};

use crate::artifacts;
use crate::cli::Cli;
use crate::config::Config;
use crate::domain::{FileRecord, PackageRecord, ResolutionRequest};
use crate::error::Result;
use crate::logging;
use crate::registry::{Catalog, GitlabCatalog};
use crate::resolver;

/// Sentinel printed when no package, version or file matches
pub const NOT_FOUND: &str = "not found";

/// What to print for a resolved package
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// The package record itself
    Package,
    /// Every file of the resolved version
    Files,
    /// The file with this name
    File(String),
}

/// Result of one resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NotFound,
    Package(PackageRecord),
    Files(Vec<FileRecord>),
    File(FileRecord),
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Outcome::NotFound => serializer.serialize_str(NOT_FOUND),
            Outcome::Package(package) => package.serialize(serializer),
            Outcome::Files(files) => files.serialize(serializer),
            Outcome::File(file) => file.serialize(serializer),
        }
    }
}

/// Run the command with parsed CLI arguments
pub fn run(cli: Cli) -> Result<()> {
    let mode = cli.output_mode();
    let request = ResolutionRequest::from_arg(cli.package.as_deref())?;
    let config = Config::load(&cli.config, cli.verbose)?;

    logging::init(config.log_level);
    tracing::info!(
        host = %config.host,
        token_defined = !config.token.is_empty(),
        project = %config.project,
        project_id = config.project_id,
        config_file = ?config.config_file,
        "Current config"
    );

    let catalog = GitlabCatalog::new(&config)?;
    let outcome = execute(&catalog, &config, &request, &mode)?;

    let stdout = std::io::stdout();
    write_outcome(&mut stdout.lock(), &outcome)
}

/// Resolve a request against a catalog
pub fn execute<C: Catalog + ?Sized>(
    catalog: &C,
    config: &Config,
    request: &ResolutionRequest,
    mode: &OutputMode,
) -> Result<Outcome> {
    tracing::debug!(request = %request, "Resolving");

    let records = catalog.list_packages(&request.package_name)?;
    let Some(package) = resolver::resolve(request, &records) else {
        return Ok(Outcome::NotFound);
    };

    if *mode == OutputMode::Package {
        return Ok(Outcome::Package(package.clone()));
    }

    let Some(files) = artifacts::lookup(catalog, config, package)? else {
        return Ok(Outcome::NotFound);
    };

    Ok(match mode {
        OutputMode::File(name) => files
            .into_iter()
            .find(|f| &f.file_name == name)
            .map_or(Outcome::NotFound, Outcome::File),
        _ => Outcome::Files(files),
    })
}

/// Write an outcome as pretty JSON followed by a newline
pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, outcome)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
