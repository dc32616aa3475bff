//! Runtime configuration for pkgver
//!
//! Settings are layered, highest precedence first:
//! 1. command-line flags
//! 2. `PKGVER_*` environment variables
//! 3. the YAML config file (see [`file`])
//!
//! The result is validated once into an immutable [`Config`] that is passed
//! by reference to everything needing the registry host, token or project.

pub mod file;

pub use file::Settings;

use std::path::PathBuf;

use tracing::Level;

use crate::cli::ConfigArgs;
use crate::error::{Result, config};

/// Log level used when none is configured
pub const DEFAULT_LOG_LEVEL: Level = Level::WARN;

/// Validated configuration for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Registry host without a trailing slash
    pub host: String,

    /// Bearer token
    pub token: String,

    /// Full project path (e.g., group/project)
    pub project: String,

    /// Numeric project id
    pub project_id: u64,

    /// Maximum log level
    pub log_level: Level,

    /// Config file the settings were read from
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Load and validate configuration from flags, environment and config file
    pub fn load(args: &ConfigArgs, verbose: bool) -> Result<Self> {
        let config_file = file::config_file_path(args.config.as_deref());
        let file_settings = match &config_file {
            Some(path) => Settings::load_file(path)?,
            None => Settings::default(),
        };

        let mut settings = Settings::from_args(args).or(file_settings);
        if verbose {
            settings.log_level = Some("debug".to_string());
        }

        let mut config = Self::from_settings(settings)?;
        config.config_file = config_file;
        Ok(config)
    }

    /// Validate merged settings
    ///
    /// Every missing required key is reported in a single error.
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let Settings {
            host,
            token,
            project,
            project_id,
            log_level,
        } = settings;

        let missing: Vec<&str> = [
            ("host", host.is_none()),
            ("token", token.is_none()),
            ("project", project.is_none()),
            ("project_id", project_id.is_none()),
        ]
        .into_iter()
        .filter_map(|(key, absent)| absent.then_some(key))
        .collect();

        let (Some(host), Some(token), Some(project), Some(project_id)) =
            (host, token, project, project_id)
        else {
            return Err(config::missing(missing));
        };

        let project_id = project_id.parse::<u64>().map_err(|_| {
            config::invalid(format!("project_id must be a number, got '{project_id}'"))
        })?;

        let log_level = match log_level {
            Some(level) => level
                .parse::<Level>()
                .map_err(|_| config::invalid(format!("unknown log level '{level}'")))?,
            None => DEFAULT_LOG_LEVEL,
        };

        Ok(Self {
            host: host.trim_end_matches('/').to_string(),
            token,
            project,
            project_id,
            log_level,
            config_file: None,
        })
    }

    /// GraphQL endpoint of the registry
    pub fn graphql_url(&self) -> String {
        format!("{}/api/graphql", self.host)
    }
}
