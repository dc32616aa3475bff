//! Config file (config.yaml) and layered settings
//!
//! ```yaml
//! host: https://gitlab.example.com
//! token: glpat-xxxxxxxx
//! project: group/project
//! project_id: 42
//! log_level: info
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::ConfigArgs;
use crate::error::{PkgverError, Result, config};

/// Config file name inside the pkgver config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Project id as written in YAML, either `42` or `"42"`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum ProjectIdValue {
    Number(u64),
    Text(String),
}

impl From<ProjectIdValue> for String {
    fn from(value: ProjectIdValue) -> Self {
        match value {
            ProjectIdValue::Number(id) => id.to_string(),
            ProjectIdValue::Text(id) => id,
        }
    }
}

/// One layer of possibly incomplete settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub token: Option<String>,

    #[serde(default)]
    pub project: Option<String>,

    #[serde(default, deserialize_with = "deserialize_project_id")]
    pub project_id: Option<String>,

    #[serde(default)]
    pub log_level: Option<String>,
}

fn deserialize_project_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<ProjectIdValue>::deserialize(deserializer)?.map(String::from))
}

impl Settings {
    /// Settings given on the command line or through the environment
    pub fn from_args(args: &ConfigArgs) -> Self {
        Self {
            host: args.host.clone(),
            token: args.token.clone(),
            project: args.project.clone(),
            project_id: args.project_id.clone(),
            log_level: args.log_level.clone(),
        }
    }

    /// Parse settings from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_yaml::from_str(yaml)?;
        Ok(settings)
    }

    /// Load settings from a config file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;

        Self::from_yaml(&content).map_err(|e| match e {
            PkgverError::ConfigParseFailed { reason, .. } => {
                config::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Fill values missing from this layer with values from `lower`
    ///
    /// Blank strings count as missing.
    #[must_use]
    pub fn or(self, lower: Self) -> Self {
        Self {
            host: pick(self.host, lower.host),
            token: pick(self.token, lower.token),
            project: pick(self.project, lower.project),
            project_id: pick(self.project_id, lower.project_id),
            log_level: pick(self.log_level, lower.log_level),
        }
    }
}

fn pick(upper: Option<String>, lower: Option<String>) -> Option<String> {
    non_blank(upper).or_else(|| non_blank(lower))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Config file to read, if any
///
/// An explicitly requested file is always returned so that a missing one is
/// reported. The default file is only used when it exists.
pub fn config_file_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path().filter(|path| path.is_file()),
    }
}

/// Default config file location (e.g., ~/.config/pkgver/config.yaml)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pkgver").join(CONFIG_FILE_NAME))
}
