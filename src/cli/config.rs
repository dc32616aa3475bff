use std::path::PathBuf;

use clap::Args;

/// Registry connection and logging settings
///
/// Every value can also come from a `PKGVER_*` environment variable or
/// from the config file; flags take precedence over both.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Registry host URL (e.g., <https://gitlab.example.com>)
    #[arg(long, env = "PKGVER_HOST", value_name = "URL")]
    pub host: Option<String>,

    /// Bearer token used to authenticate against the registry
    #[arg(long, env = "PKGVER_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Full path of the project owning the packages (e.g., group/project)
    #[arg(long, env = "PKGVER_PROJECT", value_name = "PATH")]
    pub project: Option<String>,

    /// Numeric id of the project, used in download URLs
    #[arg(long, env = "PKGVER_PROJECT_ID", value_name = "ID")]
    pub project_id: Option<String>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, env = "PKGVER_LOG_LEVEL", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Config file (defaults to <config dir>/pkgver/config.yaml)
    #[arg(long, env = "PKGVER_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}
