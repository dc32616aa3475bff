//! GitLab package registry catalog
//!
//! Two queries against `<host>/api/graphql`:
//! 1. packages of a project filtered by name, type `GENERIC`, newest first
//! 2. files of one package by its global id

use serde::{Deserialize, Serialize};

use super::graphql::GraphqlClient;
use super::{Catalog, PAGE_SIZE, PackageFile};
use crate::config::Config;
use crate::domain::PackageRecord;
use crate::error::{Result, registry};

const LIST_PACKAGES_QUERY: &str = r"
query listPackages($fullPath: ID!, $packageName: String, $first: Int) {
  project(fullPath: $fullPath) {
    id
    packages(packageName: $packageName, packageType: GENERIC, sort: CREATED_DESC, first: $first) {
      nodes {
        id
        name
        version
      }
    }
  }
}
";

const LIST_FILES_QUERY: &str = r"
query listPackageFiles($id: PackagesPackageID!, $first: Int) {
  package(id: $id) {
    packageFiles(first: $first) {
      nodes {
        fileName
        downloadPath
      }
    }
  }
}
";

/// Global id prefix of GitLab projects
const PROJECT_GID_PREFIX: &str = "gid://gitlab/Project/";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListPackagesVariables<'a> {
    full_path: &'a str,
    package_name: &'a str,
    first: usize,
}

#[derive(Serialize)]
struct ListFilesVariables<'a> {
    id: &'a str,
    first: usize,
}

#[derive(Deserialize)]
struct Connection<T> {
    #[serde(default = "Vec::new")]
    nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

#[derive(Deserialize)]
struct ListPackagesData {
    project: Option<ProjectNode>,
}

#[derive(Deserialize)]
struct ProjectNode {
    id: String,
    packages: Option<Connection<PackageRecord>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListFilesData {
    package: Option<PackageNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageNode {
    package_files: Option<Connection<PackageFile>>,
}

/// Catalog of generic packages in one GitLab project
pub struct GitlabCatalog {
    client: GraphqlClient,
    project: String,
    project_id: u64,
}

impl GitlabCatalog {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: GraphqlClient::new(config.graphql_url(), config.token.clone())?,
            project: config.project.clone(),
            project_id: config.project_id,
        })
    }

    /// Warn when the registry's project differs from the configured project id
    fn check_project_id(&self, gid: &str) {
        let reported = gid
            .strip_prefix(PROJECT_GID_PREFIX)
            .and_then(|id| id.parse::<u64>().ok());
        if reported.is_some_and(|id| id != self.project_id) {
            tracing::warn!(
                project = %self.project,
                configured_id = self.project_id,
                registry_id = %gid,
                "Configured project id does not match the project path; download URLs use the configured id"
            );
        }
    }
}

impl Catalog for GitlabCatalog {
    fn list_packages(&self, package_name: &str) -> Result<Vec<PackageRecord>> {
        tracing::debug!(
            endpoint = self.client.endpoint(),
            project = %self.project,
            package = package_name,
            "Listing packages"
        );

        let data: ListPackagesData = self.client.query(
            LIST_PACKAGES_QUERY,
            &ListPackagesVariables {
                full_path: &self.project,
                package_name,
                first: PAGE_SIZE,
            },
        )?;

        let project = data
            .project
            .ok_or_else(|| registry::project_not_found(&self.project))?;
        self.check_project_id(&project.id);

        let packages = project.packages.unwrap_or_default().nodes;
        tracing::info!(package = package_name, count = packages.len(), "Listed packages");
        Ok(packages)
    }

    fn list_files(&self, package: &PackageRecord) -> Result<Vec<PackageFile>> {
        tracing::debug!(id = %package.id, version = %package.version, "Listing package files");

        let data: ListFilesData = self.client.query(
            LIST_FILES_QUERY,
            &ListFilesVariables {
                id: &package.id,
                first: PAGE_SIZE,
            },
        )?;

        let files = data
            .package
            .and_then(|p| p.package_files)
            .unwrap_or_default()
            .nodes;
        tracing::info!(id = %package.id, count = files.len(), "Listed package files");
        Ok(files)
    }
}
