//! Common test utilities for pkgver integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Environment variables that would leak the caller's settings into a test run
const ISOLATED_VARS: &[&str] = &[
    "PKGVER_HOST",
    "PKGVER_TOKEN",
    "PKGVER_PROJECT",
    "PKGVER_PROJECT_ID",
    "PKGVER_LOG_LEVEL",
    "PKGVER_CONFIG",
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

/// An isolated home directory for running the binary
pub struct TestEnv {
    /// Temporary directory used as HOME and config dir
    pub temp: TempDir,
}

impl TestEnv {
    /// Create a new test environment
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        Self { temp }
    }

    /// Write a config file and return its path
    #[allow(dead_code)]
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        std::fs::write(&path, content).expect("Failed to write config file");
        path
    }

    /// Command for the pkgver binary with no inherited configuration
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("pkgver").expect("Failed to find pkgver binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.temp.path())
            .env("XDG_CONFIG_HOME", self.temp.path().join(".config"))
            .env("NO_PROXY", "127.0.0.1,localhost");
        cmd
    }

    /// Command already configured for a registry at `host`
    #[allow(dead_code)]
    pub fn cmd_for_registry(&self, host: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.env("PKGVER_HOST", host)
            .env("PKGVER_TOKEN", "abc")
            .env("PKGVER_PROJECT", "grp/proj")
            .env("PKGVER_PROJECT_ID", "42");
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of the GraphQL endpoint under the registry host
pub const GRAPHQL_PATH: &str = "/api/graphql";

/// A GraphQL request received by [`MockRegistry`]
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// `Authorization` header, if sent
    pub authorization: Option<String>,
    /// JSON body
    pub body: serde_json::Value,
}

impl From<&Request> for RecordedRequest {
    fn from(request: &Request) -> Self {
        Self {
            method: request.method.to_string(),
            path: request.url.path().to_string(),
            authorization: request
                .headers
                .get("authorization")
                .and_then(|value| value.to_str().ok())
                .map(str::to_string),
            body: request.body_json().unwrap_or_default(),
        }
    }
}

/// GraphQL registry mock with canned responses per query
#[allow(dead_code)]
pub struct MockRegistry {
    pub server: MockServer,
    /// Base URL to use as registry host
    pub url: String,
}

#[allow(dead_code)]
impl MockRegistry {
    /// Start a registry with no queries mounted
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let url = server.uri();
        Self { server, url }
    }

    /// Registry answering every GraphQL request with `response`
    pub async fn respond_with(response: ResponseTemplate) -> Self {
        let registry = Self::start().await;
        Mock::given(method("POST"))
            .and(path(GRAPHQL_PATH))
            .respond_with(response)
            .mount(&registry.server)
            .await;
        registry
    }

    /// Registry serving a package list and a file list
    pub async fn with_catalog(packages: serde_json::Value, files: serde_json::Value) -> Self {
        let registry = Self::start().await;
        registry
            .mount_query(
                "listPackages",
                ResponseTemplate::new(200).set_body_json(packages_response(&packages)),
            )
            .await;
        registry
            .mount_query(
                "listPackageFiles",
                ResponseTemplate::new(200).set_body_json(files_response(&files)),
            )
            .await;
        registry
    }

    /// Answer the GraphQL operation named `operation` with `response`
    pub async fn mount_query(&self, operation: &str, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(GRAPHQL_PATH))
            .and(body_string_contains(format!("query {operation}(")))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Requests received so far
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.server
            .received_requests()
            .await
            .expect("Request recording is enabled")
            .iter()
            .map(RecordedRequest::from)
            .collect()
    }
}

/// GraphQL response for the package list query
#[allow(dead_code)]
pub fn packages_response(nodes: &serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "project": {
                "id": "gid://gitlab/Project/42",
                "packages": { "nodes": nodes }
            }
        }
    })
}

/// GraphQL response for the package files query
#[allow(dead_code)]
pub fn files_response(nodes: &serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "package": {
                "packageFiles": { "nodes": nodes }
            }
        }
    })
}

/// Two versions of package `x`, as in the registry's newest-first order
#[allow(dead_code)]
pub fn two_versions() -> serde_json::Value {
    serde_json::json!([
        { "id": "2", "name": "x", "version": "2.0.0" },
        { "id": "1", "name": "x", "version": "1.0.0" }
    ])
}
