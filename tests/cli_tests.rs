//! CLI integration tests using the REAL pkgver binary
//!
//! None of these tests reach a registry: every failure must happen before
//! any network activity, or against a closed local port.

mod common;

use predicates::prelude::*;

#[test]
fn test_help_output() {
    let env = common::TestEnv::new();
    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PACKAGE"))
        .stdout(predicate::str::contains("--files"))
        .stdout(predicate::str::contains("--project-id"));
}

#[test]
fn test_version_output() {
    let env = common::TestEnv::new();
    env.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pkgver"));
}

#[test]
fn test_missing_package_argument() {
    let env = common::TestEnv::new();
    env.cmd()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No package name given"));
}

#[test]
fn test_missing_package_reported_before_config() {
    let env = common::TestEnv::new();
    env.cmd_for_registry("http://127.0.0.1:1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No package name given"))
        .stderr(predicate::str::contains("Failed to make a request").not());
}

#[test]
fn test_empty_package_argument() {
    let env = common::TestEnv::new();
    env.cmd()
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No package name given"));
}

#[test]
fn test_blank_name_before_version() {
    let env = common::TestEnv::new();
    for spec in ["@", "@1.0.0"] {
        env.cmd_for_registry("http://127.0.0.1:1")
            .arg(spec)
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("No package name given"))
            .stderr(predicate::str::contains("Failed to make a request").not());
    }
}

#[test]
fn test_too_many_arguments() {
    let env = common::TestEnv::new();
    env.cmd().args(["a", "b"]).assert().failure();
}

#[test]
fn test_missing_configuration_names_every_key() {
    let env = common::TestEnv::new();
    env.cmd()
        .arg("x")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Missing required configuration: host, token, project, project_id",
        ));
}

#[test]
fn test_partially_missing_configuration() {
    let env = common::TestEnv::new();
    env.cmd()
        .env("PKGVER_HOST", "https://git.example.com")
        .env("PKGVER_PROJECT", "grp/proj")
        .arg("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing required configuration: token, project_id",
        ));
}

#[test]
fn test_blank_token_counts_as_missing() {
    let env = common::TestEnv::new();
    env.cmd_for_registry("https://git.example.com")
        .env("PKGVER_TOKEN", "   ")
        .arg("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required configuration: token"));
}

#[test]
fn test_config_file_supplies_values() {
    let env = common::TestEnv::new();
    let path = env.write_config(
        "pkgver.yaml",
        "host: https://git.example.com\nproject: grp/proj\nproject_id: 42\n",
    );

    env.cmd()
        .arg("--config")
        .arg(&path)
        .arg("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required configuration: token"));
}

#[test]
fn test_default_config_file_is_read() {
    let env = common::TestEnv::new();
    // XDG location on Linux, Application Support on macOS
    for base in [".config", "Library/Application Support"] {
        let dir = env.temp.path().join(base).join("pkgver");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        std::fs::write(
            dir.join("config.yaml"),
            "token: abc\nproject: grp/proj\nproject_id: 42\n",
        )
        .expect("Failed to write config file");
    }

    env.cmd()
        .arg("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required configuration: host"));
}

#[test]
fn test_verbose_logs_config_file_in_use() {
    let env = common::TestEnv::new();
    let path = env.write_config(
        "pkgver.yaml",
        "host: http://127.0.0.1:1\ntoken: abc\nproject: grp/proj\nproject_id: 42\n",
    );

    env.cmd()
        .arg("-v")
        .arg("--config")
        .arg(&path)
        .arg("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Current config"))
        .stderr(predicate::str::contains("pkgver.yaml"));
}

#[test]
fn test_missing_explicit_config_file() {
    let env = common::TestEnv::new();
    env.cmd()
        .args(["--config", "/nonexistent/pkgver.yaml", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read configuration file"));
}

#[test]
fn test_corrupted_config_file() {
    let env = common::TestEnv::new();
    let path = env.write_config("broken.yaml", "host: [unclosed\n");

    env.cmd()
        .arg("--config")
        .arg(&path)
        .arg("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_invalid_project_id() {
    let env = common::TestEnv::new();
    env.cmd_for_registry("https://git.example.com")
        .env("PKGVER_PROJECT_ID", "grp")
        .arg("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("project_id must be a number"));
}

#[test]
fn test_invalid_log_level() {
    let env = common::TestEnv::new();
    env.cmd_for_registry("https://git.example.com")
        .args(["--log-level", "chatty", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown log level 'chatty'"));
}

#[test]
fn test_unreachable_registry() {
    let env = common::TestEnv::new();
    env.cmd_for_registry("http://127.0.0.1:1")
        .arg("x")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to make a request"))
        .stderr(predicate::str::contains("127.0.0.1:1/api/graphql"));
}

#[test]
fn test_files_and_file_conflict() {
    let env = common::TestEnv::new();
    env.cmd_for_registry("https://git.example.com")
        .args(["x", "--files", "--file", "a.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
