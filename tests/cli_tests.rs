//! Integration tests for the `gl` binary: argument validation, exit codes,
//! and end-to-end requests against a local mock server.

use assert_cmd::Command;
use predicates::prelude::*;

fn gl() -> Command {
    let mut cmd = Command::cargo_bin("gl").unwrap();
    // Isolate from the developer's real config and environment.
    let config_dir = tempfile::tempdir().unwrap();
    cmd.env("XDG_CONFIG_HOME", config_dir.path())
        .env("HOME", config_dir.path())
        .env_remove("GITLAB_API_ENDPOINT")
        .env_remove("GITLAB_API_PRIVATE_TOKEN")
        .env_remove("GITLAB_API_HTTP_PROXY");
    // Keep the tempdir alive for the duration of the command.
    Box::leak(Box::new(config_dir));
    cmd
}

#[test]
fn test_version_subcommand() {
    gl().arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gl version"));
}

#[test]
fn test_completion_generates_bash_script() {
    gl().args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete").and(predicate::str::contains("gl")));
}

#[test]
fn test_completion_rejects_unknown_shell() {
    gl().args(["completion", "tcsh"]).assert().failure().code(2);
}

#[test]
fn test_users_create_missing_args_fails_before_network() {
    // Only one of three required positionals: clap rejects this without any
    // endpoint configured, so no request is ever attempted.
    gl().args(["users", "create", "john@example.com"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_unknown_command_is_usage_error() {
    gl().arg("definitely-not-a-command")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_missing_endpoint_reports_credentials_error() {
    gl().args(["users", "get", "1"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Please set an endpoint to API"));
}

#[test]
fn test_api_command_round_trip() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/version")
        .match_header("PRIVATE-TOKEN", "secret")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"version": "17.0.0", "revision": "abc123"}"#)
        .create();

    gl().env("GITLAB_API_ENDPOINT", server.url())
        .env("GITLAB_API_PRIVATE_TOKEN", "secret")
        .args(["-o", "json", "api", "/version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("17.0.0"));

    mock.assert();
}

#[test]
fn test_api_command_not_found_exit_code() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/projects/999")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "404 Project Not Found"}"#)
        .create();

    gl().env("GITLAB_API_ENDPOINT", server.url())
        .env("GITLAB_API_PRIVATE_TOKEN", "secret")
        .args(["api", "/projects/999"])
        .assert()
        .failure()
        .code(8)
        .stderr(predicate::str::contains("404 Project Not Found"));
}

#[test]
fn test_users_delete_skips_prompt_with_yes() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("DELETE", "/users/42")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 42}"#)
        .create();

    gl().env("GITLAB_API_ENDPOINT", server.url())
        .env("GITLAB_API_PRIVATE_TOKEN", "secret")
        .args(["--yes", "users", "delete", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted user 42"));

    mock.assert();
}
