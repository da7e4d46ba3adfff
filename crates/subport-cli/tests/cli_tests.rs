//! Integration tests for the `subport` binary.
//!
//! These tests use `assert_cmd` to drive both subcommands end to end against a
//! local `httpmock` server, feeding the username and password through stdin.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

/// A scratch working directory with an optional config pointing at `server`.
struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    fn with_config(server: &MockServer) -> Self {
        let env = Self::new();
        let config = json!({
            "client_id": "client",
            "client_secret": "secret",
            "user_agent": "subport-tests/0.1",
            "auth_base_url": server.base_url(),
            "api_base_url": server.base_url(),
        });
        fs::write(env.path("config.json"), config.to_string()).expect("write config");
        env
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn cwd(&self) -> &Path {
        self.dir.path()
    }

    fn write_subscriptions(&self, names: &[&str]) {
        fs::write(
            self.path("subreddits.json"),
            serde_json::to_string(names).expect("serialize"),
        )
        .expect("write subscriptions");
    }

    fn command(&self, subcommand: &str) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!("subport");
        cmd.current_dir(self.cwd())
            .env("RUST_LOG", "info")
            .env("NO_COLOR", "1")
            .arg(subcommand);
        cmd
    }
}

fn mock_login(server: &MockServer) {
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/access_token")
            .form_urlencoded_tuple("username", "alice")
            .form_urlencoded_tuple("password", "hunter2");
        then.status(200)
            .json_body(json!({"access_token": "tok", "token_type": "bearer", "scope": "*"}));
    });
}

fn mock_subscribe_ok<'a>(server: &'a MockServer, name: &str) -> httpmock::Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/subscribe")
            .form_urlencoded_tuple("action", "sub")
            .form_urlencoded_tuple("sr_name", name);
        then.status(200).json_body(json!({}));
    })
}

// =============================================================================
// Missing config
// =============================================================================

#[test]
fn export_without_config_fails_before_prompting() {
    let env = TestEnv::new();

    env.command("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("config file not found at config.json"))
        .stdout(predicate::str::contains("Export failed due to errors"))
        .stdout(predicate::str::contains("Enter Reddit username").not());

    assert!(!env.path("subreddits.json").exists());
}

#[test]
fn import_without_config_fails_before_prompting() {
    let env = TestEnv::new();
    env.write_subscriptions(&["rust"]);

    env.command("import")
        .assert()
        .success()
        .stdout(predicate::str::contains("config file not found at config.json"))
        .stdout(predicate::str::contains("Import failed due to errors"))
        .stdout(predicate::str::contains("Enter Reddit username").not())
        .stdout(predicate::str::contains("Import summary").not());
}

#[test]
fn failed_run_outcome_is_logged_at_debug_with_zero_exit() {
    let env = TestEnv::new();

    env.command("export")
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("run finished"))
        .stdout(predicate::str::contains("succeeded=false"));
}

#[test]
fn config_override_path_is_reported_when_missing() {
    let env = TestEnv::new();

    env.command("export")
        .arg("--config")
        .arg("elsewhere/settings.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("elsewhere/settings.json"));
}

#[test]
fn missing_config_key_is_named() {
    let env = TestEnv::new();
    fs::write(
        env.path("config.json"),
        r#"{"client_id": "client", "client_secret": "secret"}"#,
    )
    .expect("write config");

    env.command("import")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "missing required key in config: user_agent",
        ));
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn export_writes_subscription_file() {
    let server = MockServer::start();
    mock_login(&server);
    server.mock(|when, then| {
        when.method(GET)
            .path("/subreddits/mine/subscriber")
            .header("authorization", "Bearer tok");
        then.status(200).json_body(json!({
            "kind": "Listing",
            "data": {
                "after": null,
                "children": [
                    {"kind": "t5", "data": {"display_name": "rust"}},
                    {"kind": "t5", "data": {"display_name": "linux"}}
                ]
            }
        }));
    });
    let env = TestEnv::with_config(&server);

    env.command("export")
        .write_stdin("alice\nhunter2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter Reddit username to export from:"))
        .stdout(predicate::str::contains("Initializing connection for alice..."))
        .stdout(predicate::str::contains("Found 2 subscriptions. Saving to file..."))
        .stdout(predicate::str::contains("Successfully exported 2 subreddits"))
        .stdout(predicate::str::contains("Export completed in"))
        .stdout(predicate::str::contains("hunter2").not());

    let written = fs::read_to_string(env.path("subreddits.json")).expect("read output");
    assert_eq!(written, "[\n    \"rust\",\n    \"linux\"\n]");
}

#[test]
fn export_honours_subscriptions_override() {
    let server = MockServer::start();
    mock_login(&server);
    server.mock(|when, then| {
        when.method(GET).path("/subreddits/mine/subscriber");
        then.status(200)
            .json_body(json!({"kind": "Listing", "data": {"after": null, "children": []}}));
    });
    let env = TestEnv::with_config(&server);

    env.command("export")
        .arg("--subscriptions")
        .arg("backup/subs.json")
        .write_stdin("alice\nhunter2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully exported 0 subreddits"));

    assert_eq!(
        fs::read_to_string(env.path("backup/subs.json")).expect("read output"),
        "[]"
    );
    assert!(!env.path("subreddits.json").exists());
}

#[test]
fn export_with_rejected_login_keeps_existing_file() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/access_token");
        then.status(200).json_body(json!({"error": "invalid_grant"}));
    });
    let env = TestEnv::with_config(&server);
    env.write_subscriptions(&["keep"]);

    env.command("export")
        .write_stdin("alice\nwrong\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("authentication failed: invalid_grant"))
        .stdout(predicate::str::contains("Export failed due to errors"));

    assert_eq!(
        fs::read_to_string(env.path("subreddits.json")).expect("read"),
        "[\"keep\"]"
    );
}

// =============================================================================
// Import
// =============================================================================

#[test]
fn import_continues_past_failed_subreddit() {
    let server = MockServer::start();
    mock_login(&server);
    let rust = mock_subscribe_ok(&server, "rust");
    let linux = mock_subscribe_ok(&server, "linux");
    let gone = server.mock(|when, then| {
        when.method(POST)
            .path("/api/subscribe")
            .form_urlencoded_tuple("sr_name", "gone");
        then.status(404)
            .json_body(json!({"message": "Not Found", "error": 404}));
    });
    let env = TestEnv::with_config(&server);
    env.write_subscriptions(&["rust", "gone", "linux"]);

    env.command("import")
        .write_stdin("alice\nhunter2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter Reddit username to import to:"))
        .stdout(predicate::str::contains("Found 3 subreddits. Starting import..."))
        .stdout(predicate::str::contains("[1/3] Subscribed to r/rust"))
        .stdout(predicate::str::contains(
            "[2/3] Failed to subscribe to r/gone: Not Found (HTTP 404)",
        ))
        .stdout(predicate::str::contains("[3/3] Subscribed to r/linux"))
        .stdout(predicate::str::contains("Attempted: 3"))
        .stdout(predicate::str::contains("Success: 2"))
        .stdout(predicate::str::contains("Failures: 1"))
        .stdout(predicate::str::contains("r/gone - Not Found (HTTP 404)"))
        .stdout(predicate::str::contains("Total failed: 1"))
        .stdout(predicate::str::contains("Import completed in"));

    rust.assert();
    gone.assert();
    linux.assert();
}

#[test]
fn import_of_empty_list_reports_zero() {
    let server = MockServer::start();
    mock_login(&server);
    let env = TestEnv::with_config(&server);
    env.write_subscriptions(&[]);

    env.command("import")
        .write_stdin("alice\nhunter2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Attempted: 0"))
        .stdout(predicate::str::contains("Success: 0"))
        .stdout(predicate::str::contains("Failures: 0"))
        .stdout(predicate::str::contains("Failed subreddits:").not())
        .stdout(predicate::str::contains("Import completed in"));
}

#[test]
fn import_without_subscription_file_is_top_level_failure() {
    let server = MockServer::start();
    mock_login(&server);
    let env = TestEnv::with_config(&server);

    env.command("import")
        .write_stdin("alice\nhunter2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("subreddits.json"))
        .stdout(predicate::str::contains("Import failed due to errors"))
        .stdout(predicate::str::contains("Import summary").not());
}

#[test]
fn import_with_closed_stdin_fails_without_network() {
    let server = MockServer::start();
    let env = TestEnv::with_config(&server);
    env.write_subscriptions(&["rust"]);

    env.command("import")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("input closed before a value was entered"))
        .stdout(predicate::str::contains("Initializing connection").not())
        .stdout(predicate::str::contains("Import failed due to errors"));
}
