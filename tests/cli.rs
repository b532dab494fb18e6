//! Binary-level tests for the `pfm` command

use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn pfm(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pfm").unwrap();
    cmd.env("PFM_CLI_DATA_DIR", data_dir.path())
        .env_remove("PFM_API_URL")
        .env_remove("PFM_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

fn user_json() -> serde_json::Value {
    json!({"_id": "u1", "name": "Asha", "email": "asha@example.com", "currency": "INR"})
}

#[test]
fn help_lists_commands() {
    let data_dir = TempDir::new().unwrap();
    pfm(&data_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("expense"))
        .stdout(predicate::str::contains("report"));
}

#[test]
fn config_shows_paths_and_override() {
    let data_dir = TempDir::new().unwrap();
    pfm(&data_dir)
        .args(["--api-url", "http://localhost:9999/api", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:9999/api"))
        .stdout(predicate::str::contains("Signed in:        no"));
}

#[test]
fn config_save_writes_settings_file() {
    let data_dir = TempDir::new().unwrap();
    pfm(&data_dir)
        .args(["--api-url", "http://localhost:9999/api", "config", "--save"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(data_dir.path().join("config.json")).unwrap();
    assert!(saved.contains("http://localhost:9999/api"));
}

#[test]
fn protected_command_requires_login() {
    let data_dir = TempDir::new().unwrap();
    pfm(&data_dir)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in. Run 'pfm login' first."));
}

#[test]
fn logout_without_session_is_harmless() {
    let data_dir = TempDir::new().unwrap();
    pfm(&data_dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in."));
}

#[test]
fn login_persists_session_for_later_commands() {
    let server = MockServer::start();
    let login = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/login")
            .json_body(json!({"email": "asha@example.com", "password": "hunter2"}));
        then.status(200)
            .json_body(json!({"token": "tok-123", "user": user_json()}));
    });
    let me = server.mock(|when, then| {
        when.method(GET)
            .path("/api/auth/me")
            .header("authorization", "Bearer tok-123");
        then.status(200).json_body(json!({"user": user_json()}));
    });

    let data_dir = TempDir::new().unwrap();
    let api_url = server.url("/api");

    pfm(&data_dir)
        .args(["--api-url", &api_url, "login", "asha@example.com", "--password", "hunter2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as Asha"));

    let session = std::fs::read_to_string(data_dir.path().join("session.json")).unwrap();
    assert!(session.contains("pfm_token"));

    pfm(&data_dir)
        .args(["--api-url", &api_url, "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("asha@example.com"));

    login.assert();
    me.assert();
}

#[test]
fn rejected_login_prints_backend_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(400).json_body(json!({"message": "Invalid credentials"}));
    });

    let data_dir = TempDir::new().unwrap();
    pfm(&data_dir)
        .args(["--api-url", &server.url("/api"), "login", "asha@example.com", "--password", "bad"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"));

    assert!(!data_dir.path().join("session.json").exists());
}

#[test]
fn expired_session_is_cleared() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/me");
        then.status(401).json_body(json!({"message": "jwt expired"}));
    });

    let data_dir = TempDir::new().unwrap();
    std::fs::write(
        data_dir.path().join("session.json"),
        r#"{"pfm_token": "old"}"#,
    )
    .unwrap();

    pfm(&data_dir)
        .args(["--api-url", &server.url("/api"), "dashboard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));

    assert!(!data_dir.path().join("session.json").exists());
}

#[test]
fn dashboard_prints_totals() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/me");
        then.status(200).json_body(user_json());
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/expenses");
        then.status(200).json_body(json!({"data": [
            {"_id": "e1", "title": "Rent", "amount": 15000, "category": "Housing"}
        ]}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/budgets");
        then.status(200).json_body(json!({"data": []}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/income");
        then.status(200).json_body(json!({"data": [
            {"_id": "i1", "source": "Salary", "amount": 115000}
        ]}));
    });

    let data_dir = TempDir::new().unwrap();
    std::fs::write(
        data_dir.path().join("session.json"),
        r#"{"pfm_token": "good"}"#,
    )
    .unwrap();

    pfm(&data_dir)
        .args(["--api-url", &server.url("/api"), "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹1,15,000"))
        .stdout(predicate::str::contains("₹1,00,000"))
        .stdout(predicate::str::contains("Housing"));
}

#[test]
fn invalid_expense_fails_before_network() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/me");
        then.status(200).json_body(user_json());
    });
    let create = server.mock(|when, then| {
        when.method(POST).path("/api/expenses");
        then.status(201).json_body(json!({"data": {}}));
    });

    let data_dir = TempDir::new().unwrap();
    std::fs::write(
        data_dir.path().join("session.json"),
        r#"{"pfm_token": "good"}"#,
    )
    .unwrap();

    pfm(&data_dir)
        .args([
            "--api-url",
            &server.url("/api"),
            "expense",
            "add",
            "Coffee",
            "0",
            "--category",
            "Food",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));

    assert_eq!(create.calls(), 0);
}
