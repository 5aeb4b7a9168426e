use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn ticketdesk_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ticketdesk"));
    cmd.env("NO_COLOR", "1")
        .env_remove("TICKETDESK_API_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

/// Command pointed at `server`, run from an empty directory so no stray
/// config file is picked up.
fn cmd_for(server: &MockServer, dir: &TempDir) -> Command {
    let mut cmd = ticketdesk_cmd();
    cmd.arg("--api-base")
        .arg(server.uri())
        .current_dir(dir.path());
    cmd
}

async fn mock_list(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    ticketdesk_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("support tickets"))
        .stdout(predicate::str::contains("submit"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_version() {
    ticketdesk_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ticketdesk"));
}

#[test]
fn test_invalid_api_base() {
    let temp_dir = TempDir::new().unwrap();
    ticketdesk_cmd()
        .args(["--api-base", "ftp://files.example.com", "list"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid API base URL"));
}

#[test]
fn test_show_rejects_non_numeric_id() {
    let temp_dir = TempDir::new().unwrap();
    ticketdesk_cmd()
        .args(["show", "abc"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Enter a ticket ID of 1 or greater."));
}

#[test]
fn test_submit_requires_subject_locally() {
    let temp_dir = TempDir::new().unwrap();
    // Nothing listens here; validation fails before any request.
    ticketdesk_cmd()
        .args(["--api-base", "http://127.0.0.1:1", "submit", "  ", "-d", "Body"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Subject is required."));
}

#[test]
fn test_unusable_log_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("notadir");
    std::fs::write(&blocker, "").unwrap();

    ticketdesk_cmd()
        .arg("--log-file")
        .arg(blocker.join("ticketdesk.log"))
        .args(["show", "abc"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open log file"))
        .stderr(predicate::str::contains("panicked").not());
}

// =============================================================================
// Submit
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_submit_prints_ticket_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tickets"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 42,
            "subject": "Printer jammed",
            "description": "Paper tray 2",
            "status": "open"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    cmd_for(&server, &temp_dir)
        .args(["submit", "Printer jammed", "-d", "Paper tray 2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Ticket submitted! Your Ticket ID: 42",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_submit_json_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tickets"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3,
            "subject": "S",
            "description": "D",
            "status": "open"
        })))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let output = cmd_for(&server, &temp_dir)
        .args(["new", "S", "--description", "D", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["id"], 3);
    assert_eq!(value["status"], "open");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_submit_shows_validation_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tickets"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{"msg": "field required"}, {"msg": "too long"}]
        })))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    cmd_for(&server, &temp_dir)
        .args(["submit", "Subject", "-d", "Body"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("field required, too long"));
}

// =============================================================================
// Show
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_show_prints_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tickets/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "subject": "VPN drops",
            "description": "Every hour",
            "status": "open"
        })))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    cmd_for(&server, &temp_dir)
        .args(["status", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subject:     VPN drops"))
        .stdout(predicate::str::contains("Description: Every hour"))
        .stdout(predicate::str::contains("Status:      open"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tickets/999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    cmd_for(&server, &temp_dir)
        .args(["show", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ticket not found."));
}

#[test]
fn test_show_unreachable_backend() {
    let temp_dir = TempDir::new().unwrap();
    ticketdesk_cmd()
        .args(["--api-base", "http://127.0.0.1:1", "show", "1"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch ticket."));
}

// =============================================================================
// List
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_list_truncates_descriptions() {
    let server = MockServer::start().await;
    let long = format!("{}{}", "x".repeat(80), "TAIL");
    mock_list(
        &server,
        json!([
            {"id": 1, "subject": "Printer", "description": "Out of toner", "status": "open"},
            {"id": 2, "subject": "Email", "description": long, "status": "closed"}
        ]),
    )
    .await;

    let temp_dir = TempDir::new().unwrap();
    cmd_for(&server, &temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[open] Printer - Out of toner"))
        .stdout(predicate::str::contains(format!("{}…", "x".repeat(80))))
        .stdout(predicate::str::contains("TAIL").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_keeps_one_line_per_ticket() {
    let server = MockServer::start().await;
    mock_list(
        &server,
        json!([
            {"id": 1, "subject": "Printer", "description": "Steps:\nreboot\nretry", "status": "open"},
            {"id": 2, "subject": "Email", "description": "Bounces", "status": null}
        ]),
    )
    .await;

    let temp_dir = TempDir::new().unwrap();
    let output = cmd_for(&server, &temp_dir).arg("list").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("[open] Printer - Steps: reboot retry"));
    assert!(lines[1].ends_with("[] Email - Bounces"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_empty() {
    let server = MockServer::start().await;
    mock_list(&server, json!([])).await;

    let temp_dir = TempDir::new().unwrap();
    cmd_for(&server, &temp_dir)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tickets available."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tickets"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    cmd_for(&server, &temp_dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to retrieve tickets."));
}

// =============================================================================
// Configuration
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_base_url_from_discovered_config() {
    let server = MockServer::start().await;
    mock_list(&server, json!([])).await;

    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".ticketdesk.yml"),
        format!("api:\n  base_url: {}/\n", server.uri()),
    )
    .unwrap();
    let nested = temp_dir.path().join("nested");
    std::fs::create_dir(&nested).unwrap();

    ticketdesk_cmd()
        .arg("list")
        .current_dir(&nested)
        .assert()
        .success()
        .stdout(predicate::str::contains("No tickets available."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_base_url_from_environment_beats_config() {
    let server = MockServer::start().await;
    mock_list(&server, json!([])).await;

    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".ticketdesk.yml"),
        "api:\n  base_url: http://127.0.0.1:1\n",
    )
    .unwrap();

    ticketdesk_cmd()
        .env("TICKETDESK_API_BASE_URL", server.uri())
        .arg("list")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No tickets available."));
}

#[test]
fn test_explicit_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.yml");
    std::fs::write(&config_path, "api:\n  base_url: not-a-url\n").unwrap();

    ticketdesk_cmd()
        .arg("--config")
        .arg(&config_path)
        .arg("list")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid API base URL"));
}
