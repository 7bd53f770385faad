use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn temp_home() -> TempDir {
    TempDir::new().expect("create temp roster home")
}

#[tokio::test]
async fn test_users_prints_table() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Leanne Graham", "email": "Sincere@april.biz"},
            {"id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv"}
        ])))
        .mount(&server)
        .await;

    let home = temp_home();
    let url = format!("{}/users", server.uri());
    cargo_bin_cmd!("roster")
        .env("ROSTER_HOME", home.path())
        .args(["users", "--url", url.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Leanne Graham"))
        .stdout(predicate::str::contains("Shanna@melissa.tv"));
}

#[tokio::test]
async fn test_users_empty_list() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let home = temp_home();
    let url = format!("{}/users", server.uri());
    cargo_bin_cmd!("roster")
        .env("ROSTER_HOME", home.path())
        .args(["users", "--url", url.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No users."));
}

#[tokio::test]
async fn test_users_reports_status_failure() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let home = temp_home();
    let url = format!("{}/users", server.uri());
    cargo_bin_cmd!("roster")
        .env("ROSTER_HOME", home.path())
        .args(["users", "--url", url.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Request failed: 404"));
}

#[tokio::test]
async fn test_status_online_against_mock() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let home = temp_home();
    std::fs::write(
        home.path().join("config.toml"),
        format!("probe_url = \"{}/\"\n", server.uri()),
    )
    .unwrap();

    cargo_bin_cmd!("roster")
        .env("ROSTER_HOME", home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Online"));
}

#[test]
fn test_users_rejects_non_http_url() {
    let home = temp_home();
    cargo_bin_cmd!("roster")
        .env("ROSTER_HOME", home.path())
        .args(["users", "--url", "ftp://example.com/users"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--url must use http or https"));
}
