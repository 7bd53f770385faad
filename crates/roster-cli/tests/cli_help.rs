use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("roster")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("users"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_users_help_shows_url_flag() {
    cargo_bin_cmd!("roster")
        .args(["users", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--url"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("roster")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_interactive_mode_requires_terminal() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("roster")
        .env("ROSTER_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
