//! Integration tests for the config helpers.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn conecta(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("conecta").unwrap();
    cmd.env("CONECTA_HOME", home);
    cmd
}

#[test]
fn test_config_path_respects_home() {
    let temp = tempdir().unwrap();
    conecta(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains(temp.path().to_str().unwrap()));
}

#[test]
fn test_config_set_url_writes_file() {
    let temp = tempdir().unwrap();
    conecta(temp.path())
        .args(["config", "set-url", "http://127.0.0.1:9000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://127.0.0.1:9000"));

    let contents = fs::read_to_string(temp.path().join("config.toml")).unwrap();
    assert!(contents.contains("backend_url = \"http://127.0.0.1:9000\""));
    // The commented template survives the targeted edit
    assert!(contents.contains("# Conecta client configuration."));
}

#[test]
fn test_config_set_url_rejects_invalid() {
    let temp = tempdir().unwrap();
    conecta(temp.path())
        .args(["config", "set-url", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("URL inválida"));
}

#[test]
fn test_help_lists_commands() {
    let temp = tempdir().unwrap();
    conecta(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("events"))
        .stdout(predicate::str::contains("profile"));
}
