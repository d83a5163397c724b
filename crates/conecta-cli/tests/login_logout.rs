//! Integration tests for login/logout and session cookie persistence.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn conecta(home: &std::path::Path, backend: &str) -> Command {
    let mut cmd = Command::cargo_bin("conecta").unwrap();
    cmd.env("CONECTA_HOME", home)
        .env("CONECTA_BACKEND_URL", backend)
        .env("CONECTA_BLOCK_REAL_API", "1");
    cmd
}

/// Test: login persists the backend's session cookie.
#[tokio::test]
async fn test_login_stores_session_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(serde_json::json!({
            "email": "maria@example.com",
            "password": "secret"
        })))
        .respond_with(
            ResponseTemplate::new(200).insert_header("set-cookie", "session=abc123; Path=/"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();
    conecta(temp.path(), &server.uri())
        .args(["login", "--email", "maria@example.com", "--password", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login realizado com sucesso."));

    let session_path = temp.path().join("session.json");
    assert!(session_path.exists(), "session.json should exist");
    let contents = fs::read_to_string(&session_path).unwrap();
    assert!(
        contents.contains("session=abc123"),
        "cookie should be in session.json"
    );
}

/// Test: session.json has restricted permissions on Unix.
#[cfg(unix)]
#[tokio::test]
async fn test_session_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("set-cookie", "session=abc123; Path=/"),
        )
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();
    conecta(temp.path(), &server.uri())
        .args(["login", "--email", "maria@example.com", "--password", "secret"])
        .assert()
        .success();

    let metadata = fs::metadata(temp.path().join("session.json")).unwrap();
    assert_eq!(
        metadata.permissions().mode() & 0o777,
        0o600,
        "session.json should have 0600 permissions"
    );
}

/// Test: a rejected login leaves no session behind.
#[tokio::test]
async fn test_login_failure_stores_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();
    conecta(temp.path(), &server.uri())
        .args(["login", "--email", "maria@example.com", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Falha no login"));

    assert!(!temp.path().join("session.json").exists());
}

/// Test: logout sends the stored cookie and clears the file.
#[tokio::test]
async fn test_logout_clears_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .and(header("cookie", "session=abc123"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("session.json"),
        r#"{ "cookies": ["session=abc123"] }"#,
    )
    .unwrap();

    conecta(temp.path(), &server.uri())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sessão encerrada."));

    let contents = fs::read_to_string(temp.path().join("session.json")).unwrap();
    assert!(
        !contents.contains("session=abc123"),
        "cookie should be removed from session.json"
    );
}

/// Test: logout without a session just says so.
#[tokio::test]
async fn test_logout_when_not_logged_in() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();
    conecta(temp.path(), &server.uri())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Você não está logado."));
}

/// Test: a failed logout surfaces a notification and keeps the session.
#[tokio::test]
async fn test_logout_failure_keeps_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("session.json"),
        r#"{ "cookies": ["session=abc123"] }"#,
    )
    .unwrap();

    conecta(temp.path(), &server.uri())
        .arg("logout")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Erro ao sair da sessão!"));

    let contents = fs::read_to_string(temp.path().join("session.json")).unwrap();
    assert!(contents.contains("session=abc123"));
}
