#![deny(clippy::all, clippy::pedantic)]

use std::io::Write;
use std::path::Path;

use assert_cmd::Command;
use httpmock::MockServer;
use predicates::str::contains;
use tempfile::{NamedTempFile, TempDir};

const PRODUCTS: &str = r#"[{"product":{"id":1,"name":"Lamp","in_stock":true,"category_id":null,"brand_id":2,"price":12,"tax_rate":0},"discounts":[]}]"#;

fn password_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tmp file");
    file.write_all(contents.as_bytes()).expect("write password");
    file
}

fn vitrine(workdir: &TempDir, server: &MockServer, token_file: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vitrine"));
    cmd.current_dir(workdir.path())
        .env_remove("VITRINE_PASSWORD")
        .env_remove("VITRINE_PASSWORD_FILE")
        .env_remove("VITRINE_CONFIG_FILE")
        .arg("--api-url")
        .arg(server.base_url())
        .arg("--processor-url")
        .arg(server.base_url())
        .arg("--token-file")
        .arg(token_file);
    cmd
}

#[test]
fn login_then_list_products() {
    let server = MockServer::start();
    let login = server.mock(|when, then| {
        when.method("POST")
            .path("/login")
            .json_body_includes(r#"{"username":"admin","password":"hunter2"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"token":"tok-e2e"}"#);
    });
    let list = server.mock(|when, then| {
        when.method("GET")
            .path("/product")
            .header("authorization", "Bearer tok-e2e");
        then.status(200)
            .header("content-type", "application/json")
            .body(PRODUCTS);
    });

    let workdir = TempDir::new().expect("tmp dir");
    let token_file = workdir.path().join("session.token");
    let password = password_file("hunter2\n");

    vitrine(&workdir, &server, &token_file)
        .arg("login")
        .arg("--username")
        .arg("admin")
        .arg("--password-file")
        .arg(password.path())
        .assert()
        .success()
        .stdout(contains("#1 Lamp"));
    login.assert();
    assert_eq!(
        std::fs::read_to_string(&token_file).expect("token saved"),
        "tok-e2e"
    );

    let assert = vitrine(&workdir, &server, &token_file)
        .arg("products")
        .arg("list")
        .arg("--format")
        .arg("json")
        .assert()
        .success();
    let output = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(output.contains("\"name\": \"Lamp\""));
    list.assert_calls(2);
}

#[test]
fn rejected_login_fails_without_token() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("POST").path("/login");
        then.status(401);
    });

    let workdir = TempDir::new().expect("tmp dir");
    let token_file = workdir.path().join("session.token");

    vitrine(&workdir, &server, &token_file)
        .env("VITRINE_PASSWORD", "wrong")
        .arg("login")
        .arg("--username")
        .arg("admin")
        .assert()
        .failure()
        .stderr(contains("Login failed!"));
    assert!(!token_file.exists());
}

#[test]
fn listing_without_session_fails_fast() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method("GET").path("/brand");
        then.status(200).body("[]");
    });

    let workdir = TempDir::new().expect("tmp dir");
    let token_file = workdir.path().join("session.token");

    vitrine(&workdir, &server, &token_file)
        .arg("brands")
        .arg("list")
        .assert()
        .failure()
        .stderr(contains("not logged in"));
    list.assert_calls(0);
}

#[test]
fn processor_pause_needs_no_session() {
    let server = MockServer::start();
    let pause = server.mock(|when, then| {
        when.method("POST").path("/pause");
        then.status(200);
    });

    let workdir = TempDir::new().expect("tmp dir");
    let token_file = workdir.path().join("session.token");

    vitrine(&workdir, &server, &token_file)
        .arg("processor")
        .arg("pause")
        .assert()
        .success()
        .stdout(contains("Processor paused."));
    pause.assert();
}

#[test]
fn console_reads_commands_from_stdin() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method("GET").path("/product");
        then.status(200)
            .header("content-type", "application/json")
            .body(PRODUCTS);
    });

    let workdir = TempDir::new().expect("tmp dir");
    let token_file = workdir.path().join("session.token");
    std::fs::write(&token_file, "tok").expect("seed token");

    vitrine(&workdir, &server, &token_file)
        .arg("console")
        .write_stdin("products list\nview products\nquit\n")
        .assert()
        .success()
        .stdout(contains("#1 Lamp"));
    list.assert_calls(1);
}

#[test]
fn logout_removes_token_file() {
    let server = MockServer::start();
    let workdir = TempDir::new().expect("tmp dir");
    let token_file = workdir.path().join("session.token");
    std::fs::write(&token_file, "tok").expect("seed token");

    vitrine(&workdir, &server, &token_file)
        .arg("logout")
        .assert()
        .success()
        .stdout(contains("Not logged in"));
    assert!(!token_file.exists());
}
