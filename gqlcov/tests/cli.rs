use assert_cmd::Command;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn gqlcov() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("gqlcov").unwrap()
}

fn capture_row(time: &str, status: &str, request: &str, response: &str) -> String {
    format!(
        "{time},{status},{},{}\n",
        STANDARD.encode(request),
        STANDARD.encode(response)
    )
}

fn write_capture(dir: &TempDir) {
    let request = r#"{"query":"query { ping }"}"#;
    let mut csv = String::from("Time,Status code,Request,Response\n");
    csv.push_str(&capture_row(
        "2024-03-01T10:00:00",
        "200",
        request,
        r#"{"data":{"ping":"pong"}}"#,
    ));
    csv.push_str(&capture_row(
        "2024-03-01T10:00:08",
        "400",
        request,
        r#"{"data":{"ping":null}}"#,
    ));
    fs::write(dir.path().join("run.csv"), csv).unwrap();
}

#[test]
fn rows_reports_each_cutoff() {
    let dir = TempDir::new().unwrap();
    write_capture(&dir);

    gqlcov()
        .arg("rows")
        .arg(dir.path())
        .args(["--cutoff", "5", "--cutoff", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing file: run.csv"))
        .stdout(predicate::str::contains(
            "Cutoff Time: 5 seconds - Positive Coverage: 100.00% - Operations with Pass: 1",
        ))
        .stdout(predicate::str::contains(
            "Cutoff Time: 5 seconds - Negative Coverage: 0.00% - Operations with Fail: 0",
        ))
        .stdout(predicate::str::contains(
            "Cutoff Time: 10 seconds - Negative Coverage: 100.00% - Operations with Fail: 1",
        ));
}

#[test]
fn rows_honours_config_file() {
    let dir = TempDir::new().unwrap();
    write_capture(&dir);
    let config = dir.path().join("gqlcov.toml");
    fs::write(&config, "cutoffs = [7]\n").unwrap();

    gqlcov()
        .arg("rows")
        .arg(dir.path().join("run.csv"))
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cutoff Time: 7 seconds"))
        .stdout(predicate::str::contains("Cutoff Time: 5 seconds").not());
}

#[test]
fn rows_missing_path_fails() {
    gqlcov()
        .args(["rows", "/definitely/not/here"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("input path does not exist"));
}

#[test]
fn bad_config_prints_hint() {
    let dir = TempDir::new().unwrap();
    write_capture(&dir);
    let config = dir.path().join("gqlcov.toml");
    fs::write(&config, "cutoffs = \"soon\"\n").unwrap();

    gqlcov()
        .arg("rows")
        .arg(dir.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse TOML"))
        .stderr(predicate::str::contains("[blocks]"));
}

#[test]
fn blocks_prints_per_operation_stats() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("messages.txt");
    fs::write(
        &log,
        "==== 1 ==========\n\
         {\"query\":\"query { ping }\"}\n\
         {\"data\":{\"ping\":\"pong\"}}\n",
    )
    .unwrap();

    gqlcov()
        .arg("blocks")
        .arg("-f")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Per-operation stats:"))
        .stdout(predicate::str::contains(
            "Unique operations with pass responses: 1",
        ))
        .stdout(predicate::str::contains(
            "Unique operations with fail responses: 0",
        ));
}

#[test]
fn evomaster_on_empty_directory() {
    let dir = TempDir::new().unwrap();

    gqlcov()
        .arg("evomaster")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No '_successes_Test.java' file found in directory.",
        ));
}

#[test]
fn decode_writes_sibling_file() {
    let dir = TempDir::new().unwrap();
    write_capture(&dir);

    gqlcov()
        .arg("decode")
        .arg(dir.path().join("run.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Decoded 2 entries"));

    let decoded = fs::read_to_string(dir.path().join("run-decoded.csv")).unwrap();
    assert!(decoded.starts_with("Time,Status code,Operation,Request,Response"));
    assert!(decoded.contains("ping"));
}

#[test]
fn json_logs_go_to_stderr() {
    let dir = TempDir::new().unwrap();
    write_capture(&dir);

    gqlcov()
        .env("RUST_LOG", "info")
        .arg("--log-json")
        .arg("rows")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\""))
        .stdout(predicate::str::contains("\"message\"").not());
}
