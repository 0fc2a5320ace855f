//! Integration tests for the `dict` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the get, set and
//! convert subcommands through the actual binary, including stdin/stdout
//! piping, file I/O and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the accesses.json fixture.
fn accesses_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/accesses.json")
}

/// Helper: path to the accesses.yml fixture.
fn accesses_yaml_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/accesses.yml")
}

/// Helper: a scratch file path unique to this test process.
fn scratch_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("dict-cli-{}-{}", std::process::id(), name))
}

fn dict() -> Command {
    Command::cargo_bin("dict").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Get subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn get_stdin_to_stdout() {
    dict()
        .args(["get", "/hello"])
        .write_stdin(r#"{"hello":"world"}"#)
        .assert()
        .success()
        .stdout("\"world\"\n");
}

#[test]
fn get_from_json_file() {
    let output = dict()
        .args(["get", "-i", accesses_json_path(), "--compact", "/accesses/2/users"])
        .output()
        .expect("get should run");
    assert!(output.status.success());

    let users: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("output should be JSON");
    assert_eq!(
        users,
        serde_json::json!(["667d0baedfb1ed18430d8ed3", "667d0baedfb1ed18430d8ed4"])
    );
}

#[test]
fn get_from_yaml_file_matches_json() {
    let from_json = dict()
        .args(["get", "-i", accesses_json_path(), "/accesses/1"])
        .output()
        .unwrap();
    let from_yaml = dict()
        .args(["get", "-i", accesses_yaml_path(), "/accesses/1"])
        .output()
        .unwrap();
    assert!(from_yaml.status.success());
    assert_eq!(from_json.stdout, from_yaml.stdout);
}

#[test]
fn get_missing_key_fails() {
    dict()
        .args(["get", "-i", accesses_json_path(), "/accesses/0/nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope not found"));
}

#[test]
fn get_index_beyond_end_fails() {
    dict()
        .args(["get", "-i", accesses_json_path(), "/accesses/3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("index beyond end of vector 3"));
}

#[test]
fn get_invalid_json_fails() {
    dict()
        .args(["get", "/a"])
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse json input"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Set subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn set_stdin_to_stdout() {
    let output = dict()
        .args(["set", "/1", r#""111""#])
        .write_stdin(r#"["aaa","bbb","ccc"]"#)
        .output()
        .unwrap();
    assert!(output.status.success());

    let updated: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(updated, serde_json::json!(["aaa", "111", "ccc"]));
}

#[test]
fn set_file_to_file_leaves_input_alone() {
    let output_path = scratch_path("set-output.json");
    let _ = std::fs::remove_file(&output_path);
    let before = std::fs::read_to_string(accesses_json_path()).unwrap();

    dict()
        .args(["set", "-i", accesses_json_path(), "-o"])
        .arg(&output_path)
        .args(["/accesses/2/users", r#"["667d0baedfb1ed18430d8ed4"]"#])
        .assert()
        .success();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(
        written["accesses"][2]["users"],
        serde_json::json!(["667d0baedfb1ed18430d8ed4"])
    );
    assert_eq!(written["accesses"][0]["name"], "view");
    assert_eq!(std::fs::read_to_string(accesses_json_path()).unwrap(), before);

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn set_keeps_yaml_format() {
    dict()
        .args(["set", "-i", accesses_yaml_path(), "/accesses/0/name", r#""viewer""#])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: viewer"))
        .stdout(predicate::str::contains("name: edit"));
}

#[test]
fn set_bad_replacement_fails() {
    dict()
        .args(["set", "/a", "not json"])
        .write_stdin(r#"{"a":1}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse replacement value"));
}

#[test]
fn set_through_leaf_fails() {
    dict()
        .args(["set", "/a/b", "1"])
        .write_stdin(r#"{"a":1}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("only objects and vectors supported"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Convert subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn convert_json_to_yaml() {
    dict()
        .args(["convert", "-i", accesses_json_path(), "--to", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("accesses:"))
        .stdout(predicate::str::contains("name: exec"));
}

#[test]
fn convert_yaml_to_json_matches_fixture() {
    let output = dict()
        .args(["convert", "-i", accesses_yaml_path(), "--to", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let converted: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let fixture: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(accesses_json_path()).unwrap()).unwrap();
    assert_eq!(converted, fixture);
}

#[test]
fn convert_unknown_target_fails() {
    dict()
        .args(["convert", "--to", "toml"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid format toml"));
}

#[test]
fn unknown_input_extension_fails() {
    let path = scratch_path("doc.txt");
    std::fs::write(&path, "{}").unwrap();

    dict()
        .args(["get", "-i"])
        .arg(&path)
        .arg("/a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("pass --format"));

    let _ = std::fs::remove_file(&path);
}
