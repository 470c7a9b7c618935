// SPDX-License-Identifier: MIT OR Apache-2.0
//! End-to-end tests for the nestpath binary
#![allow(missing_docs)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn nestpath() -> Command {
    Command::cargo_bin("nestpath").unwrap()
}

fn write_json(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

fn user() -> Value {
    json!({
        "name": "a",
        "profile": {"color": "red", "email": "e", "colors": ["red", "blue"]},
        "orders": [{"id": 1, "total": 5}, {"id": 2, "total": 9}]
    })
}

#[test]
fn keys_prints_segments() {
    let mut cmd = nestpath();
    cmd.args(["-c", "keys", "profile.name.colors[2].length"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#"["profile","name","colors","2"]"#));
}

#[test]
fn exists_exit_status_follows_result() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_json(&dir, "user.json", &user());

    nestpath()
        .arg("exists")
        .args(["profile.email", "orders[1].total"])
        .arg("-f")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));

    nestpath()
        .args(["exists", "profile.phone", "-f"])
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("false"));
}

#[test]
fn exists_reads_stdin() {
    nestpath()
        .args(["exists", "a.b"])
        .write_stdin(r#"{"a": {"b": null}}"#)
        .assert()
        .success();
}

#[test]
fn merge_files_deeply() {
    let dir = tempfile::tempdir().unwrap();
    let base = write_json(&dir, "base.json", &json!({"a": [1, 2], "p": {"x": 1}, "s": 1}));
    let overlay = write_json(
        &dir,
        "overlay.json",
        &json!([{"a": [3], "p": {"y": 2}}, {"s": 2}]),
    );

    let merged = stdout_json(nestpath().arg("merge").arg(&base).arg(&overlay));
    assert_eq!(merged, json!({"a": [1, 2, 3], "p": {"x": 1, "y": 2}, "s": 2}));
}

#[test]
fn merge_without_inputs_prints_empty_object() {
    let mut cmd = nestpath();
    cmd.args(["-c", "merge"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::diff("{}\n"))
        .stderr(predicate::str::contains("at least one object is required"));
}

#[test]
fn extract_and_select() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_json(&dir, "user.json", &user());

    let extracted = stdout_json(nestpath().args(["extract", "profile.color", "-f"]).arg(&file));
    assert_eq!(extracted, json!({"profile": {"color": "red"}}));

    let selected = stdout_json(
        nestpath()
            .args(["select", "name", "profile.email", "missing", "-f"])
            .arg(&file),
    );
    assert_eq!(selected, json!({"name": "a", "profile": {"email": "e"}}));
}

#[test]
fn match_inline_and_file_rules() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_json(&dir, "user.json", &user());
    let rules = write_json(&dir, "rules.json", &json!({"colors": ["red", "blue"], "id": 2}));

    nestpath()
        .args(["match", "--rules", r#"{"email": "e"}"#, "-f"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));

    nestpath()
        .arg("match")
        .arg("--rules")
        .arg(format!("@{}", rules.display()))
        .arg("-f")
        .arg(&file)
        .assert()
        .success();

    nestpath()
        .args(["match", "--rules", r#"{"phone": "1"}"#, "-f"])
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("false"));
}

#[test]
fn match_report_prints_counts() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_json(&dir, "user.json", &user());

    let report = stdout_json(
        nestpath()
            .args(["match", "--report", "--rules", r#"{"email": "e"}"#, "-f"])
            .arg(&file),
    );
    assert_eq!(report, json!({"rules": 1, "compared": 15, "matched": 1}));

    nestpath()
        .args(["match", "--report", "--rules", r#"{"total": 5, "id": 1, "x": 0}"#, "-f"])
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"matched\": 2"));
}

#[test]
fn max_and_min_by_path() {
    let dir = tempfile::tempdir().unwrap();
    let orders = write_json(
        &dir,
        "orders.json",
        &json!([{"id": 1, "total": 5}, {"id": 2, "total": 9}, {"id": 3, "total": 1}]),
    );

    let max = stdout_json(nestpath().args(["max", "total", "-f"]).arg(&orders));
    assert_eq!(max, json!({"id": 2, "total": 9}));

    let min = stdout_json(nestpath().args(["min", "total", "-f"]).arg(&orders));
    assert_eq!(min, json!({"id": 3, "total": 1}));
}

#[test]
fn max_of_empty_array_is_null_and_fails() {
    nestpath()
        .args(["max", "total"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stdout(predicate::str::contains("null"));
}

#[test]
fn output_flag_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("keys.json");
    nestpath()
        .args(["-c", "-o"])
        .arg(&out)
        .args(["keys", "a[0]"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(out).unwrap(), "[\"a\",\"0\"]\n");
}

#[test]
fn invalid_json_reports_error() {
    nestpath()
        .args(["extract", "a"])
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON in stdin"));
}
