//! Integration tests for the callscope CLI binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PYTHON_SAMPLE: &str = "def greet(name):\n    return name\n\ndef main():\n    greet(\"Alice\")\n";

fn write_sample(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn callscope() -> Command {
    Command::cargo_bin("callscope").unwrap()
}

#[test]
fn test_json_output_for_python_file() {
    let temp = TempDir::new().unwrap();
    let file = write_sample(&temp, "app.py", PYTHON_SAMPLE);

    let output = callscope().arg(&file).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["language"], "python");
    assert_eq!(value["entities"].as_array().unwrap().len(), 2);
    assert_eq!(value["calls"].as_array().unwrap().len(), 1);
    assert_eq!(value["calls"][0]["from"], "main");
    assert_eq!(value["calls"][0]["to"], "greet");
    assert!(value["timestamp"].is_string());
    assert!(value["checksum"].is_string());
}

#[test]
fn test_language_override_beats_extension() {
    let temp = TempDir::new().unwrap();
    let file = write_sample(&temp, "buffer.txt", PYTHON_SAMPLE);

    callscope()
        .arg("--language")
        .arg("python")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"language\":\"python\""));
}

#[test]
fn test_unknown_extension_fails_with_hint() {
    let temp = TempDir::new().unwrap();
    let file = write_sample(&temp, "notes.txt", "hello");

    callscope()
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot infer language"));
}

#[test]
fn test_unknown_language_tag_fails() {
    let temp = TempDir::new().unwrap();
    let file = write_sample(&temp, "app.py", PYTHON_SAMPLE);

    callscope()
        .arg("--language")
        .arg("haskell")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language: haskell"));
}

#[test]
fn test_edges_format() {
    let temp = TempDir::new().unwrap();
    let file = write_sample(&temp, "app.py", PYTHON_SAMPLE);

    callscope()
        .arg("--format")
        .arg("edges")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::diff("main -> greet\n"));
}

#[test]
fn test_summary_format() {
    let temp = TempDir::new().unwrap();
    let file = write_sample(&temp, "app.py", PYTHON_SAMPLE);

    callscope()
        .arg("--format")
        .arg("summary")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entities, 1 call sites (python)"))
        .stdout(predicate::str::contains("function greet (line 1)"));
}

#[test]
fn test_output_file_written() {
    let temp = TempDir::new().unwrap();
    let file = write_sample(&temp, "app.py", PYTHON_SAMPLE);
    let out = temp.path().join("graph.json");

    callscope()
        .arg("-o")
        .arg(&out)
        .arg(&file)
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["language"], "python");
}

#[test]
fn test_multiple_files_produce_json_array() {
    let temp = TempDir::new().unwrap();
    let first = write_sample(&temp, "a.py", PYTHON_SAMPLE);
    let second = write_sample(&temp, "b.rs", "fn main() {}\n");

    let output = callscope().arg(&first).arg(&second).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let docs = value.as_array().unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0]["language"], "python");
    assert_eq!(docs[1]["language"], "rust");
}

#[test]
fn test_missing_file_fails() {
    callscope()
        .arg("no-such-file.py")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_pretty_json() {
    let temp = TempDir::new().unwrap();
    let file = write_sample(&temp, "app.py", PYTHON_SAMPLE);

    callscope()
        .arg("--pretty")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("  \"language\": \"python\""));
}
