//! Golden tests for wordlens
//!
//! These tests run the binary over the fixture corpus and compare the
//! output against files under `tests/fixtures/expected`.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn corpus() -> PathBuf {
    fixtures_dir().join("corpus")
}

fn expected(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join("expected").join(name))
        .expect("Failed to read expected output")
}

/// Create a command for running the wordlens binary against the corpus
fn wordlens_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wordlens").expect("Failed to find wordlens binary");
    cmd.env_remove("WORDLENS_ROOT")
        .env_remove("WORDLENS_LISTS")
        .env_remove("RUST_LOG")
        .arg("--root")
        .arg(corpus())
        .arg("--no-color");
    cmd
}

#[test]
fn golden_summary_table() {
    let assert = wordlens_cmd()
        .args(["summary", "sea.txt", "pond.txt"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout, expected("summary.txt"));
}

#[test]
fn golden_summary_json() {
    let assert = wordlens_cmd()
        .args(["--format", "json", "summary", "sea.txt", "pond.txt"])
        .assert()
        .success();

    let rows: Vec<Value> = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["filename"], "sea.txt");
    assert_eq!(rows[0]["total_words"], 10);
    assert_eq!(rows[0]["distinct_words"], 7);
    assert_eq!(rows[1]["filename"], "pond.txt");
    assert_eq!(rows[1]["total_words"], 9);
    assert_eq!(rows[1]["distinct_words"], 6);
}

#[test]
fn golden_concordance_first_document() {
    let out = tempdir().unwrap();

    wordlens_cmd()
        .arg("--output-dir")
        .arg(out.path())
        .args(["concordance", "sea.txt"])
        .assert()
        .success();

    let written = fs::read_to_string(out.path().join("sea.txt_CONCORDANCE.txt")).unwrap();
    assert_eq!(written, expected("sea.txt_CONCORDANCE.txt"));
}

#[test]
fn golden_concordance_uses_load_order_index() {
    let out = tempdir().unwrap();

    wordlens_cmd()
        .arg("--output-dir")
        .arg(out.path())
        .args(["concordance", "sea.txt", "pond.txt", "--select", "pond.txt"])
        .assert()
        .success();

    let written = fs::read_to_string(out.path().join("pond.txt_CONCORDANCE.txt")).unwrap();
    assert_eq!(written, expected("pond.txt_CONCORDANCE.txt"));
    assert!(!out.path().join("sea.txt_CONCORDANCE.txt").exists());
}

#[test]
fn golden_concordance_printed_lines_match_file() {
    let out = tempdir().unwrap();

    let assert = wordlens_cmd()
        .arg("--output-dir")
        .arg(out.path())
        .args(["concordance", "sea.txt", "--print"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let expected_lines = expected("sea.txt_CONCORDANCE.txt");
    assert!(stdout.starts_with(&format!("{}\nSaved as: ", expected_lines)));
}

#[test]
fn golden_lists_from_corpus() {
    let assert = wordlens_cmd().arg("lists").assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout, "IGNORE:\nthe\na\nHIGHLIGHT:\nwhale\n");
}

#[test]
fn golden_jsonl_vs_json_equivalence() {
    let jsonl = wordlens_cmd()
        .args(["--format", "jsonl", "find", "app", "sea.txt", "pond.txt"])
        .assert()
        .success();
    let json = wordlens_cmd()
        .args(["--format", "json", "find", "app", "sea.txt", "pond.txt"])
        .assert()
        .success();

    let from_jsonl: Vec<Value> = String::from_utf8_lossy(&jsonl.get_output().stdout)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let from_json: Vec<Value> = serde_json::from_slice(&json.get_output().stdout).unwrap();

    assert_eq!(from_jsonl, from_json);
    assert_eq!(from_json[0]["count"], 0);
    assert_eq!(from_json[1]["count"], 3);
}
