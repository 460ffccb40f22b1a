//! End-to-end tests that invoke the compiled `mi-sections` binary.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mi-sections"))
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute mi-sections binary")
}

fn fixture(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).expect("failed to write fixture");
}

const MODEL: &str = "# model\n-- Classes\n  Aircraft\n  Pilot\n==\n\n-- Notes\n==\n";

#[test]
fn test_prints_sections_in_file_order() {
    let dir = TempDir::new().unwrap();
    fixture(&dir, "model.mi", MODEL);

    let out = run(dir.path(), &["model.mi"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "-- Classes\n  Aircraft\n  Pilot\n==\n-- Notes\n==\n"
    );
}

#[test]
fn test_json_output_keeps_order() {
    let dir = TempDir::new().unwrap();
    fixture(&dir, "model.mi", MODEL);

    let out = run(dir.path(), &["model.mi", "--json"]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("stdout should be JSON");
    assert_eq!(value["Classes"], serde_json::json!(["  Aircraft", "  Pilot"]));
    assert_eq!(value["Notes"], serde_json::json!([]));
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.find("Classes").unwrap() < text.find("Notes").unwrap());
}

#[test]
fn test_selected_section_and_names() {
    let dir = TempDir::new().unwrap();
    fixture(&dir, "model.mi", MODEL);

    let out = run(dir.path(), &["model.mi", "-s", "Notes", "--names"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "Notes\n");

    let out = run(dir.path(), &["model.mi", "--names"]);
    assert_eq!(String::from_utf8_lossy(&out.stdout), "Classes\nNotes\n");
}

#[test]
fn test_unknown_section_exits_with_two() {
    let dir = TempDir::new().unwrap();
    fixture(&dir, "model.mi", MODEL);

    let out = run(dir.path(), &["model.mi", "--section", "Missing"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unknown section: Missing"));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_malformed_file_reports_line() {
    let dir = TempDir::new().unwrap();
    fixture(&dir, "bad.mi", "-- A\nx\n-- B\ny\n==\n==\n");

    let out = run(dir.path(), &["bad.mi"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("MI unpack error: Duplicate begin section"), "stderr: {}", stderr);
    assert!(stderr.contains("File: [bad.mi], Line[3]:"));
    assert!(stderr.contains("[-- B]"));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_missing_file_reports_file_access() {
    let dir = TempDir::new().unwrap();

    let out = run(dir.path(), &["nope.mi"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("MI file access: Cannot open"));
    assert!(stderr.contains("File: [nope.mi]"));
    assert!(stderr.contains("In: ["));
}

#[test]
fn test_reads_standard_input() {
    let dir = TempDir::new().unwrap();
    let mut child = Command::new(bin())
        .arg("-")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn mi-sections");
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(b"-- Alpha\nfoo\nbar\n==\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();

    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "-- Alpha\nfoo\nbar\n==\n");
}
