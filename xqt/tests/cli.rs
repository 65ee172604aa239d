//! CLI end-to-end tests for xqt.
//!
//! Every test runs inside its own temporary directory, with `HOME` and the
//! XDG config directory pointed at it, so no user configuration leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn xqt_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_xqt"))
}

/// An xqt command isolated in `dir`.
fn xqt(dir: &Path) -> Command {
    let mut cmd = Command::new(xqt_bin());
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("XQT_CONFIG")
        .env_remove("XQT_VERBOSE")
        .env("XQT_NO_COLOR", "true");
    cmd
}

fn write(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, text).expect("Failed to write fixture");
    path
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    xqt(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokens").and(predicate::str::contains("check")));
}

#[test]
fn test_tokens_text_listing() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let query = write(&dir, "q.xq", "for $x\n  return 1");

    xqt(dir.path())
        .arg("tokens")
        .arg(&query)
        .assert()
        .success()
        .stdout(predicate::str::contains("1:1 Keyword(for) \"for\""))
        .stdout(predicate::str::contains("2:10 IntegerLiteral \"1\""));
}

#[test]
fn test_tokens_json_listing() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let query = write(&dir, "q.xq", "<a>{1}</a>");

    let output = xqt(dir.path())
        .args(["tokens", "--format", "json"])
        .arg(&query)
        .output()
        .expect("Failed to run xqt");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    let tokens = value.as_array().expect("expected a JSON array");
    assert_eq!(tokens[0]["kind"], "Lt");
    assert_eq!(tokens[1]["kind"], "NcName");
    assert_eq!(tokens[1]["text"], "a");
}

#[test]
fn test_tokens_stats() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let query = write(&dir, "q.xq", "1 + 2 + 3");

    xqt(dir.path())
        .args(["tokens", "--stats"])
        .arg(&query)
        .assert()
        .success()
        .stdout(predicate::str::contains("     3 IntegerLiteral"))
        .stdout(predicate::str::contains("     2 Plus"));
}

#[test]
fn test_tokens_from_stdin() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    xqt(dir.path())
        .args(["tokens", "-"])
        .write_stdin("1 + 2")
        .assert()
        .success()
        .stdout(predicate::str::contains("1:3 Plus \"+\""));
}

#[test]
fn test_tokens_reports_lexical_error() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let query = write(&dir, "q.xq", "1 +\n\"open");

    xqt(dir.path())
        .arg("tokens")
        .arg(&query)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E1002]"))
        .stderr(predicate::str::contains("q.xq:2:1"));
}

#[test]
fn test_check_clean_files() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let first = write(&dir, "a.xq", "declare variable $x := 1; $x");
    let second = write(&dir, "b.xq", "<p class=\"{1}\">text</p>");

    xqt(dir.path())
        .args(["check", "--jobs", "2"])
        .arg(&first)
        .arg(&second)
        .assert()
        .success();
}

#[test]
fn test_check_failure_sets_exit_status() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let good = write(&dir, "good.xq", "1 + 1");
    let bad = write(&dir, "bad.xq", "(: never closed");

    xqt(dir.path())
        .arg("check")
        .arg(&good)
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E1002]"))
        .stderr(predicate::str::contains("bad.xq"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let query = write(&dir, "q.xq", "1");

    xqt(dir.path())
        .args(["--config", "missing.toml", "tokens"])
        .arg(&query)
        .assert()
        .failure();
}

#[test]
fn test_config_file_in_current_directory() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write(&dir, "xqt.toml", "[output]\nformat = \"json\"\n");
    let query = write(&dir, "q.xq", "1");

    xqt(dir.path())
        .args(["tokens", "q.xq"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));

    // Flags still win over the file.
    xqt(dir.path())
        .args(["tokens", "--format", "text"])
        .arg(&query)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1:1 IntegerLiteral"));
}
