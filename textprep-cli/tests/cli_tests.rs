//! Integration tests for the textprep CLI
//!
//! These tests invoke the built binary and verify:
//! - Exit codes (0 = success, 1 = run failure, 2 = usage error)
//! - The cleaned output file
//! - stdout/stderr output

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────

fn textprep_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_textprep"))
}

fn run_textprep(args: &[&str]) -> Output {
    Command::new(textprep_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute textprep")
}

fn run_textprep_with_log(args: &[&str], filter: &str) -> Output {
    Command::new(textprep_bin())
        .args(args)
        .env("RUST_LOG", filter)
        .output()
        .expect("failed to execute textprep")
}

fn write_source(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("source.csv");
    fs::write(&path, contents).expect("write source");
    path
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

const SAMPLE: &str = "\
1,Hello World!,This is a test.,The answer is 42
2,Empty body,,Still answered
";

// ── Version / help ────────────────────────────────────────

#[test]
fn test_version_flag() {
    let output = run_textprep(&["--version"]);
    assert!(output.status.success(), "--version should exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "should contain version"
    );
}

#[test]
fn test_missing_arguments_is_usage_error() {
    let output = run_textprep(&[]);
    assert_eq!(output.status.code(), Some(2), "usage error should exit 2");
}

#[test]
fn test_bad_delimiter_is_usage_error() {
    let output = run_textprep(&["in.csv", "out.csv", "--delimiter", "::"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("delimiter"));
}

// ── Cleaning ──────────────────────────────────────────────

#[test]
fn test_clean_default() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(&dir, SAMPLE);
    let dest = dir.path().join("dest.csv");

    let output = run_textprep(&[path_str(&source), path_str(&dest)]);
    assert!(output.status.success(), "clean should exit 0");

    let cleaned = fs::read_to_string(&dest).unwrap();
    assert_eq!(
        cleaned,
        "text,class\nhello world test answer 42,1\nempty body  still answered,2\n"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cleaned 2 rows"), "should print summary");
}

#[test]
fn test_clean_compat() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(&dir, SAMPLE);
    let dest = dir.path().join("dest.csv");

    let output = run_textprep(&[
        path_str(&source),
        path_str(&dest),
        "--missing",
        "compat",
    ]);
    assert!(output.status.success());

    let cleaned = fs::read_to_string(&dest).unwrap();
    assert!(cleaned.contains("empty body nan still answered,2\n"));
}

#[test]
fn test_keep_stopwords_and_punctuation() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(&dir, "1,The End.,x,y\n");
    let dest = dir.path().join("dest.csv");

    let output = run_textprep(&[
        path_str(&source),
        path_str(&dest),
        "--keep-stopwords",
        "--keep-punctuation",
    ]);
    assert!(output.status.success());

    let cleaned = fs::read_to_string(&dest).unwrap();
    assert_eq!(cleaned, "text,class\nthe end. x y,1\n");
}

#[test]
fn test_quiet_suppresses_summary() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(&dir, SAMPLE);
    let dest = dir.path().join("dest.csv");

    let output = run_textprep(&[path_str(&source), path_str(&dest), "--quiet"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "quiet run prints nothing");
    assert!(dest.exists());
}

// ── Failures ──────────────────────────────────────────────

#[test]
fn test_missing_source_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("absent.csv");
    let dest = dir.path().join("dest.csv");

    let output = run_textprep(&[path_str(&source), path_str(&dest)]);
    assert_eq!(output.status.code(), Some(1), "missing file should exit 1");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"), "should mention error");
    assert!(stderr.contains("absent.csv"), "should name the file");
    assert!(!dest.exists(), "no output on failure");
}

#[test]
fn test_short_row_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(&dir, "1,only,three\n");
    let dest = dir.path().join("dest.csv");

    let output = run_textprep(&[path_str(&source), path_str(&dest)]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 1"));
    assert!(!dest.exists());
}

// ── Logging ───────────────────────────────────────────────

#[test]
fn test_debug_log_shows_config() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(&dir, SAMPLE);
    let dest = dir.path().join("dest.csv");

    let output = run_textprep_with_log(
        &[path_str(&source), path_str(&dest), "--missing", "compat"],
        "textprep=debug",
    );

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("starting"), "stderr: {stderr}");
    assert!(stderr.contains("Compat"), "stderr: {stderr}");
}

#[test]
fn test_default_log_hides_debug_events() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(&dir, SAMPLE);
    let dest = dir.path().join("dest.csv");

    let output = run_textprep(&[path_str(&source), path_str(&dest)]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("starting"), "stderr: {stderr}");
}
