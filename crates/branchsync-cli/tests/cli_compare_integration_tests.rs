//! CLI integration tests
//!
//! These tests run the `branchsync` binary in a temp working directory and
//! check the files and console output of complete runs.

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn branchsync(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_branchsync"))
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn backup_files(dir: &Path, prefix: &str) -> Vec<String> {
    let backup = dir.join("backup");
    if !backup.exists() {
        return Vec::new();
    }
    let mut names: Vec<String> = fs::read_dir(backup)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with(prefix))
        .collect();
    names.sort();
    names
}

#[test]
fn test_cli_compare_with_default_paths() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("Center Locatore.json"),
        r#"{"data": [{"branch_code": "X1", "name": "Foo"}]}"#,
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("Centers_Raw.json"),
        r#"{"data": [{"name": "Bar", "branch_code": "X1"}, {"branch_code": "X2"}]}"#,
    )
    .unwrap();

    let output = branchsync(temp_dir.path(), &["compare"]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Comparison completed successfully."));
    assert!(stdout.contains("Added branches: 1"));
    assert!(stdout.contains("Modified branches: 1"));
    assert!(stdout.contains("Total field modifications: 1"));
    assert!(stdout.contains("Source file has been formatted and copied to Center Locatore.json"));

    // Artifacts in the backup directory
    assert_eq!(
        backup_files(temp_dir.path(), "backup_"),
        vec!["backup_Center Locatore.json".to_string()]
    );
    assert_eq!(backup_files(temp_dir.path(), "formatted_source_").len(), 1);
    let reports = backup_files(temp_dir.path(), "branches_comparison_");
    assert_eq!(reports.len(), 1);
    let report = fs::read_to_string(temp_dir.path().join("backup").join(&reports[0])).unwrap();
    assert!(report.starts_with("ChangeType,branch_code,FieldName,OldValue,NewValue\r\n"));
    assert!(report.contains("Modified,X1,name,Foo,Bar\r\n"));

    // Snapshot replaced by the canonical document
    let snapshot: Value = serde_json::from_str(
        &fs::read_to_string(temp_dir.path().join("Center Locatore.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(snapshot["data"][0]["branch_code"], "X1");
    assert_eq!(snapshot["data"][0]["name"], "Bar");
}

#[test]
fn test_cli_compare_no_update_and_output() {
    let temp_dir = TempDir::new().unwrap();
    let old_text = r#"[{"branch_code": "A", "v": 1}]"#;
    fs::write(temp_dir.path().join("old.json"), old_text).unwrap();
    fs::write(temp_dir.path().join("new.json"), r#"[{"branch_code": "A", "v": 2}]"#).unwrap();

    let output = branchsync(
        temp_dir.path(),
        &[
            "compare",
            "--old",
            "old.json",
            "--new",
            "new.json",
            "--output",
            "report.csv",
            "--no-update",
        ],
    );

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("old.json")).unwrap(),
        old_text
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("report.csv")).unwrap(),
        "ChangeType,branch_code,FieldName,OldValue,NewValue\r\nModified,A,v,1,2\r\n"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Results saved to report.csv"));
    assert!(!stdout.contains("Source file has been formatted"));
}

#[test]
fn test_cli_config_file_with_cli_override() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("in.json"), r#"[{"id": "1"}]"#).unwrap();
    fs::write(
        temp_dir.path().join("branchsync.toml"),
        "old = \"snap.json\"\nnew = \"in.json\"\nkey_field = \"id\"\nbackup_dir = \"archive\"\nupdate = false\n",
    )
    .unwrap();

    let output = branchsync(
        temp_dir.path(),
        &["compare", "--config", "branchsync.toml", "--backup-dir", "out"],
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Added branches: 1"));
    assert!(temp_dir.path().join("out").is_dir());
    assert!(!temp_dir.path().join("archive").exists());
    assert!(!temp_dir.path().join("snap.json").exists());

    let report_name = fs::read_dir(temp_dir.path().join("out"))
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .find(|n| n.ends_with(".csv"))
        .unwrap();
    let report = fs::read_to_string(temp_dir.path().join("out").join(report_name)).unwrap();
    assert!(report.starts_with("ChangeType,id,FieldName"));
}

#[test]
fn test_cli_missing_new_file_fails_with_error_log() {
    let temp_dir = TempDir::new().unwrap();
    let old_text = r#"{"data": []}"#;
    fs::write(temp_dir.path().join("Center Locatore.json"), old_text).unwrap();

    let output = branchsync(temp_dir.path(), &["compare"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("ERR_MISSING_INPUT"));
    assert!(stderr.contains("Error details written to:"));

    let logs = backup_files(temp_dir.path(), "error_");
    assert_eq!(logs.len(), 1);
    let log = fs::read_to_string(temp_dir.path().join("backup").join(&logs[0])).unwrap();
    assert!(log.starts_with("Timestamp: "));
    assert!(log.contains("\nError: "));
    assert!(log.contains("Centers_Raw.json"));

    // The run id ties the log entry to the run's log events
    assert!(log.contains("(run: "));
    assert!(stderr.contains("(run: "));

    // Snapshot untouched
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("Center Locatore.json")).unwrap(),
        old_text
    );
}

#[test]
fn test_cli_format_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("doc.json"), r#"{"b": 1, "a": ["y", "x"]}"#).unwrap();

    let output = branchsync(temp_dir.path(), &["format", "--input", "doc.json"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "{\n  \"a\": [\n    \"x\",\n    \"y\"\n  ],\n  \"b\": 1\n}\n"
    );
}

#[test]
fn test_cli_format_missing_input_reports_run() {
    let temp_dir = TempDir::new().unwrap();

    let output = branchsync(temp_dir.path(), &["format", "--input", "absent.json"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_MISSING_INPUT"));
    assert!(stderr.contains("(run: "));
}

#[test]
fn test_cli_rejects_unknown_flag() {
    let temp_dir = TempDir::new().unwrap();
    let output = branchsync(temp_dir.path(), &["compare", "--bogus"]);
    assert!(!output.status.success());
    assert!(!temp_dir.path().join("backup").exists());
}
