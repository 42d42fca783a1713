//! Phase 4 tests: CLI integration and end-to-end flows.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

// ==================== CLI Helpers ====================

/// Run the `cgraph` CLI with the given arguments and return the output.
fn run_cgraph(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cgraph"))
        .args(args)
        .output()
        .expect("Failed to run cgraph")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "cgraph failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Write the m -> ft -> in -> cm table to a temp file.
fn length_table(invertible: bool) -> NamedTempFile {
    let json = serde_json::json!({
        "invertible": invertible,
        "connections": [
            {"from": "m", "to": "ft", "value": 3.28},
            {"from": "ft", "to": "in", "value": 12.0},
            {"from": "in", "to": "cm", "value": 2.54},
        ]
    });
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "{}", json).unwrap();
    tmp.flush().unwrap();
    tmp
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_info() {
    let tmp = length_table(true);
    let path = tmp.path().to_str().unwrap();

    let output = run_cgraph(&["--format", "json", "info", path]);
    assert_success(&output);
    let info: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(info["nodes"], 4);
    assert_eq!(info["edges"], 6);
    assert_eq!(info["invertible"], true);
}

#[test]
fn test_cli_path_text() {
    let tmp = length_table(false);
    let path = tmp.path().to_str().unwrap();

    let output = run_cgraph(&["path", path, "m", "in"]);
    assert_success(&output);
    assert_eq!(stdout_str(&output).trim(), "m -> ft -> in");
}

#[test]
fn test_cli_path_json_reverse() {
    let tmp = length_table(true);
    let path = tmp.path().to_str().unwrap();

    let output = run_cgraph(&["--format", "json", "path", path, "in", "m"]);
    assert_success(&output);
    let result: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(result["path"], serde_json::json!(["in", "ft", "m"]));
}

#[test]
fn test_cli_weights() {
    let tmp = length_table(false);
    let path = tmp.path().to_str().unwrap();

    let output = run_cgraph(&["--format", "json", "weights", path, "m", "in"]);
    assert_success(&output);
    let result: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(result["weights"], serde_json::json!([3.28, 12.0]));
}

#[test]
fn test_cli_convert() {
    let tmp = length_table(true);
    let path = tmp.path().to_str().unwrap();

    let output = run_cgraph(&["--format", "json", "convert", path, "2", "m", "in"]);
    assert_success(&output);
    let result: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    let value = result["result"].as_f64().unwrap();
    assert!((value - 2.0 * 3.28 * 12.0).abs() < 1e-9);
}

#[test]
fn test_cli_neighbors() {
    let tmp = length_table(true);
    let path = tmp.path().to_str().unwrap();

    let output = run_cgraph(&["neighbors", path, "ft"]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("ft -> in: 12"));
    assert!(out.contains("ft -> m:"));
}

#[test]
fn test_cli_export() {
    let tmp = length_table(false);
    let path = tmp.path().to_str().unwrap();

    let output = run_cgraph(&["export", path, "--pretty"]);
    assert_success(&output);
    let graph: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(graph["m"]["connected"]["ft"], 3.28);
}

// ==================== Exit Code Tests ====================

#[test]
fn test_cli_unknown_node_exit_code() {
    let tmp = length_table(true);
    let path = tmp.path().to_str().unwrap();

    let output = run_cgraph(&["path", path, "m", "hr"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("hr"));
}

#[test]
fn test_cli_no_path_exit_code() {
    let tmp = length_table(false);
    let path = tmp.path().to_str().unwrap();

    let output = run_cgraph(&["weights", path, "cm", "m"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_cli_malformed_table_exit_code() {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "{{ not json").unwrap();
    tmp.flush().unwrap();
    let path = tmp.path().to_str().unwrap();

    let output = run_cgraph(&["info", path]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_cli_missing_file_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let output = run_cgraph(&["info", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
}
