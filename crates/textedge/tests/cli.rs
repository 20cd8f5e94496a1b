//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `score --json` on stdin and parse the report.
fn score_json(input: &str) -> Value {
    let output = cmd()
        .args(["score", "--json"])
        .write_stdin(input)
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

const SIMPLE: &str = "This is a simple test. It has short sentences.";

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("score"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: Value = serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// Score Command
// =============================================================================

#[test]
fn score_stdin_text_output() {
    cmd()
        .arg("score")
        .write_stdin(SIMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("<stdin>"))
        .stdout(predicate::str::contains("Advantage:"))
        .stdout(predicate::str::contains("Tips:"));
}

#[test]
fn score_dash_reads_stdin() {
    cmd()
        .args(["score", "-"])
        .write_stdin(SIMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("<stdin>"));
}

#[test]
fn score_file_text_output() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), SIMPLE).unwrap();
    cmd()
        .args(["score", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strong clarity and originality"));
}

#[test]
fn score_json_simple_text() {
    let json = score_json(SIMPLE);
    assert_eq!(json["metrics"]["tokenCount"], 9);
    assert_eq!(json["metrics"]["uniqueWords"], 9);
    assert_eq!(json["metrics"]["jargonDensity"], 0.0);
    assert_eq!(json["metrics"]["advantage"], 70);
    assert_eq!(json["advice"], serde_json::json!(["strong-performance"]));
}

#[test]
fn score_json_empty_input() {
    let json = score_json("");
    assert_eq!(json["metrics"]["tokenCount"], 0);
    assert_eq!(json["metrics"]["structureScore"], 0.8);
    assert_eq!(
        json["advice"],
        serde_json::json!(["add-examples", "vary-vocabulary"])
    );
}

#[test]
fn score_json_repeated_jargon() {
    let json = score_json(&vec!["synergy"; 100].join(" "));
    assert_eq!(json["metrics"]["jargonDensity"], 1.0);
    let advice = json["advice"].as_array().unwrap();
    assert!(advice.contains(&Value::from("replace-jargon")));
    assert_eq!(advice.len(), 5);
}

#[test]
fn score_min_score_gate_fails() {
    cmd()
        .args(["score", "--min-score", "60"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("below minimum 60"));
}

#[test]
fn score_gate_failure_reported_once() {
    cmd()
        .args(["score", "--min-score", "60"])
        .env_remove("RUST_LOG")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("below minimum 60").count(1));
}

#[test]
fn score_min_score_gate_passes() {
    cmd()
        .args(["score", "--min-score", "50"])
        .write_stdin("")
        .assert()
        .success();
}

#[test]
fn score_json_still_enforces_gate() {
    cmd()
        .args(["score", "--json", "--min-score", "99"])
        .write_stdin(SIMPLE)
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"advantage\""));
}

#[test]
fn score_missing_file_fails() {
    cmd()
        .args(["score", "/nonexistent/textedge-input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn score_non_latin_text_still_scores() {
    let json = score_json("日本語のテキストです。");
    assert_eq!(json["metrics"]["tokenCount"], 0);
    assert!(!json["advice"].as_array().unwrap().is_empty());
}

// =============================================================================
// Schema Command
// =============================================================================

#[test]
fn schema_outputs_json_schema() {
    let output = cmd().arg("schema").assert().success();
    let json: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json["title"], "ScoreReport");
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

const ANSI_ESCAPE: &str = "\x1b[";

#[test]
fn color_never_emits_no_escapes() {
    cmd()
        .args(["--color", "never", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains(ANSI_ESCAPE).not());

    cmd()
        .args(["--color", "never", "-v", "score", "--min-score", "99"])
        .env_remove("RUST_LOG")
        .write_stdin(SIMPLE)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Advantage:"))
        .stdout(predicate::str::contains(ANSI_ESCAPE).not())
        .stderr(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::contains(ANSI_ESCAPE).not());
}

#[test]
fn color_auto_is_plain_when_piped() {
    cmd()
        .arg("score")
        .write_stdin(SIMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains(ANSI_ESCAPE).not());
}

#[test]
fn color_always_styles_output() {
    cmd()
        .args(["--color", "always", "score"])
        .write_stdin(SIMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains(ANSI_ESCAPE));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn min_score_out_of_range_rejected() {
    cmd()
        .args(["score", "--min-score", "150"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
