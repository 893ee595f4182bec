// crates/translation-coverage-cli/tests/cli_commands.rs
// ============================================================================
// Module: CLI Command Tests
// Description: End-to-end tests for the translation-coverage binary.
// Purpose: Validate exit codes and output of check, keys, and config commands.
// Dependencies: translation-coverage-cli binary, serde_json, tempfile
// ============================================================================

//! ## Overview
//! Runs the compiled binary against temporary config, catalog, and manifest
//! files and asserts on exit status and output.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

use serde_json::Value;
use tempfile::TempDir;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

const CONFIG: &str = r#"
[locales]
default = "en"
available = ["en", "fr"]

[catalog]
paths = ["locales"]
"#;

const EN_YAML: &str = "
en:
  activerecord:
    models:
      widget:
        one: Widget
        other: Widgets
    attributes:
      widget:
        title: Title
  errors:
    messages:
      taken: has already been taken
";

const FR_YAML: &str = "
fr:
  activerecord:
    models:
      widget: Gadget
  errors:
    messages:
      taken: est déjà pris
";

const PASSING_SUBJECTS: &str = r#"
[[subjects]]
shape = "model"
subject = "Widget"

[[subjects]]
shape = "error_attribute"
subject = "Widget"
member = "title"
topic = "taken"
"#;

const FAILING_SUBJECTS: &str = r#"
[[subjects]]
shape = "model_attribute"
subject = "Widget"
member = "title"
"#;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_translation-coverage"))
}

/// Writes config, locale files, and a subjects manifest into a temp dir.
fn workspace(subjects: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("translation-coverage.toml"), CONFIG).unwrap();
    fs::create_dir(dir.path().join("locales")).unwrap();
    fs::write(dir.path().join("locales/en.yml"), EN_YAML).unwrap();
    fs::write(dir.path().join("locales/fr.yml"), FR_YAML).unwrap();
    fs::write(dir.path().join("subjects.toml"), subjects).unwrap();
    dir
}

fn run_check(dir: &Path, extra: &[&str]) -> Output {
    let config = dir.join("translation-coverage.toml");
    let subjects = dir.join("subjects.toml");
    Command::new(bin())
        .arg("check")
        .arg("--config")
        .arg(&config)
        .arg("--subjects")
        .arg(&subjects)
        .args(extra)
        .env_remove("TRANSLATION_COVERAGE_LANG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ============================================================================
// SECTION: Check Command
// ============================================================================

#[test]
fn check_passes_when_every_locale_is_covered() {
    let dir = workspace(PASSING_SUBJECTS);
    let output = run_check(dir.path(), &[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("PASS Widget: have a translated model name in :en, :fr"));
    assert!(text.contains(
        "PASS Widget#title: have a translated error message for 'taken' on 'title' in :en, :fr"
    ));
    assert!(text.contains("2 of 2 subjects covered, 0 failing."));
}

#[test]
fn check_fails_and_lists_candidates_for_missing_locale() {
    let dir = workspace(FAILING_SUBJECTS);
    let output = run_check(dir.path(), &[]);
    assert!(!output.status.success());
    let text = stdout(&output);
    assert!(text.contains("FAIL Widget#title: have a translated attribute name for 'title'"));
    assert!(text.contains("    - activerecord.attributes.widget.title"));
    assert!(text.contains("    for the locales: :fr"));
    assert!(text.contains("0 of 1 subjects covered, 1 failing."));
}

#[test]
fn default_locale_only_ignores_other_locales() {
    let dir = workspace(FAILING_SUBJECTS);
    let output = run_check(dir.path(), &["--default-locale-only"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("in :en"));
}

#[test]
fn json_format_emits_verdict_array() {
    let dir = workspace(FAILING_SUBJECTS);
    let output = run_check(dir.path(), &["--format", "json"]);
    assert!(!output.status.success());
    let verdicts: Value = serde_json::from_slice(&output.stdout).unwrap();
    let first = &verdicts.as_array().unwrap()[0];
    assert_eq!(first["passed"], false);
    assert_eq!(first["failing_locales"], serde_json::json!(["fr"]));
}

#[test]
fn audit_log_records_one_line_per_subject() {
    let dir = workspace(PASSING_SUBJECTS);
    let mut config = String::from(CONFIG);
    config.push_str("\n[audit]\nenabled = true\npath = \"audit.jsonl\"\n");
    fs::write(dir.path().join("translation-coverage.toml"), config).unwrap();
    let output = run_check(dir.path(), &[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let log = fs::read_to_string(dir.path().join("audit.jsonl")).unwrap();
    let events: Vec<Value> = log.lines().map(|line| serde_json::from_str(line).unwrap()).collect();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["event"], "coverage_check");
    assert_eq!(events[0]["subject"], "Widget");
    assert_eq!(events[0]["hit_count"], 2);
    assert_eq!(events[1]["shape"], "error_attribute");
}

#[test]
fn invalid_subject_is_reported_as_error() {
    let dir =
        workspace("[[subjects]]\nshape = \"model\"\nsubject = \"Widget\"\nmember = \"title\"\n");
    let output = run_check(dir.path(), &[]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("could not be checked"));
    assert!(stdout(&output).is_empty());
}

// ============================================================================
// SECTION: Keys Command
// ============================================================================

#[test]
fn keys_prints_candidates_most_specific_first() {
    let output = Command::new(bin())
        .args([
            "keys",
            "--shape",
            "controller_action",
            "--subject",
            "Admin::UsersController",
            "--member",
            "create",
            "--topic",
            "success",
        ])
        .env_remove("TRANSLATION_COVERAGE_LANG")
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "actioncontroller.admin/users_controller.create.flash.success",
            "actioncontroller.admin/users_controller.flash.success",
            "actioncontroller.create.flash.success",
            "actioncontroller.flash.success",
        ]
    );
}

#[test]
fn keys_rejects_missing_role() {
    let output = Command::new(bin())
        .args(["keys", "--shape", "error", "--subject", "Widget"])
        .env_remove("TRANSLATION_COVERAGE_LANG")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to generate keys"));
}

// ============================================================================
// SECTION: Config Command
// ============================================================================

#[test]
fn config_validate_accepts_valid_config() {
    let dir = workspace(PASSING_SUBJECTS);
    let output = Command::new(bin())
        .args(["config", "validate", "--config"])
        .arg(dir.path().join("translation-coverage.toml"))
        .env_remove("TRANSLATION_COVERAGE_LANG")
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Config valid."));
}

#[test]
fn config_validate_rejects_default_outside_available() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[locales]\ndefault = \"de\"\navailable = [\"en\"]\n").unwrap();
    let output = Command::new(bin())
        .args(["config", "validate", "--config"])
        .arg(&path)
        .env_remove("TRANSLATION_COVERAGE_LANG")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to load config"));
}

// ============================================================================
// SECTION: Localization
// ============================================================================

#[test]
fn catalan_output_carries_disclaimer() {
    let dir = workspace(PASSING_SUBJECTS);
    let output = Command::new(bin())
        .args(["--lang", "ca", "config", "validate", "--config"])
        .arg(dir.path().join("translation-coverage.toml"))
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("Configuració vàlida."));
    assert!(stderr(&output).contains("traduïda automàticament"));
}

#[test]
fn invalid_lang_env_is_rejected() {
    let output = Command::new(bin())
        .args(["keys", "--shape", "model", "--subject", "Widget"])
        .env("TRANSLATION_COVERAGE_LANG", "xx")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("TRANSLATION_COVERAGE_LANG"));
}
