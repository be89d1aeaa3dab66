//! Integration tests for the `entity` CLI

use std::fs;

use entity::i18n::filler_fragments;
use entity::Language;
use predicates::prelude::*;

use crate::helpers::{is_fragment_stream, run_entity, Sandbox};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_exits_0_and_lists_commands() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = run_entity(&sandbox, &["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("ENTITY-001"));
    assert!(stdout.contains("filler"));
    assert!(stdout.contains("about"));
    assert!(stdout.contains("--lang"));
}

#[test]
fn version_flag_prints_version() {
    Sandbox::new()
        .entity()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Filler Tests
// ============================================================================

#[test]
fn filler_prints_requested_number_of_chars() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = run_entity(&sandbox, &["filler", "-n", "15"]);

    assert_eq!(exit_code, 0);
    let line = stdout.strip_suffix('\n').unwrap();
    assert_eq!(line.chars().count(), 15);
    assert!(is_fragment_stream(line, filler_fragments(Language::En)));
}

#[test]
fn filler_defaults_to_one_hundred_chars() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, _) = run_entity(&sandbox, &["filler"]);
    assert_eq!(stdout.trim_end_matches('\n').chars().count(), 100);
}

#[test]
fn filler_grows_past_initial_buffer() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = run_entity(&sandbox, &["filler", "-n", "5000"]);

    assert_eq!(exit_code, 0);
    let line = stdout.strip_suffix('\n').unwrap();
    assert_eq!(line.chars().count(), 5000);
    assert!(is_fragment_stream(line, filler_fragments(Language::En)));
}

#[test]
fn filler_uses_portuguese_fragments() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) =
        run_entity(&sandbox, &["--lang", "pt-BR", "filler", "-n", "300"]);

    assert_eq!(exit_code, 0);
    let line = stdout.strip_suffix('\n').unwrap();
    assert_eq!(line.chars().count(), 300);
    assert!(is_fragment_stream(line, filler_fragments(Language::PtBr)));
}

#[test]
fn filler_with_seed_is_reproducible() {
    let sandbox = Sandbox::new();
    let (first, _, _) = run_entity(&sandbox, &["--seed", "7", "filler", "-n", "80"]);
    let (second, _, _) = run_entity(&sandbox, &["--seed", "7", "filler", "-n", "80"]);
    assert_eq!(first, second);
}

#[test]
fn filler_zero_prints_empty_line() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = run_entity(&sandbox, &["filler", "-n", "0"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\n");
}

// ============================================================================
// About Tests
// ============================================================================

#[test]
fn snapshot_about_en() {
    let sandbox = Sandbox::new();
    let (stdout, stderr, exit_code) = run_entity(&sandbox, &["--lang", "en", "about"]);
    let output = format!(
        "=== entity about --lang en ===\nExit code: {}\n\n--- stdout ---\n{}\n--- stderr ---\n{}",
        exit_code, stdout, stderr
    );
    insta::assert_snapshot!("about_en", output);
}

#[test]
fn about_follows_language() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = run_entity(&sandbox, &["--lang", "pt-BR", "about"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("Sobre ENTITY-001"));
    assert!(stdout.contains("Ver no GitHub"));
}

#[test]
fn about_uses_configured_theme() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.config_path(), "[ui]\ntheme = \"amber\"\n").unwrap();
    let output = sandbox
        .entity()
        .env_remove("NO_COLOR")
        .args(["--lang", "en", "about"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Amber paints with yellow, the default phosphor theme with green
    assert!(stdout.starts_with("\x1b[33m"), "got {:?}", stdout);
}

// ============================================================================
// Language Tests
// ============================================================================

#[test]
fn lang_defaults_to_locale() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, _) = run_entity(&sandbox, &["lang"]);
    assert_eq!(stdout.trim(), "en");

    sandbox
        .entity()
        .env("LANG", "pt_BR.UTF-8")
        .arg("lang")
        .assert()
        .success()
        .stdout("pt-BR\n");
}

#[test]
fn lang_set_persists_to_config() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = run_entity(&sandbox, &["lang", "set", "pt-BR"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Language set to pt-BR"));
    let config = fs::read_to_string(sandbox.config_path()).unwrap();
    assert!(config.contains("language = \"pt-BR\""));

    let (stdout, _stderr, _) = run_entity(&sandbox, &["lang"]);
    assert_eq!(stdout.trim(), "pt-BR");
}

#[test]
fn lang_toggle_flips_language() {
    let sandbox = Sandbox::new();
    run_entity(&sandbox, &["lang", "set", "en"]);
    let (stdout, _stderr, exit_code) = run_entity(&sandbox, &["lang", "toggle"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("pt-BR"));
}

#[test]
fn lang_override_is_not_persisted() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, _) = run_entity(&sandbox, &["--lang", "pt-BR", "lang"]);
    assert_eq!(stdout.trim(), "pt-BR");
    assert!(!sandbox.config_path().exists());
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn unknown_language_is_a_usage_error() {
    let sandbox = Sandbox::new();
    let (_stdout, stderr, exit_code) = run_entity(&sandbox, &["--lang", "fr", "about"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("Unknown language 'fr'"));
}

#[test]
fn corrupt_config_exits_1() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.config_path(), "language = [").unwrap();
    let (_stdout, stderr, exit_code) = run_entity(&sandbox, &["about"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Could not load"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_show_prints_defaults() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = run_entity(&sandbox, &["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[typewriter]"));
    assert!(stdout.contains("min_filler_len = 100"));
    assert!(stdout.contains("theme = \"phosphor\""));
}

#[test]
fn config_path_prints_override() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = run_entity(&sandbox, &["config", "path"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), sandbox.config_path().display().to_string());
}

#[test]
fn config_min_filler_len_is_respected() {
    let sandbox = Sandbox::new();
    fs::write(
        sandbox.config_path(),
        "[typewriter]\nmin_filler_len = 0\nseed = 11\n",
    )
    .unwrap();
    let (stdout, _stderr, exit_code) = run_entity(&sandbox, &["filler", "-n", "40"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim_end_matches('\n').chars().count(), 40);
}
