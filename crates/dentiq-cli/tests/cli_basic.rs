//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a throwaway config directory.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run a CLI command with `stdin` and return (code, stdout, stderr).
fn run_cli_with_input(home: &std::path::Path, args: &[&str], stdin: &str) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_dentiq"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("DENTIQ_ENV")
        .env_remove("DENTIQ_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn run_cli(home: &std::path::Path, args: &[&str]) -> (i32, String, String) {
    run_cli_with_input(home, args, "")
}

#[test]
fn test_calculator_score_json() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        home.path(),
        &[
            "calculator",
            "score",
            "--answer",
            "brushing=twice",
            "--answer",
            "flossing=daily",
            "--answer",
            "dentist=recent",
            "--answer",
            "symptoms=none",
            "--answer",
            "diet=rarely",
            "--json",
        ],
    );
    assert_eq!(code, 0, "calculator score failed");

    let view: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(view["score"]["total"], 50);
    assert_eq!(view["label"], "Отличное здоровье зубов");
    assert_eq!(view["icon"], "shield");
}

#[test]
fn test_calculator_score_missing_answer() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(
        home.path(),
        &["calculator", "score", "--answer", "brushing=twice"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("error: "));
    assert!(stderr.contains("flossing"));
}

#[test]
fn test_calculator_run_interactive() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli_with_input(
        home.path(),
        &["calculator", "run"],
        "4\n4\n4\n4\n4\n",
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Ваш результат: 0 из 50 баллов"));
    assert!(stdout.contains("Требует внимания здоровье зубов"));
}

#[test]
fn test_quest_score_text() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        home.path(),
        &[
            "quest",
            "score",
            "--answer",
            "brushing-time=2min",
            "--answer",
            "flossing-frequency=daily",
            "--answer",
            "sugar-impact=acid-attack",
            "--answer",
            "dentist-visits=twice-yearly",
        ],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Ваш результат: 4 из 4 правильных ответов"));
    assert!(stdout.contains("Превосходно"));
}

#[test]
fn test_tips_list_json() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        home.path(),
        &["tips", "list", "--category", "daily", "--read", "night-routine", "--json"],
    );
    assert_eq!(code, 0);

    let page: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(page["tips"].as_array().unwrap().len(), 4);
    assert_eq!(page["read_count"], 1);
    assert_eq!(page["total_count"], 9);
}

#[test]
fn test_tips_unknown_category() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["tips", "list", "--category", "sweets"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("sweets"));
}

#[test]
fn test_catalog_dump() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["catalog", "quest"]);
    assert_eq!(code, 0);
    let stages: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(stages.as_array().unwrap().len(), 4);
}

#[test]
fn test_config_set_and_get() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(
        home.path(),
        &["config", "set", "tips.default_category", "children"],
    );
    assert_eq!(code, 0);

    let (code, stdout, _) = run_cli(home.path(), &["config", "get", "tips.default_category"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "children");

    let (code, stdout, _) = run_cli(home.path(), &["tips", "list", "--json"]);
    assert_eq!(code, 0);
    let page: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(page["category"]["id"], "children");
}

#[test]
fn test_config_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["config", "get", "no.such.key"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_read_only_commands_leave_config_dir_alone() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(home.path(), &["tips", "list"]);
    assert_eq!(code, 0);
    let (code, _, _) = run_cli(home.path(), &["config", "get", "log.filter"]);
    assert_eq!(code, 0);
    assert!(!home.path().join(".config").join("dentiq").exists());
}
