//! Integration tests for the `deskline` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! and error handling — all without requiring a live helpdesk server.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `deskline` binary with env isolation.
///
/// Clears all `DESKLINE_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn deskline_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("deskline");
    cmd.env("HOME", "/tmp/deskline-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/deskline-cli-test-nonexistent")
        .env("XDG_DATA_HOME", "/tmp/deskline-cli-test-nonexistent")
        .env_remove("DESKLINE_PROFILE")
        .env_remove("DESKLINE_SERVER")
        .env_remove("DESKLINE_EMAIL")
        .env_remove("DESKLINE_OUTPUT")
        .env_remove("DESKLINE_INSECURE")
        .env_remove("DESKLINE_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = deskline_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    deskline_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("helpdesk")
            .and(predicate::str::contains("tickets"))
            .and(predicate::str::contains("users"))
            .and(predicate::str::contains("admins")),
    );
}

#[test]
fn test_version_flag() {
    deskline_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("deskline"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    deskline_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    deskline_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_fish() {
    deskline_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = deskline_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_tickets_list_no_server() {
    deskline_cmd()
        .args(["tickets", "list"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("server")
                .or(predicate::str::contains("config"))
                .or(predicate::str::contains("profile")),
        );
}

#[test]
fn test_no_credentials_exit_code() {
    // A server flag is enough to build a connection config, but without
    // stored credentials the command must fail with the auth exit code.
    let output = deskline_cmd()
        .args(["--server", "http://127.0.0.1:1", "tickets", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3), "Expected auth exit code 3");
    let text = combined_output(&output);
    assert!(
        text.contains("credentials"),
        "Expected error about missing credentials:\n{text}"
    );
}

#[test]
fn test_unknown_profile() {
    deskline_cmd()
        .args(["--profile", "nope", "tickets", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn test_config_show_no_config() {
    // `config show` renders the default config when no file exists.
    deskline_cmd().args(["config", "show"]).assert().success();
}

#[test]
fn test_invalid_output_format() {
    let output = deskline_cmd()
        .args(["--output", "invalid", "tickets", "list"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_global_flags_parsing() {
    // All flags should parse correctly — the failure should be about
    // missing server config, not about argument parsing.
    deskline_cmd()
        .args([
            "--output",
            "json",
            "--verbose",
            "--insecure",
            "--timeout",
            "60",
            "tickets",
            "list",
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("server")
                .or(predicate::str::contains("config"))
                .or(predicate::str::contains("profile")),
        );
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_tickets_subcommands_exist() {
    deskline_cmd()
        .args(["tickets", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("assign"))
                .and(predicate::str::contains("archive"))
                .and(predicate::str::contains("restore")),
        );
}

#[test]
fn test_actions_subcommands_exist() {
    deskline_cmd()
        .args(["actions", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("fields")
                .and(predicate::str::contains("add-field"))
                .and(predicate::str::contains("remove-field")),
        );
}

#[test]
fn test_auth_subcommands_exist() {
    deskline_cmd()
        .args(["auth", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("login")
                .and(predicate::str::contains("logout"))
                .and(predicate::str::contains("whoami")),
        );
}

#[test]
fn test_config_subcommands_exist() {
    deskline_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("profiles"))
                .and(predicate::str::contains("set-password")),
        );
}

#[test]
fn test_list_aliases() {
    // `ls` aliases should parse; failure must be about configuration.
    deskline_cmd()
        .args(["tags", "ls"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("server")
                .or(predicate::str::contains("config"))
                .or(predicate::str::contains("profile")),
        );
}
