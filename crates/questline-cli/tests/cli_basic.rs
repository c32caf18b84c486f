//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Commands that
//! touch the stats database run against the dev data directory.

use std::process::Command;

/// Run a CLI command against an explicit data-directory environment.
fn run_cli_in(env: &str, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "questline-cli", "--"])
        .args(args)
        .env("QUESTLINE_ENV", env)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    run_cli_in("dev", args)
}

#[test]
fn test_score_basic() {
    let (stdout, _, code) = run_cli(&["score", "Write report"]);
    assert_eq!(code, 0, "score failed");
    assert!(stdout.contains("Final XP"));
}

#[test]
fn test_score_json_has_final_xp() {
    let (stdout, _, code) = run_cli(&[
        "score",
        "Ship the release",
        "--priority",
        "critical",
        "--work",
        "deep",
        "--difficulty",
        "expert",
        "--minutes",
        "90",
        "--json",
    ]);
    assert_eq!(code, 0, "score json failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    assert_eq!(parsed["final_xp"], 254);
}

#[test]
fn test_score_rejects_unknown_priority() {
    let (_, stderr, code) = run_cli(&["score", "x", "--priority", "bogus"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown priority"));
}

#[test]
fn test_analyze_low_priority() {
    let (stdout, _, code) = run_cli(&["analyze", "low priority cleanup", "--json"]);
    assert_eq!(code, 0, "analyze failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    assert_eq!(parsed["priority"], "LOW");
}

#[test]
fn test_level_from_explicit_xp() {
    let (stdout, _, code) = run_cli(&["level", "--xp", "100", "--json"]);
    assert_eq!(code, 0, "level failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    assert_eq!(parsed["level"], 2);
    assert_eq!(parsed["xp_in_level"], 0);
}

#[test]
fn test_achievements_list() {
    let (stdout, _, code) = run_cli(&["achievements", "list"]);
    assert_eq!(code, 0, "achievements list failed");
    assert!(stdout.contains("First Steps"));
}

#[test]
fn test_challenge_today_is_stable_within_a_day() {
    let (first, _, code) = run_cli(&["challenge", "today", "--json"]);
    assert_eq!(code, 0, "challenge today failed");
    let (second, _, _) = run_cli(&["challenge", "today", "--json"]);

    let a: serde_json::Value = serde_json::from_str(&first).expect("invalid JSON");
    let b: serde_json::Value = serde_json::from_str(&second).expect("invalid JSON");
    assert_eq!(a["name"], b["name"]);
}

#[test]
fn test_stats_show() {
    let (stdout, _, code) = run_cli(&["stats", "show"]);
    assert_eq!(code, 0, "stats show failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    assert!(parsed.get("total_xp").is_some());
}

#[test]
fn test_complete_awards_xp() {
    let (_, _, code) = run_cli(&["stats", "reset"]);
    assert_eq!(code, 0, "stats reset failed");

    let (stdout, _, code) = run_cli(&["complete", "First task of the run", "--json"]);
    assert_eq!(code, 0, "complete failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    assert!(parsed["xp_earned"].as_u64().unwrap() >= 5);
    assert_eq!(parsed["stats"]["total_tasks_completed"], 1);
}

#[test]
fn test_score_honors_configured_xp_floor() {
    // Runs in its own data directory so the floor override cannot leak
    // into the dev-environment tests.
    let env = "floor-test";
    let (_, _, code) = run_cli_in(env, &["config", "reset"]);
    assert_eq!(code, 0, "config reset failed");
    let (_, _, code) = run_cli_in(env, &["config", "set", "tuning.xp_floor", "500"]);
    assert_eq!(code, 0, "config set failed");

    let (stdout, _, code) = run_cli_in(
        env,
        &[
            "score",
            "Tiny chore",
            "--priority",
            "low",
            "--difficulty",
            "trivial",
            "--minutes",
            "10",
            "--json",
        ],
    );
    assert_eq!(code, 0, "score failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    assert_eq!(parsed["final_xp"], 500);

    let (_, _, code) = run_cli_in(env, &["config", "reset"]);
    assert_eq!(code, 0, "config reset failed");
}

#[test]
fn test_config_get_and_list() {
    let (stdout, _, code) = run_cli(&["config", "get", "tuning.xp_floor"]);
    assert_eq!(code, 0, "config get failed");
    assert!(!stdout.trim().is_empty());

    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    assert!(stdout.contains("xp_floor"));
}
