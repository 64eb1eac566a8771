//! Integration tests for the polygon binary
//!
//! Runs the compiled CLI and checks its output end to end.

use std::process::{Command, Output};

fn polygon(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_polygon"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run polygon binary")
}

#[test]
fn test_generate_default_roster() {
    let output = polygon(&["generate"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let rounds: Vec<&str> = stdout.trim_end().split("\n\n").collect();
    assert_eq!(rounds.len(), 5);
    assert!(rounds.iter().all(|r| r.lines().count() == 3));
    assert!(stdout.starts_with("Team 1 v Team 5\n"));
}

#[test]
fn test_generate_named_teams_with_bye() {
    let output = polygon(&["generate", "--teams", "Ash,Birch,Cedar", "--games", "2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("Bye: ").count(), 6);
    assert_eq!(stdout.matches(" v ").count(), 6);
    assert!(stdout.starts_with("Ash v Cedar\nBye: Birch\n\n"));
}

#[test]
fn test_generate_json_with_stats() {
    let output = polygon(&["generate", "--team-count", "4", "--games", "2", "--json", "--stats"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["games"]["Fixed"], 2);
    assert_eq!(value["rounds"].as_array().unwrap().len(), 6);
    assert_eq!(value["rounds"][3]["phase"], 1);

    let balance = value["balance"]["teams"].as_array().unwrap();
    assert_eq!(balance.len(), 4);
    for entry in balance {
        assert_eq!(entry["home"], 3);
        assert_eq!(entry["away"], 3);
    }
}

#[test]
fn test_generate_unbounded_with_limit() {
    let output = polygon(&["generate", "--team-count", "5", "--unbounded", "--limit", "12"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end().split("\n\n").count(), 12);
}

#[test]
fn test_generate_rejects_bad_input() {
    let output = polygon(&["generate", "--teams", "Solo"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("at least 2 teams"), "stderr: {}", stderr);

    let output = polygon(&["generate", "--games", "-2"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("must not be negative"), "stderr: {}", stderr);

    let output = polygon(&["generate", "--unbounded"]);
    assert!(!output.status.success());
}
