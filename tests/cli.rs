//! Run the match-goals binary against temporary CSV files.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

const RESULTS: &str = "home_team,away_team,home_score,away_score,tournament
Italy,France,2,1,FIFA World Cup
France,Italy,0,3,FIFA World Cup
Italy,Spain,5,0,Friendly
";

fn match_goals(dir: &TempDir, args: &[&str]) -> std::process::Output {
    let path = dir.path().join("results.csv");
    fs::write(&path, RESULTS).unwrap();
    Command::new(env!("CARGO_BIN_EXE_match-goals"))
        .arg(&path)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_default_tournament_total() {
    let dir = TempDir::new().unwrap();
    let output = match_goals(&dir, &[]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "5");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Italy games"));
}

#[test]
fn test_all_tournaments() {
    let dir = TempDir::new().unwrap();
    let output = match_goals(&dir, &["--tournament", ""]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "10");
}

#[test]
fn test_where_filter() {
    let dir = TempDir::new().unwrap();
    let output = match_goals(&dir, &["--tournament", "", "-w", "home_score__ge=2", "-m", "all"]);
    assert!(output.status.success());
    // Italy-France (2) and Italy-Spain (5)
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "7");
}

#[test]
fn test_invalid_operator_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = match_goals(&dir, &["-w", "home_score__between=2"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid operator 'between'"), "Got: {stderr}");
}

#[test]
fn test_invalid_mode_without_filters_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = match_goals(&dir, &["-m", "xor"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid mode 'xor'"), "Got: {stderr}");
}

#[test]
fn test_long_where_flag() {
    let dir = TempDir::new().unwrap();
    let output = match_goals(&dir, &["--where", "away_score__ge=3"]);
    assert!(output.status.success());
    // France-Italy (3) is the only World Cup match with away_score >= 3
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "3");
}

#[test]
fn test_missing_file_exits_with_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_match-goals"))
        .arg("does/not/exist.csv")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error reading"));
}
