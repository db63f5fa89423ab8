use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{LAST_OUTPUT, current_year, read_lines, rtl, setup_test_log, write_sessions};

#[test]
fn test_add_creates_log_on_first_entry() {
    let log_path = setup_test_log("cli_first_entry");

    rtl()
        .args(["--file", &log_path, "--test", "--no-sessions", "add", "writing", "report"])
        .assert()
        .success()
        .stdout(contains("Task added"));

    let lines = read_lines(&log_path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(",writing,report"), "got: {}", lines[0]);
}

#[test]
fn test_add_joins_and_trims_content_words() {
    let log_path = setup_test_log("cli_join_content");

    rtl()
        .args([
            "--file", &log_path, "--test", "--no-sessions", "add", "  review ", "pull", "request",
        ])
        .assert()
        .success();

    let lines = read_lines(&log_path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(",review,pull request"), "got: {}", lines[0]);
}

#[test]
fn test_same_task_twice_is_rejected() {
    let log_path = setup_test_log("cli_duplicate");

    rtl()
        .args(["--file", &log_path, "--test", "--no-sessions", "add", "writing", "report"])
        .assert()
        .success()
        .stdout(contains("Task added"));

    rtl()
        .args(["--file", &log_path, "--test", "--no-sessions", "add", "writing", "report"])
        .assert()
        .success()
        .stdout(contains("Task already in course"));

    assert_eq!(read_lines(&log_path).len(), 1);
}

#[test]
fn test_changed_content_is_recorded() {
    let log_path = setup_test_log("cli_changed_content");

    for content in ["report", "slides"] {
        rtl()
            .args(["--file", &log_path, "--test", "--no-sessions", "add", "writing", content])
            .assert()
            .success()
            .stdout(contains("Task added"));
    }

    assert_eq!(read_lines(&log_path).len(), 2);
}

#[test]
fn test_session_gap_is_backfilled_before_task() {
    let log_path = setup_test_log("cli_backfill");
    let sessions = write_sessions("cli_backfill", LAST_OUTPUT);
    let year = current_year();

    rtl()
        .args(["--file", &log_path, "--test", "--sessions", &sessions, "add", "writing", "report"])
        .assert()
        .success()
        .stdout(contains("Session gap detected"))
        .stdout(contains("Task added"));

    let lines = read_lines(&log_path);
    assert_eq!(lines.len(), 3, "got: {:?}", lines);
    assert!(lines[0].starts_with(&format!("{year}-01-01T17:00:00")));
    assert!(lines[0].ends_with(",logout,"));
    assert!(lines[1].starts_with(&format!("{year}-01-02T09:00:00")));
    assert!(lines[1].ends_with(",login,"));
    assert!(lines[2].ends_with(",writing,report"));
}

#[test]
fn test_backfill_happens_once_per_session() {
    let log_path = setup_test_log("cli_backfill_once");
    let sessions = write_sessions("cli_backfill_once", LAST_OUTPUT);

    rtl()
        .args(["--file", &log_path, "--test", "--sessions", &sessions, "add", "writing", "report"])
        .assert()
        .success();

    rtl()
        .args(["--file", &log_path, "--test", "--sessions", &sessions, "add", "writing", "report"])
        .assert()
        .success()
        .stdout(contains("Task already in course").and(contains("Session gap").not()));

    assert_eq!(read_lines(&log_path).len(), 3);
}

#[test]
fn test_boundary_type_skips_backfill() {
    let log_path = setup_test_log("cli_boundary_skip");
    let sessions = write_sessions("cli_boundary_skip", LAST_OUTPUT);

    rtl()
        .args(["--file", &log_path, "--test", "--sessions", &sessions, "add", "logout"])
        .assert()
        .success()
        .stdout(contains("Task added"));

    let lines = read_lines(&log_path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(",logout,"));
}

#[test]
fn test_comma_in_content_is_rejected() {
    let log_path = setup_test_log("cli_comma");

    rtl()
        .args(["--file", &log_path, "--test", "--no-sessions", "add", "writing", "a,b"])
        .assert()
        .failure()
        .stderr(contains("comma"));

    assert!(read_lines(&log_path).is_empty());
}

#[test]
fn test_unreadable_log_is_reported() {
    // a directory cannot be read or appended to as a task log
    let dir = std::env::temp_dir().join("cli_unwritable_rtasklogger");
    fs::create_dir_all(&dir).expect("create dir");
    let dir_str = dir.to_string_lossy().to_string();

    rtl()
        .args(["--file", &dir_str, "--test", "--no-sessions", "add", "writing", "report"])
        .assert()
        .failure()
        .stderr(contains("task log"));
}

#[test]
fn test_types_and_contents_most_recent_first() {
    let log_path = setup_test_log("cli_suggest");
    fs::write(
        &log_path,
        "2024-01-02T09:00:00+00:00,login,\n\
         2024-01-10T09:05:00+00:00,writing,report\n\
         2024-01-10T10:00:00+00:00,coding,parser\n\
         2024-01-10T11:00:00+00:00,writing,slides\n",
    )
    .expect("seed log");

    let out = rtl()
        .args(["--file", &log_path, "--test", "types"])
        .output()
        .expect("run types");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let types: Vec<&str> = stdout.lines().collect();
    assert_eq!(types, vec!["writing", "coding"]);

    let out = rtl()
        .args(["--file", &log_path, "--test", "contents", "writing"])
        .output()
        .expect("run contents");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let contents: Vec<&str> = stdout.lines().collect();
    assert_eq!(contents, vec!["slides", "report"]);
}

#[test]
fn test_list_skips_malformed_lines() {
    let log_path = setup_test_log("cli_list_malformed");
    fs::write(
        &log_path,
        "2024-01-10T09:05:00+00:00,writing,report\n\
         garbage line\n\
         not-a-date,coding,parser\n\
         2024-01-10T11:00:00+00:00,coding,lexer\n",
    )
    .expect("seed log");

    rtl()
        .args(["--file", &log_path, "--test", "list", "--no-color"])
        .assert()
        .success()
        .stdout(contains("report"))
        .stdout(contains("lexer"))
        .stdout(contains("parser").not());
}

#[test]
fn test_list_json_last_n() {
    let log_path = setup_test_log("cli_list_json");
    fs::write(
        &log_path,
        "2024-01-10T09:05:00+00:00,writing,report\n\
         2024-01-10T11:00:00+00:00,coding,lexer\n",
    )
    .expect("seed log");

    let out = rtl()
        .args(["--file", &log_path, "--test", "list", "--json", "--last", "1"])
        .output()
        .expect("run list");
    assert!(out.status.success());

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid json");
    let arr = value.as_array().expect("array");
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["type"], "coding");
    assert_eq!(arr[0]["content"], "lexer");
}

#[test]
fn test_session_command_prints_boundaries() {
    let sessions = write_sessions("cli_session_cmd", LAST_OUTPUT);
    let year = current_year();

    rtl()
        .args(["--test", "--sessions", &sessions, "session"])
        .assert()
        .success()
        .stdout(contains(format!("{year}-01-02T09:00:00")))
        .stdout(contains(format!("{year}-01-01T17:00:00")));
}

#[test]
fn test_session_command_without_history() {
    rtl()
        .args(["--test", "--no-sessions", "session"])
        .assert()
        .success()
        .stdout(contains("Last login : --"));
}

#[test]
fn test_init_in_test_mode() {
    let log_path = setup_test_log("cli_init");

    rtl()
        .args(["--file", &log_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(!std::path::Path::new(&log_path).exists());
}
