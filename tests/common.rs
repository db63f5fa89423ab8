#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Datelike, FixedOffset, Local};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtl() -> Command {
    cargo_bin_cmd!("rtasklogger")
}

/// Create a unique task log path inside the system temp dir and remove any existing file
pub fn setup_test_log(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtasklogger.tasks", name));
    let log_path = path.to_string_lossy().to_string();
    fs::remove_file(&log_path).ok();
    log_path
}

/// Write captured `last` output to a temp file and return its path
pub fn write_sessions(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtasklogger.last", name));
    fs::write(&path, content).expect("write sessions fixture");
    path.to_string_lossy().to_string()
}

/// `last` output with a running console session (Jan 2 09:00) and a completed
/// one on Jan 1 from 08:30 to 17:00.
pub const LAST_OUTPUT: &str = "\
alice     console                   Fri Jan  2 09:00   still logged in
alice     ttys000                   Fri Jan  2 09:01   still logged in
alice     console                   Thu Jan  1 08:30 - 17:00  (08:30)
reboot    ~                         Thu Jan  1 08:29
";

pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn read_lines(path: &str) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect()
}

pub fn ts(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).expect("valid test timestamp")
}
