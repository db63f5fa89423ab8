use rtasklogger::core::suggest::{suggest_contents, suggest_types};
use rtasklogger::models::task_entry::TaskEntry;

mod common;
use common::ts;

fn entries() -> Vec<TaskEntry> {
    vec![
        TaskEntry::login_at(ts("2024-01-10T08:55:00+00:00")),
        TaskEntry::new(ts("2024-01-10T09:00:00+00:00"), "writing", "report"),
        TaskEntry::new(ts("2024-01-10T10:00:00+00:00"), "coding", "parser"),
        TaskEntry::new(ts("2024-01-10T11:00:00+00:00"), "writing", "slides"),
        TaskEntry::new(ts("2024-01-10T12:00:00+00:00"), "coding", "report"),
        TaskEntry::logout_at(ts("2024-01-10T18:00:00+00:00")),
        TaskEntry::new(ts("2024-01-11T09:00:00+00:00"), "review", "pr 12"),
    ]
}

#[test]
fn test_types_exclude_boundaries_and_are_mru() {
    assert_eq!(suggest_types(&entries()), vec!["review", "coding", "writing"]);
}

#[test]
fn test_contents_for_type_are_mru() {
    assert_eq!(suggest_contents(&entries(), "writing"), vec!["slides", "report"]);
    // "report" is newer under coding, but only coding entries count here
    assert_eq!(suggest_contents(&entries(), "coding"), vec!["report", "parser"]);
    assert!(suggest_contents(&entries(), "unknown").is_empty());
}

#[test]
fn test_order_follows_timestamps_not_file_position() {
    let out_of_order = vec![
        TaskEntry::new(ts("2024-01-10T12:00:00+00:00"), "writing", "report"),
        TaskEntry::new(ts("2024-01-10T09:00:00+00:00"), "coding", "parser"),
    ];
    assert_eq!(suggest_types(&out_of_order), vec!["writing", "coding"]);
}

#[test]
fn test_equal_timestamps_prefer_later_lines() {
    let same_time = vec![
        TaskEntry::new(ts("2024-01-10T09:00:00+00:00"), "writing", "report"),
        TaskEntry::new(ts("2024-01-10T09:00:00+00:00"), "coding", "parser"),
    ];
    assert_eq!(suggest_types(&same_time), vec!["coding", "writing"]);
}

#[test]
fn test_empty_log_has_no_suggestions() {
    assert!(suggest_types(&[]).is_empty());
    assert!(suggest_contents(&[], "writing").is_empty());
}
