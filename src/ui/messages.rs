//! User-facing notifications: the CLI's equivalent of success/failure toasts.

use crate::core::reconcile::Outcome;
use crate::models::task_entry::TaskEntry;
use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

fn backfill_line(entry: &TaskEntry) {
    println!("   {}+ {} at {}{}", DIM, entry.kind, entry.timestamp_str(), RESET);
}

/// Render the result of a submission.
pub fn report_outcome(outcome: &Outcome) {
    if !outcome.backfilled().is_empty() {
        info("Session gap detected, boundaries added:");
        outcome.backfilled().iter().for_each(backfill_line);
    }

    match outcome {
        Outcome::Recorded { entry, .. } => {
            if entry.content.is_empty() {
                success(format!("Task added: {}", entry.kind));
            } else {
                success(format!("Task added: {} / {}", entry.kind, entry.content));
            }
        }
        Outcome::Duplicate { .. } => warning("Task already in course"),
    }
}
