//! Autocomplete suggestions, most recently used first.

use crate::models::task_entry::TaskEntry;
use chrono::{DateTime, FixedOffset};

/// Distinct values with the newest timestamp and file position they were seen at.
fn most_recent_first<'a, I>(values: I) -> Vec<String>
where
    I: Iterator<Item = (usize, &'a str, DateTime<FixedOffset>)>,
{
    let mut seen: Vec<(String, DateTime<FixedOffset>, usize)> = Vec::new();

    for (pos, value, ts) in values {
        match seen.iter_mut().find(|(v, _, _)| v == value) {
            Some(slot) => {
                if ts >= slot.1 {
                    slot.1 = ts;
                    slot.2 = pos;
                }
            }
            None => seen.push((value.to_string(), ts, pos)),
        }
    }

    seen.sort_by(|a, b| b.1.cmp(&a.1).then(b.2.cmp(&a.2)));
    seen.into_iter().map(|(v, _, _)| v).collect()
}

/// Task types excluding the `login`/`logout` markers.
pub fn suggest_types(entries: &[TaskEntry]) -> Vec<String> {
    most_recent_first(
        entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.is_boundary())
            .map(|(pos, e)| (pos, e.kind.as_str(), e.timestamp)),
    )
}

/// Contents previously logged under `kind`.
pub fn suggest_contents(entries: &[TaskEntry], kind: &str) -> Vec<String> {
    most_recent_first(
        entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.kind == kind && !e.content.is_empty())
            .map(|(pos, e)| (pos, e.content.as_str(), e.timestamp)),
    )
}
