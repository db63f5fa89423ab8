use super::entry_kind::{EntryKind, LOGIN, LOGOUT};
use crate::utils::time::format_timestamp;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TaskEntry {
    pub timestamp: DateTime<FixedOffset>, // ⇔ column 1 (ISO-8601 with offset)
    #[serde(rename = "type")]
    pub kind: String, // ⇔ column 2 (free-form, `login`/`logout` reserved)
    pub content: String, // ⇔ column 3 (free-form, no commas)
}

impl TaskEntry {
    pub fn new(timestamp: DateTime<FixedOffset>, kind: &str, content: &str) -> Self {
        Self {
            timestamp,
            kind: kind.to_string(),
            content: content.to_string(),
        }
    }

    /// Synthesized `login` boundary marker.
    pub fn login_at(timestamp: DateTime<FixedOffset>) -> Self {
        Self::new(timestamp, LOGIN, "")
    }

    /// Synthesized `logout` boundary marker.
    pub fn logout_at(timestamp: DateTime<FixedOffset>) -> Self {
        Self::new(timestamp, LOGOUT, "")
    }

    pub fn entry_kind(&self) -> EntryKind {
        EntryKind::from_type_str(&self.kind)
    }

    pub fn is_boundary(&self) -> bool {
        self.entry_kind().is_boundary()
    }

    pub fn timestamp_str(&self) -> String {
        format_timestamp(&self.timestamp)
    }

    /// True when `kind` and `content` match the given pair exactly.
    pub fn same_task(&self, kind: &str, content: &str) -> bool {
        self.kind == kind && self.content == content
    }
}
