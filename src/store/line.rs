//! Line codec for the task log: `timestamp,type,content`.

use crate::errors::{AppError, AppResult};
use crate::models::task_entry::TaskEntry;
use crate::utils::time::parse_timestamp;

const SEPARATOR: char = ',';

/// Why a log line could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    MissingFields(usize),
    BadTimestamp(String),
    InvalidUtf8,
}

/// Reject values that would break the one-line, three-field layout.
pub fn check_field(name: &str, value: &str) -> AppResult<()> {
    if value.contains(SEPARATOR) {
        return Err(AppError::InvalidField(format!(
            "{name} must not contain a comma: '{value}'"
        )));
    }
    if value.contains(['\n', '\r']) {
        return Err(AppError::InvalidField(format!(
            "{name} must not contain a line break"
        )));
    }
    Ok(())
}

pub fn encode_line(entry: &TaskEntry) -> String {
    format!(
        "{}{SEPARATOR}{}{SEPARATOR}{}\n",
        entry.timestamp_str(),
        entry.kind,
        entry.content
    )
}

/// Decode one line. Only the first two commas split fields; the rest stays in `content`.
pub fn decode_line(line: &str) -> Result<TaskEntry, LineError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let parts: Vec<&str> = line.splitn(3, SEPARATOR).collect();
    if parts.len() < 3 {
        return Err(LineError::MissingFields(parts.len()));
    }

    let timestamp =
        parse_timestamp(parts[0]).ok_or_else(|| LineError::BadTimestamp(parts[0].to_string()))?;

    Ok(TaskEntry {
        timestamp,
        kind: parts[1].to_string(),
        content: parts[2].to_string(),
    })
}

/// Decode one raw line read from disk. Bytes that are not UTF-8 make the line malformed.
pub fn decode_bytes(line: &[u8]) -> Result<TaskEntry, LineError> {
    let line = std::str::from_utf8(line).map_err(|_| LineError::InvalidUtf8)?;
    decode_line(line)
}
