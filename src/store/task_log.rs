//! Append-only task log bound to a single file.

use super::line::{LineError, decode_bytes, encode_line};
use crate::errors::{AppError, AppResult};
use crate::models::task_entry::TaskEntry;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

pub struct TaskLog {
    path: PathBuf,
}

impl TaskLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Full scan in file order. A missing file is an empty log.
    /// Malformed lines are skipped with a warning.
    pub fn read_all(&self) -> AppResult<Vec<TaskEntry>> {
        let Some(content) = self.read_content()? else {
            return Ok(Vec::new());
        };

        let entries = raw_lines(&content)
            .enumerate()
            .filter(|(_, line)| !line.trim_ascii().is_empty())
            .filter_map(|(idx, line)| self.decode(idx + 1, line))
            .collect();

        Ok(entries)
    }

    /// Last non-empty, well-formed line of the log.
    pub fn last_entry(&self) -> AppResult<Option<TaskEntry>> {
        let Some(content) = self.read_content()? else {
            return Ok(None);
        };

        let total = raw_lines(&content).count();
        let last = raw_lines(&content)
            .rev()
            .enumerate()
            .filter(|(_, line)| !line.trim_ascii().is_empty())
            .find_map(|(rev_idx, line)| self.decode(total - rev_idx, line));

        Ok(last)
    }

    /// Append one entry as a single write. The file is created if missing.
    pub fn append(&self, entry: &TaskEntry) -> AppResult<()> {
        let line = encode_line(entry);

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.write_error(e))?;

        file.write_all(line.as_bytes()).map_err(|e| self.write_error(e))?;

        debug!(
            path = %self.path.display(),
            kind = %entry.kind,
            timestamp = %entry.timestamp_str(),
            "appended task entry"
        );
        Ok(())
    }

    fn read_content(&self) -> AppResult<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(c) => Ok(Some(c)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::StorageRead {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    fn decode(&self, line_no: usize, line: &[u8]) -> Option<TaskEntry> {
        match decode_bytes(line) {
            Ok(entry) => Some(entry),
            Err(LineError::MissingFields(n)) => {
                warn!(
                    path = %self.path.display(),
                    line = line_no,
                    fields = n,
                    "skipping task log line with missing fields"
                );
                None
            }
            Err(LineError::BadTimestamp(ts)) => {
                warn!(
                    path = %self.path.display(),
                    line = line_no,
                    timestamp = %ts,
                    "skipping task log line with unparseable timestamp"
                );
                None
            }
            Err(LineError::InvalidUtf8) => {
                warn!(
                    path = %self.path.display(),
                    line = line_no,
                    "skipping task log line that is not valid UTF-8"
                );
                None
            }
        }
    }

    fn write_error(&self, source: io::Error) -> AppError {
        AppError::StorageWrite {
            path: self.path.clone(),
            source,
        }
    }
}

/// Lines of the raw file, without the `\n` terminator. A trailing newline does not
/// produce an extra line.
fn raw_lines(content: &[u8]) -> impl DoubleEndedIterator<Item = &[u8]> {
    content
        .strip_suffix(b"\n")
        .unwrap_or(content)
        .split(|b| *b == b'\n')
}
