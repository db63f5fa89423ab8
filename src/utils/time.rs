//! Time utilities: canonical timestamp format, wall clock, local-time conversion.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, SubsecRound, TimeZone, Utc};

/// Canonical on-disk timestamp layout: `yyyy-MM-ddTHH:mm:ss±HH:MM`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

pub fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s.trim()).ok()
}

/// Current local time with its offset, truncated to whole seconds.
pub fn now_fixed() -> DateTime<FixedOffset> {
    Local::now().trunc_subsecs(0).fixed_offset()
}

/// Unix epoch, used as "older than anything" when the log is empty.
pub fn epoch() -> DateTime<FixedOffset> {
    DateTime::<Utc>::UNIX_EPOCH.fixed_offset()
}

/// Interpret a naive wall-clock time in the local timezone.
/// Returns `None` for times skipped by a DST jump; ambiguous times take the earliest instant.
pub fn local_to_fixed(naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
}
