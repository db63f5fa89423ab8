//! Parsing of `last`-style session history.
//!
//! Lines look like
//! `alice  console  Wed Jan 10 09:00 - 17:30  (08:30)` for a completed session and
//! `alice  console  Thu Jan 11 08:55   still logged in` for the current one.
//! The year is not printed, so the caller supplies it.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static LOGIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w{3})\s+(\d{1,2})\s+(\d{2}:\d{2})").expect("valid login pattern")
});

static LOGOUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w{3})\s+(\d{1,2})\s+\d{2}:\d{2}\s+-\s+(\d{2}:\d{2})\s+\(([^)]*)\)")
        .expect("valid logout pattern")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("missing ':' in session duration '{0}'")]
    MissingColon(String),
    #[error("invalid number in session duration '{0}'")]
    InvalidNumber(String),
    #[error("minutes out of range in session duration '{0}'")]
    MinutesOutOfRange(String),
}

/// Session length as printed by `last`: `HH:MM` or `D+HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionDuration {
    pub days: Option<u32>,
    pub hours: u32,
    pub minutes: u32,
}

impl FromStr for SessionDuration {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().trim_start_matches('(').trim_end_matches(')');
        let number = |v: &str| {
            v.parse::<u32>()
                .map_err(|_| DurationParseError::InvalidNumber(s.to_string()))
        };

        let (days, clock) = match raw.split_once('+') {
            Some((d, rest)) => (Some(number(d)?), rest),
            None => (None, raw),
        };

        let (h, m) = clock
            .split_once(':')
            .ok_or_else(|| DurationParseError::MissingColon(s.to_string()))?;
        let hours = number(h)?;
        let minutes = number(m)?;
        if minutes >= 60 {
            return Err(DurationParseError::MinutesOutOfRange(s.to_string()));
        }

        Ok(SessionDuration {
            days,
            hours,
            minutes,
        })
    }
}

impl SessionDuration {
    /// Days to add to the session's start date to land on the logout date.
    /// A day component `D` moves the date by `1 + D`; without one the date is kept.
    pub fn logout_day_offset(&self) -> u64 {
        self.days.map(|d| 1 + u64::from(d)).unwrap_or(0)
    }
}

/// Login and logout as naive local times, before any timezone is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSessions {
    pub login: Option<NaiveDateTime>,
    pub logout: Option<NaiveDateTime>,
}

fn month_day(caps: &Captures, year: i32) -> Option<NaiveDate> {
    let date = format!("{} {} {}", &caps[1], &caps[2], year);
    NaiveDate::parse_from_str(&date, "%b %d %Y").ok()
}

fn hhmm(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

/// Start time of the session described by `line`.
pub fn parse_login_line(line: &str, year: i32) -> Option<NaiveDateTime> {
    LOGIN_RE.captures_iter(line).find_map(|caps| {
        let date = month_day(&caps, year)?;
        let time = hhmm(&caps[3])?;
        Some(date.and_time(time))
    })
}

/// End time of the completed session described by `line`.
/// The end clock time is placed on the session's start date, then shifted by
/// [`SessionDuration::logout_day_offset`].
pub fn parse_logout_line(line: &str, year: i32) -> Option<NaiveDateTime> {
    let caps = LOGOUT_RE.captures(line)?;
    let date = month_day(&caps, year)?;
    let end = hhmm(&caps[3])?;
    let duration: SessionDuration = caps[4].parse().ok()?;

    date.and_time(end)
        .checked_add_days(Days::new(duration.logout_day_offset()))
}

/// Pick the two most recent sessions on `terminal` from the full history text.
/// The first matching line is the current session, the second the last completed one.
pub fn parse_last_output(output: &str, terminal: &str, year: i32) -> ParsedSessions {
    let mut lines = output.lines().filter(|l| l.contains(terminal));

    let login = lines.next().and_then(|l| parse_login_line(l, year));
    let logout = lines.next().and_then(|l| parse_logout_line(l, year));

    ParsedSessions { login, logout }
}
