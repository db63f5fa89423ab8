//! Session history providers.
//!
//! Every query re-reads the history: nothing is cached between calls.
//! `session_event` reads it once for both boundaries.

use super::parser::{ParsedSessions, parse_last_output};
use crate::config::Config;
use crate::models::session_event::SessionEvent;
use crate::utils::time::local_to_fixed;
use chrono::{DateTime, Datelike, FixedOffset, Local};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Read access to OS session accounting. Absence of data is the only failure signal.
pub trait SessionSource {
    /// Start of the most recent session.
    fn last_login_time(&self) -> Option<DateTime<FixedOffset>>;

    /// End of the session before the most recent one.
    fn last_logout_time(&self) -> Option<DateTime<FixedOffset>>;

    fn session_event(&self) -> SessionEvent {
        SessionEvent {
            login: self.last_login_time(),
            logout: self.last_logout_time(),
        }
    }
}

/// A fixed pair of boundaries. `SessionEvent::default()` reports no sessions at all.
impl SessionSource for SessionEvent {
    fn last_login_time(&self) -> Option<DateTime<FixedOffset>> {
        self.login
    }

    fn last_logout_time(&self) -> Option<DateTime<FixedOffset>> {
        self.logout
    }
}

fn current_year() -> i32 {
    Local::now().year()
}

fn to_event(parsed: ParsedSessions) -> SessionEvent {
    SessionEvent {
        login: parsed.login.and_then(local_to_fixed),
        logout: parsed.logout.and_then(local_to_fixed),
    }
}

fn parse_history(output: &str, terminal: &str) -> ParsedSessions {
    let parsed = parse_last_output(output, terminal, current_year());
    debug!(?parsed, terminal, "parsed session history");
    parsed
}

/// Runs the system `last` command (or a configured replacement).
pub struct LastCommandSource {
    pub command: String,
    pub args: Vec<String>,
    pub terminal: String,
    pub timeout: Duration,
}

impl LastCommandSource {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            command: cfg.session_command.clone(),
            args: cfg.session_args.clone(),
            terminal: cfg.session_terminal.clone(),
            timeout: Duration::from_secs(cfg.session_timeout_secs),
        }
    }

    fn history(&self) -> Option<ParsedSessions> {
        let mut cmd = Command::new(&self.command);
        cmd.args(&self.args);
        let stdout = run_with_timeout(&mut cmd, self.timeout)?;
        let text = String::from_utf8_lossy(&stdout);
        Some(parse_history(&text, &self.terminal))
    }
}

impl SessionSource for LastCommandSource {
    fn last_login_time(&self) -> Option<DateTime<FixedOffset>> {
        self.history()?.login.and_then(local_to_fixed)
    }

    fn last_logout_time(&self) -> Option<DateTime<FixedOffset>> {
        self.history()?.logout.and_then(local_to_fixed)
    }

    fn session_event(&self) -> SessionEvent {
        self.history().map(to_event).unwrap_or_default()
    }
}

/// Reads previously captured `last` output from a file.
pub struct FileSessionSource {
    pub path: PathBuf,
    pub terminal: String,
}

impl FileSessionSource {
    pub fn new(path: impl Into<PathBuf>, terminal: &str) -> Self {
        Self {
            path: path.into(),
            terminal: terminal.to_string(),
        }
    }

    fn history(&self) -> Option<ParsedSessions> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Some(parse_history(&text, &self.terminal)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read session history file");
                None
            }
        }
    }
}

impl SessionSource for FileSessionSource {
    fn last_login_time(&self) -> Option<DateTime<FixedOffset>> {
        self.history()?.login.and_then(local_to_fixed)
    }

    fn last_logout_time(&self) -> Option<DateTime<FixedOffset>> {
        self.history()?.logout.and_then(local_to_fixed)
    }

    fn session_event(&self) -> SessionEvent {
        self.history().map(to_event).unwrap_or_default()
    }
}

/// Run `cmd`, collecting stdout, and kill it if it outlives `timeout`.
/// stdout is drained on its own thread so a long history cannot fill the pipe.
fn run_with_timeout(cmd: &mut Command, timeout: Duration) -> Option<Vec<u8>> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null());

    let mut child = match cmd.spawn() {
        Ok(c) => c,
        Err(e) => {
            warn!(command = ?cmd.get_program(), error = %e, "cannot run session history command");
            return None;
        }
    };

    let mut stdout = child.stdout.take()?;
    let reader = thread::spawn(move || {
        let mut buf = Vec::new();
        stdout.read_to_end(&mut buf).map(|_| buf)
    });

    let start = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(status)) => {
                if !status.success() {
                    debug!(command = ?cmd.get_program(), %status, "session history command failed");
                }
                break;
            }
            Ok(None) => {}
            Err(e) => {
                warn!(command = ?cmd.get_program(), error = %e, "cannot wait for session history command");
                let _ = child.kill();
                return None;
            }
        }
        if start.elapsed() >= timeout {
            let _ = child.kill();
            let _ = child.wait();
            warn!(
                command = ?cmd.get_program(),
                timeout_secs = timeout.as_secs(),
                "session history command timed out"
            );
            return None;
        }
        thread::sleep(POLL_INTERVAL);
    }

    match reader.join() {
        Ok(Ok(buf)) => Some(buf),
        Ok(Err(e)) => {
            warn!(error = %e, "cannot read session history output");
            None
        }
        Err(_) => None,
    }
}
