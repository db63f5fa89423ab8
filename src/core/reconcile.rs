//! Decide what a single task submission appends to the log.
//!
//! One call = one submission:
//! 1. read the last logged entry and the OS session boundaries;
//! 2. for ordinary tasks, backfill `logout`/`login` when the machine was logged
//!    into after the last logged entry;
//! 3. append the task unless it repeats the active one.

use crate::errors::{AppError, AppResult};
use crate::models::entry_kind::EntryKind;
use crate::models::session_event::SessionEvent;
use crate::models::task_entry::TaskEntry;
use crate::session::SessionSource;
use crate::store::TaskLog;
use crate::store::line::check_field;
use crate::utils::time::epoch;
use chrono::{DateTime, FixedOffset};
use tracing::{debug, info};

/// A trimmed and validated `(type, content)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub kind: String,
    pub content: String,
}

impl SubmitRequest {
    pub fn new(kind: &str, content: &str) -> AppResult<Self> {
        let kind = kind.trim();
        let content = content.trim();

        if kind.is_empty() {
            return Err(AppError::InvalidField("task type must not be empty".into()));
        }
        check_field("type", kind)?;
        check_field("content", content)?;

        Ok(Self {
            kind: kind.to_string(),
            content: content.to_string(),
        })
    }

    pub fn entry_kind(&self) -> EntryKind {
        EntryKind::from_type_str(&self.kind)
    }
}

/// What a submission did to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The task was appended, after any synthesized boundaries.
    Recorded {
        backfilled: Vec<TaskEntry>,
        entry: TaskEntry,
    },
    /// Same task as the active one; only boundaries (if any) were appended.
    Duplicate { backfilled: Vec<TaskEntry> },
}

impl Outcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, Outcome::Recorded { .. })
    }

    pub fn backfilled(&self) -> &[TaskEntry] {
        match self {
            Outcome::Recorded { backfilled, .. } | Outcome::Duplicate { backfilled } => backfilled,
        }
    }
}

/// Boundary entries to append before a task of kind `kind`.
/// Empty for boundary kinds, or when no login happened after `last_task`.
pub fn plan_backfill(
    kind: EntryKind,
    last_task: &DateTime<FixedOffset>,
    session: &SessionEvent,
) -> Vec<TaskEntry> {
    if kind.is_boundary() || !session.logged_in_after(last_task) {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(2);
    if let Some(logout) = session.logout {
        out.push(TaskEntry::logout_at(logout));
    }
    if let Some(login) = session.login {
        out.push(TaskEntry::login_at(login));
    }
    out
}

/// A submission is novel unless it repeats the last entry and no session gap was backfilled.
pub fn is_novel(last: Option<&TaskEntry>, request: &SubmitRequest, backfilled: bool) -> bool {
    match last {
        None => true,
        Some(last) => backfilled || !last.same_task(&request.kind, &request.content),
    }
}

pub struct ReconcileLogic;

impl ReconcileLogic {
    /// Reconcile `request` against the log and the session history, appending as needed.
    /// `now` stamps the requested entry; synthesized boundaries use the session times.
    pub fn record<S: SessionSource + ?Sized>(
        log: &TaskLog,
        sessions: &S,
        request: &SubmitRequest,
        now: DateTime<FixedOffset>,
    ) -> AppResult<Outcome> {
        let last = log.last_entry()?;
        let last_task = last.as_ref().map(|e| e.timestamp).unwrap_or_else(epoch);
        let session = sessions.session_event();

        debug!(
            last = ?last.as_ref().map(TaskEntry::timestamp_str),
            login = ?session.login,
            logout = ?session.logout,
            "reconciling submission"
        );

        let backfilled = plan_backfill(request.entry_kind(), &last_task, &session);
        for entry in &backfilled {
            log.append(entry)?;
        }
        if !backfilled.is_empty() {
            info!(count = backfilled.len(), "backfilled session boundaries");
        }

        if !is_novel(last.as_ref(), request, !backfilled.is_empty()) {
            info!(kind = %request.kind, "task already in course");
            return Ok(Outcome::Duplicate { backfilled });
        }

        let entry = TaskEntry::new(now, &request.kind, &request.content);
        log.append(&entry)?;

        Ok(Outcome::Recorded { backfilled, entry })
    }
}
