use chrono::{DateTime, FixedOffset};

/// Boundaries of the most recent machine sessions, rebuilt from OS accounting.
/// Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionEvent {
    /// Start of the most recent session.
    pub login: Option<DateTime<FixedOffset>>,
    /// End of the last completed session (the one before `login`).
    pub logout: Option<DateTime<FixedOffset>>,
}

impl SessionEvent {
    /// True when the machine was logged into after `since`.
    pub fn logged_in_after(&self, since: &DateTime<FixedOffset>) -> bool {
        self.login.as_ref().is_some_and(|login| login > since)
    }
}
