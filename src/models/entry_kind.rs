
/// Reserved `type` value marking the start of a machine session.
pub const LOGIN: &str = "login";
/// Reserved `type` value marking the end of a machine session.
pub const LOGOUT: &str = "logout";

/// Classification of the free-form `type` column of a task entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Login,
    Logout,
    Task,
}

impl EntryKind {
    /// Classify a raw `type` string. Anything that is not a boundary marker is a task.
    pub fn from_type_str(s: &str) -> Self {
        match s {
            LOGIN => EntryKind::Login,
            LOGOUT => EntryKind::Logout,
            _ => EntryKind::Task,
        }
    }

    pub fn is_boundary(&self) -> bool {
        matches!(self, EntryKind::Login | EntryKind::Logout)
    }
}
