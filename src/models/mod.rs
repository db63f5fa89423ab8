pub mod entry_kind;
pub mod session_event;
pub mod task_entry;
