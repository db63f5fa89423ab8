pub mod line;
pub mod task_log;

pub use task_log::TaskLog;
