pub mod commands;
pub mod parser;

use crate::config::Config;
use crate::models::session_event::SessionEvent;
use crate::session::{FileSessionSource, LastCommandSource, SessionSource};
use crate::store::TaskLog;
use parser::Cli;

/// Session history provider selected by the global flags.
pub fn session_source(cli: &Cli, cfg: &Config) -> Box<dyn SessionSource> {
    if cli.no_sessions {
        Box::new(SessionEvent::default())
    } else if let Some(file) = &cli.sessions {
        Box::new(FileSessionSource::new(file, &cfg.session_terminal))
    } else {
        Box::new(LastCommandSource::from_config(cfg))
    }
}

pub fn task_log(cfg: &Config) -> TaskLog {
    TaskLog::new(cfg.tasks_path())
}
