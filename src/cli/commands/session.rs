use crate::cli::parser::Cli;
use crate::cli::session_source;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::time::format_timestamp;
use chrono::{DateTime, FixedOffset};

fn show(ts: Option<DateTime<FixedOffset>>) -> String {
    ts.as_ref()
        .map(format_timestamp)
        .unwrap_or_else(|| "--".to_string())
}

/// Print what the session history reports right now.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let session = session_source(cli, cfg).session_event();

    println!("Last login : {}", show(session.login));
    println!("Last logout: {}", show(session.logout));
    Ok(())
}
