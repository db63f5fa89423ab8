use crate::cli::parser::{Cli, Commands};
use crate::cli::task_log;
use crate::config::Config;
use crate::core::log::{LogLogic, select_entries};
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        last,
        kind,
        json,
        no_color,
    } = &cli.command
    {
        let entries = task_log(cfg).read_all()?;
        let entries = select_entries(entries, kind.as_deref(), *last);

        if *json {
            LogLogic::print_json(&entries)?;
        } else {
            LogLogic::print_entries(&entries, !*no_color)?;
        }
    }
    Ok(())
}
