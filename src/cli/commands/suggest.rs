use crate::cli::parser::{Cli, Commands};
use crate::cli::task_log;
use crate::config::Config;
use crate::core::suggest::{suggest_contents, suggest_types};
use crate::errors::AppResult;

/// Print `types` / `contents` suggestions, one per line.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let entries = task_log(cfg).read_all()?;

    let values = match &cli.command {
        Commands::Types => suggest_types(&entries),
        Commands::Contents { kind } => suggest_contents(&entries, kind.trim()),
        _ => return Ok(()),
    };

    for v in values {
        println!("{}", v);
    }
    Ok(())
}
