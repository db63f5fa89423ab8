use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///
/// The task log itself is created on the first `add`.
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rTasklogger…");

    let cfg = Config::init_all(cli.file.clone(), cli.test)?;

    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Task log    : {}", cfg.tasks_path().display());

    println!("🎉 rTasklogger initialization completed!");
    Ok(())
}
