//! rTasklogger library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod session;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "RTASKLOGGER_LOG";

/// Diagnostics go to stderr so command output stays clean.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rtasklogger=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(cli, cfg),
        Commands::Types | Commands::Contents { .. } => cli::commands::suggest::handle(cli, cfg),
        Commands::List { .. } => cli::commands::list::handle(cli, cfg),
        Commands::Session => cli::commands::session::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 2️⃣ load config once (test mode never touches the user's file)
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    // 3️⃣ command-line override of the task log
    if let Some(file) = &cli.file {
        cfg.tasks_file = file.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
