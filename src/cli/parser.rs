use clap::{Parser, Subcommand};

/// Command-line interface definition for rTasklogger
#[derive(Parser)]
#[command(
    name = "rtasklogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A flat-file task logger: record what you are doing, with login/logout backfilled from session history",
    long_about = None
)]
pub struct Cli {
    /// Override the task log path
    #[arg(global = true, long = "file", value_name = "PATH")]
    pub file: Option<String>,

    /// Read session history from a file (captured `last` output) instead of running the command
    #[arg(global = true, long = "sessions", value_name = "FILE")]
    pub sessions: Option<String>,

    /// Do not query session history at all
    #[arg(global = true, long = "no-sessions", conflicts_with = "sessions")]
    pub no_sessions: bool,

    /// Print diagnostic logs to stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Run in test mode (no config file read or written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record a task (skipped if it is already the active one)
    Add {
        /// Task type, e.g. a project or activity name
        #[arg(value_name = "TYPE")]
        kind: String,

        /// What you are doing (words are joined with spaces)
        #[arg(value_name = "CONTENT", trailing_var_arg = true)]
        content: Vec<String>,
    },

    /// List known task types, most recently used first
    Types,

    /// List known contents for a task type, most recently used first
    Contents {
        #[arg(value_name = "TYPE")]
        kind: String,
    },

    /// Print logged entries
    List {
        #[arg(long, short = 'n', value_name = "N", help = "Show only the last N entries")]
        last: Option<usize>,

        #[arg(long = "type", value_name = "TYPE", help = "Show only entries of this type")]
        kind: Option<String>,

        #[arg(long, help = "Print entries as JSON")]
        json: bool,

        #[arg(long = "no-color", help = "Disable colored output")]
        no_color: bool,
    },

    /// Show the login/logout times detected from session history
    Session,
}
