use crate::cli::parser::{Cli, Commands};
use crate::cli::{session_source, task_log};
use crate::config::Config;
use crate::core::reconcile::{ReconcileLogic, SubmitRequest};
use crate::errors::AppResult;
use crate::ui::messages::report_outcome;
use crate::utils::time::now_fixed;

/// Record a task submission.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { kind, content } = &cli.command {
        //
        // 1. Validate input (trimmed, no separators)
        //
        let request = SubmitRequest::new(kind, &content.join(" "))?;

        //
        // 2. Reconcile against log + session history
        //
        let log = task_log(cfg);
        let sessions = session_source(cli, cfg);
        let outcome = ReconcileLogic::record(&log, sessions.as_ref(), &request, now_fixed())?;

        //
        // 3. Report
        //
        report_outcome(&outcome);
    }

    Ok(())
}
