pub mod apply;
pub mod new;

use crate::executor::{run_plan, DryRunExecutor, ProjectExecutor, ScriptRunner};
use crate::models::{Plan, RailsmithConfig};
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// How a session treats its plan once emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Execute,
    /// Print the plan, one line per directive
    DryRun,
    /// Print the plan as JSON
    Json,
}

impl RunMode {
    pub fn from_flags(dry_run: bool, json: bool) -> Self {
        match (dry_run, json) {
            (true, true) => RunMode::Json,
            (true, false) => RunMode::DryRun,
            (false, _) => RunMode::Execute,
        }
    }
}

/// Execute or print `plan` according to `mode`.
///
/// JSON output is left to the caller, which may combine several plans.
pub(crate) async fn dispatch(
    plan: &Plan,
    root: &Path,
    config: &RailsmithConfig,
    mode: RunMode,
) -> Result<()> {
    match mode {
        RunMode::Execute => {
            let runner = ScriptRunner::new(config.show_progress);
            let mut executor = ProjectExecutor::new(root, runner, config.bundle_command.clone());
            run_plan(plan, &mut executor).await?;
        }
        RunMode::DryRun => {
            println!("{}", format!("📋 Plan ({} directives):", plan.len()).cyan());
            let mut executor = DryRunExecutor::new();
            run_plan(plan, &mut executor).await?;
        }
        RunMode::Json => {}
    }
    Ok(())
}
