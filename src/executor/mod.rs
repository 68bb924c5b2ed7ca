//! Directive executor
//!
//! Applies a [`Plan`] in order: Immediate directives, then the bundle step,
//! then Deferred directives. The first failure stops the run; whatever was
//! already applied stays applied.

pub mod dry_run;
pub mod gemfile;
pub mod project;
pub mod script_runner;

pub use dry_run::DryRunExecutor;
pub use project::ProjectExecutor;
pub use script_runner::ScriptRunner;

use crate::models::{Plan, PlannedDirective};
use async_trait::async_trait;

/// Errors raised while applying directives
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("Command '{program}' failed with exit code {code:?}\nStderr: {stderr}")]
    CommandFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Command '{0}' not found. Please ensure it is installed and in your PATH.")]
    NotFound(String),

    #[error("Cannot run an empty command")]
    EmptyCommand,

    #[error("Anchor '{anchor}' not found in {path}")]
    AnchorNotFound { path: String, anchor: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExecError {
    /// Exit code to hand back to the shell
    pub fn exit_code(&self) -> i32 {
        match self {
            ExecError::CommandFailed { code: Some(code), .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}

/// Performs the side effect of one directive at a time
#[async_trait]
pub trait Executor: Send {
    async fn apply(&mut self, planned: &PlannedDirective) -> Result<(), ExecError>;

    /// Called once between the Immediate and Deferred phases
    async fn skeleton_ready(&mut self) -> Result<(), ExecError>;
}

/// Apply every directive of `plan`, stopping at the first failure
pub async fn run_plan(plan: &Plan, executor: &mut dyn Executor) -> Result<(), ExecError> {
    for planned in plan.immediate() {
        executor.apply(planned).await?;
    }

    executor.skeleton_ready().await?;

    for planned in plan.deferred() {
        executor.apply(planned).await?;
    }

    Ok(())
}
