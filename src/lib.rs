// Railsmith - interactive Rails application scaffolder
// Questions in, ordered directives out, applied one at a time

pub mod catalog;
pub mod cli;
pub mod collector;
pub mod emitter;
pub mod executor;
pub mod models;
pub mod utils;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use collector::{Collector, PromptError, Prompter};
pub use emitter::{emit_generator, emit_template, EmitOptions};
pub use executor::{run_plan, ExecError, Executor};
pub use models::{AnswerSet, AnswerValue, Directive, Phase, Plan, Question, RailsmithConfig};
