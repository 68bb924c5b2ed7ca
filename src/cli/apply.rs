use super::{dispatch, RunMode};
use crate::catalog::template_questions;
use crate::collector::{Collector, Prompter, TerminalPrompter};
use crate::emitter::{emit_template, EmitOptions};
use crate::models::{Plan, RailsmithConfig};
use crate::Result;
use anyhow::Context;
use colored::Colorize;
use std::env;
use std::path::Path;

pub async fn run(mode: RunMode) -> Result<()> {
    let project_root = env::current_dir()?;
    let config = RailsmithConfig::load(&project_root)?;
    let mut prompter = TerminalPrompter::new();
    let plan = run_in(&project_root, &config, &mut prompter, mode).await?;

    if mode == RunMode::Json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    }
    Ok(())
}

/// Template session against the Rails application at `project_root`
pub async fn run_in(
    project_root: &Path,
    config: &RailsmithConfig,
    prompter: &mut dyn Prompter,
    mode: RunMode,
) -> Result<Plan> {
    if mode == RunMode::Execute && !project_root.join("Gemfile").exists() {
        anyhow::bail!(
            "No Gemfile found in {}. Run this inside a Rails application.",
            project_root.display()
        );
    }

    if mode != RunMode::Json {
        println!("{}", "🛠  Configuring application template...".cyan().bold());
        println!();
    }

    let answers = Collector::collect(&template_questions(), prompter)
        .context("Failed to collect template answers")?;
    let plan = emit_template(&answers, &EmitOptions::from_config(config));

    dispatch(&plan, project_root, config, mode).await?;

    if mode == RunMode::Execute {
        println!();
        println!("{}", "✅ Template applied successfully!".green().bold());
    }

    Ok(plan)
}
