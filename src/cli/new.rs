use super::{apply, dispatch, RunMode};
use crate::catalog::{app_questions, keys};
use crate::collector::{Collector, Prompter, TerminalPrompter};
use crate::emitter::{emit_generator, EmitOptions};
use crate::models::{Plan, RailsmithConfig};
use crate::Result;
use anyhow::Context;
use colored::Colorize;
use std::env;
use std::path::Path;

pub async fn run(mode: RunMode) -> Result<()> {
    let working_dir = env::current_dir()?;
    let config = RailsmithConfig::load(&working_dir)?;
    let mut prompter = TerminalPrompter::new();
    let (generator, template) = run_in(&working_dir, &config, &mut prompter, mode).await?;

    if mode == RunMode::Json {
        let combined = serde_json::json!({
            "generator": generator,
            "template": template,
        });
        println!("{}", serde_json::to_string_pretty(&combined)?);
    }
    Ok(())
}

/// Generator session followed by the template session inside the new app.
///
/// Returns the generator plan and the template plan.
pub async fn run_in(
    working_dir: &Path,
    config: &RailsmithConfig,
    prompter: &mut dyn Prompter,
    mode: RunMode,
) -> Result<(Plan, Plan)> {
    if mode != RunMode::Json {
        println!("{}", "🚂 Creating a new Rails application...".cyan().bold());
        println!();
    }

    let answers = Collector::collect(&app_questions(), prompter)
        .context("Failed to collect application answers")?;
    let generator = emit_generator(&answers, &EmitOptions::from_config(config));

    dispatch(&generator, working_dir, config, mode).await?;

    let app_name = answers.text(keys::APP_NAME).unwrap_or_default();
    let app_dir = working_dir.join(&config.output_dir).join(app_name);

    if mode == RunMode::Execute {
        println!();
        println!(
            "{}",
            format!("📁 Application generated in {}", app_dir.display()).green()
        );
    }

    let template = apply::run_in(&app_dir, config, prompter, mode).await?;
    Ok((generator, template))
}
