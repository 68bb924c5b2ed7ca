use super::gemfile::{append_gem, render_gem, splice};
use super::{ExecError, Executor, ScriptRunner};
use crate::models::{Directive, PlannedDirective};
use async_trait::async_trait;
use colored::Colorize;
use std::path::PathBuf;

/// Applies directives to a Rails project on disk
pub struct ProjectExecutor {
    root: PathBuf,
    runner: ScriptRunner,
    bundle_command: String,
    declared: usize,
}

impl ProjectExecutor {
    pub fn new(root: impl Into<PathBuf>, runner: ScriptRunner, bundle_command: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            runner,
            bundle_command: bundle_command.into(),
            declared: 0,
        }
    }

    /// Number of dependencies written to the Gemfile so far
    pub fn declared(&self) -> usize {
        self.declared
    }

    fn declare(&mut self, line: &str) -> Result<(), ExecError> {
        let path = self.root.join("Gemfile");
        let contents = std::fs::read_to_string(&path)?;
        std::fs::write(&path, append_gem(&contents, line))?;
        self.declared += 1;
        Ok(())
    }
}

#[async_trait]
impl Executor for ProjectExecutor {
    async fn apply(&mut self, planned: &PlannedDirective) -> Result<(), ExecError> {
        match &planned.directive {
            Directive::DeclareDependency {
                name,
                source,
                require,
                groups,
            } => {
                let line = render_gem(name, source.as_ref(), require.as_ref(), groups);
                self.declare(&line)?;
            }
            Directive::AppendToFile { path, anchor, text } => {
                let target = self.root.join(path);
                let contents = std::fs::read_to_string(&target)?;
                let updated = splice(&contents, anchor, text).ok_or_else(|| {
                    ExecError::AnchorNotFound {
                        path: path.clone(),
                        anchor: anchor.marker().unwrap_or("<end>").to_string(),
                    }
                })?;
                std::fs::write(&target, updated)?;
            }
            Directive::WriteFile { path, contents } => {
                let target = self.root.join(path);
                if let Some(parent) = target.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&target, contents)?;
            }
            Directive::RunCommand { argv } => {
                println!("{}", format!("▶ {}", argv.join(" ")).cyan());
                self.runner.run(argv, &self.root).await?;
            }
            Directive::Say { lines } => {
                for line in lines {
                    println!("{}", line.bold());
                }
                return Ok(());
            }
        }

        println!("   {} {}", "✓".green(), planned.directive.describe());
        Ok(())
    }

    async fn skeleton_ready(&mut self) -> Result<(), ExecError> {
        if self.declared == 0 {
            return Ok(());
        }

        println!();
        println!("{}", "📦 Installing dependencies...".cyan());
        let argv = vec![self.bundle_command.clone(), "install".to_string()];
        self.runner.run(&argv, &self.root).await?;
        Ok(())
    }
}
