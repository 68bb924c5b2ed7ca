use super::{ExecError, Executor};
use crate::models::PlannedDirective;
use async_trait::async_trait;
use colored::Colorize;

/// Prints what would happen without touching the filesystem
#[derive(Debug, Default)]
pub struct DryRunExecutor {
    lines: Vec<String>,
    quiet: bool,
}

impl DryRunExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record without printing
    pub fn quiet() -> Self {
        Self {
            lines: Vec::new(),
            quiet: true,
        }
    }

    /// Everything recorded so far, one entry per step
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn record(&mut self, line: String) {
        if !self.quiet {
            println!("{}", line);
        }
        self.lines.push(line);
    }
}

#[async_trait]
impl Executor for DryRunExecutor {
    async fn apply(&mut self, planned: &PlannedDirective) -> Result<(), ExecError> {
        let line = format!(
            "[{}] {:<16} {}",
            planned.phase.name(),
            planned.area.name(),
            planned.directive.describe()
        );
        self.record(line);
        Ok(())
    }

    async fn skeleton_ready(&mut self) -> Result<(), ExecError> {
        self.record(format!("{}", "--- bundle install ---".bright_black()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::run_plan;
    use crate::models::{Directive, FeatureArea, Phase, Plan};

    #[tokio::test]
    async fn test_records_each_step() {
        let mut plan = Plan::new();
        plan.push(Phase::Immediate, FeatureArea::Jobs, Directive::gem("sidekiq"));
        plan.push(Phase::Deferred, FeatureArea::Finalization, Directive::run(["git", "init"]));

        let mut dry = DryRunExecutor::quiet();
        run_plan(&plan, &mut dry).await.unwrap();

        assert_eq!(dry.lines().len(), 3);
        assert!(dry.lines()[0].starts_with("[immediate] jobs"));
        assert!(dry.lines()[0].ends_with("gem sidekiq"));
        assert!(dry.lines()[1].contains("bundle install"));
        assert!(dry.lines()[2].ends_with("run git init"));
    }
}
