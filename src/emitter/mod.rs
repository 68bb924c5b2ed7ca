//! Directive emitter
//!
//! Pure mapping from an [`AnswerSet`] to a [`Plan`]. Nothing here touches the
//! filesystem or spawns processes, so every decision can be tested from a
//! scripted answer set.

mod areas;
pub mod snippets;

use crate::catalog::keys;
use crate::models::{
    AnswerSet, Anchor, Directive, FeatureArea, GemSource, Phase, Plan, RailsmithConfig, Require,
};
use std::path::PathBuf;

/// Settings that shape emitted directives without being asked interactively
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// argv[0] of generator commands
    pub rails: String,
    /// Parent directory of newly generated applications
    pub output_dir: PathBuf,
    pub ruby_version: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self::from_config(&RailsmithConfig::default())
    }
}

impl EmitOptions {
    pub fn from_config(config: &RailsmithConfig) -> Self {
        Self {
            rails: config.rails_command.clone(),
            output_dir: config.output_dir.clone(),
            ruby_version: config.ruby_version().to_string(),
        }
    }
}

/// Directives of the application generator session: one `rails new` call
pub fn emit_generator(answers: &AnswerSet, opts: &EmitOptions) -> Plan {
    let mut plan = Plan::new();

    let app_name = answers.text(keys::APP_NAME).unwrap_or_default();
    let target = opts.output_dir.join(app_name);

    let mut argv = vec![
        opts.rails.clone(),
        "new".to_string(),
        target.to_string_lossy().to_string(),
    ];
    if let Some(database) = answers.choice(keys::DATABASE) {
        argv.push(format!("--database={}", database));
    }
    if answers.flag(keys::SKIP_ACTION_CABLE) {
        argv.push("--skip-action-cable".to_string());
    }
    if answers.flag(keys::SKIP_TEST) {
        argv.push("--skip-test".to_string());
    }
    if answers.flag(keys::SKIP_ACTION_TEXT) {
        argv.push("--skip-action-text".to_string());
    }
    if let Some(css) = answers.choice(keys::CSS) {
        argv.push(format!("--css={}", css));
    }
    if let Some(js) = answers.choice(keys::JAVASCRIPT) {
        argv.push(format!("--javascript={}", js));
    }

    plan.push(Phase::Immediate, FeatureArea::Generator, Directive::RunCommand { argv });
    plan
}

/// Directives of the template session, feature area by feature area
pub fn emit_template(answers: &AnswerSet, opts: &EmitOptions) -> Plan {
    let mut plan = Plan::new();

    areas::view_components(&mut AreaPlan::new(&mut plan, FeatureArea::ViewComponents), answers);
    areas::api(&mut AreaPlan::new(&mut plan, FeatureArea::Api), answers, opts);
    areas::authentication(&mut AreaPlan::new(&mut plan, FeatureArea::Authentication), answers, opts);
    areas::admin(&mut AreaPlan::new(&mut plan, FeatureArea::Admin), answers, opts);
    areas::storage(&mut AreaPlan::new(&mut plan, FeatureArea::Storage), answers, opts);
    areas::jobs(&mut AreaPlan::new(&mut plan, FeatureArea::Jobs), answers);
    areas::authorization(&mut AreaPlan::new(&mut plan, FeatureArea::Authorization), answers, opts);
    areas::monitoring(&mut AreaPlan::new(&mut plan, FeatureArea::Monitoring), answers);
    areas::tooling(&mut AreaPlan::new(&mut plan, FeatureArea::Tooling), answers);
    areas::finalization(&mut AreaPlan::new(&mut plan, FeatureArea::Finalization), answers, opts);

    plan
}

/// True when the API answer includes GraphQL
pub(crate) fn wants_graphql(answers: &AnswerSet) -> bool {
    answers.choice_in(keys::API, &["GraphQL", "Both"])
}

/// Appends directives to a plan on behalf of one feature area
pub(crate) struct AreaPlan<'a> {
    plan: &'a mut Plan,
    area: FeatureArea,
}

impl<'a> AreaPlan<'a> {
    fn new(plan: &'a mut Plan, area: FeatureArea) -> Self {
        Self { plan, area }
    }

    pub(crate) fn now(&mut self, directive: Directive) {
        self.plan.push(Phase::Immediate, self.area, directive);
    }

    pub(crate) fn after_bundle(&mut self, directive: Directive) {
        self.plan.push(Phase::Deferred, self.area, directive);
    }

    pub(crate) fn gem(&mut self, name: &str) {
        self.now(Directive::gem(name));
    }

    pub(crate) fn gems(&mut self, names: &[&str]) {
        for name in names {
            self.gem(name);
        }
    }

    pub(crate) fn gem_with(
        &mut self,
        name: &str,
        source: Option<GemSource>,
        require: Option<Require>,
        groups: &[&str],
    ) {
        self.now(Directive::DeclareDependency {
            name: name.to_string(),
            source,
            require,
            groups: groups.iter().map(|g| g.to_string()).collect(),
        });
    }

    /// Devise tracks its main branch
    pub(crate) fn devise_gem(&mut self) {
        self.gem_with(
            "devise",
            Some(GemSource {
                git: snippets::DEVISE_GIT.to_string(),
                branch: Some("main".to_string()),
            }),
            None,
            &[],
        );
    }

    /// Deferred generator command, e.g. `rails g pundit:install`
    pub(crate) fn rails(&mut self, opts: &EmitOptions, args: &[&str]) {
        let argv = std::iter::once(opts.rails.clone())
            .chain(args.iter().map(|a| a.to_string()))
            .collect::<Vec<_>>();
        self.after_bundle(Directive::RunCommand { argv });
    }

    /// Deferred route declaration at the top of the routes block
    pub(crate) fn route(&mut self, route: &str) {
        self.after_bundle(Directive::append(
            snippets::ROUTES_FILE,
            Anchor::After(snippets::ROUTES_DRAW.to_string()),
            format!("\n  {}", route),
        ));
    }
}
