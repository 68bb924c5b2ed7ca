//! Integration tests for applying plans to a project on disk
//!
//! Uses a minimal Rails-shaped skeleton in a temp directory and plans made of
//! file and dependency directives, so no Ruby tooling is needed.

use railsmith::catalog::keys;
use railsmith::emitter::snippets;
use railsmith::executor::{run_plan, ExecError, ProjectExecutor, ScriptRunner};
use railsmith::models::{AnswerSet, AnswerValue, Directive, FeatureArea, Phase, Plan};
use railsmith::{emit_template, EmitOptions};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn create_skeleton(dir: &Path) {
    fs::create_dir_all(dir.join("config")).unwrap();
    fs::create_dir_all(dir.join("spec")).unwrap();
    fs::write(
        dir.join("Gemfile"),
        "source \"https://rubygems.org\"\n\ngem \"rails\", \"~> 7.1\"\n",
    )
    .unwrap();
    fs::write(
        dir.join("config/routes.rb"),
        "Rails.application.routes.draw do\n  root \"home#index\"\nend\n",
    )
    .unwrap();
    fs::write(
        dir.join("spec/rails_helper.rb"),
        "require 'spec_helper'\n\nRSpec.configure do |config|\n  config.use_transactional_fixtures = true\nend\n",
    )
    .unwrap();
}

/// Keep only the directives that can run without Ruby installed
fn without_commands(plan: &Plan) -> Plan {
    Plan {
        directives: plan
            .directives
            .iter()
            .filter(|d| !matches!(d.directive, Directive::RunCommand { .. } | Directive::Say { .. }))
            .cloned()
            .collect(),
    }
}

/// Executor whose bundle step is a harmless no-op command
fn executor(dir: &Path) -> ProjectExecutor {
    ProjectExecutor::new(dir, ScriptRunner::default(), "true")
}

#[cfg(unix)]
#[tokio::test]
async fn test_template_edits_apply_to_skeleton() {
    let dir = TempDir::new().unwrap();
    create_skeleton(dir.path());

    let answers = AnswerSet::new()
        .with(keys::API, AnswerValue::Choice("GraphQL".into()))
        .with(keys::AUTHENTICATION, AnswerValue::Choice("devise".into()))
        .with(keys::DEVISE_GENERATE_MODEL, AnswerValue::Bool(false))
        .with(keys::SIDEKIQ, AnswerValue::Bool(true))
        .with(keys::MONITORING, AnswerValue::Choice("Sentry".into()));
    let plan = without_commands(&emit_template(&answers, &EmitOptions::default()));

    let mut exec = executor(dir.path());
    run_plan(&plan, &mut exec).await.unwrap();
    assert_eq!(exec.declared(), plan.dependencies().len());

    let gemfile = fs::read_to_string(dir.path().join("Gemfile")).unwrap();
    assert!(gemfile.contains(
        "gem \"devise\", git: \"https://github.com/heartcombo/devise\", branch: \"main\"\n"
    ));
    assert!(gemfile.contains("gem \"rack-cors\", require: \"rack/cors\"\n"));
    assert!(gemfile.contains("gem \"rubocop-graphql\", require: false, group: [:development]\n"));
    assert!(gemfile.contains("gem \"faker\", group: [:development, :test]\n"));
    assert_eq!(gemfile.matches("gem \"devise\"").count(), 1);

    let routes = fs::read_to_string(dir.path().join("config/routes.rb")).unwrap();
    assert!(routes.starts_with("require 'sidekiq/web'\n\nRails.application.routes.draw do\n  mount Sidekiq::Web => '/sidekiq'\n"));

    let helper = fs::read_to_string(dir.path().join("spec/rails_helper.rb")).unwrap();
    assert!(helper.contains("RSpec.configure do |config|\n\n  config.include FactoryBot::Syntax::Methods"));

    assert!(dir.path().join(snippets::SENTRY_INITIALIZER_FILE).exists());
}

#[cfg(unix)]
#[tokio::test]
async fn test_rubocop_config_is_valid_yaml() {
    let dir = TempDir::new().unwrap();
    create_skeleton(dir.path());

    let answers = AnswerSet::new().with(keys::API, AnswerValue::Choice("Both".into()));
    let plan = without_commands(&emit_template(&answers, &EmitOptions::default()));
    run_plan(&plan, &mut executor(dir.path())).await.unwrap();

    let content = fs::read_to_string(dir.path().join(snippets::RUBOCOP_FILE)).unwrap();
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content).unwrap();

    let plugins: Vec<&str> = yaml["require"]
        .as_sequence()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(
        plugins,
        vec!["rubocop-performance", "rubocop-rails", "rubocop-rspec", "rubocop-graphql"]
    );
    assert_eq!(yaml["Layout/LineLength"]["Max"].as_u64(), Some(120));
    assert_eq!(yaml["Style/Documentation"]["Enabled"].as_bool(), Some(false));
    assert!(yaml["AllCops"]["Exclude"].as_sequence().unwrap().len() >= 6);
}

#[cfg(unix)]
#[tokio::test]
async fn test_failing_command_stops_the_plan() {
    let dir = TempDir::new().unwrap();
    create_skeleton(dir.path());

    let mut plan = Plan::new();
    plan.push(Phase::Immediate, FeatureArea::Tooling, Directive::gem("pry"));
    plan.push(
        Phase::Deferred,
        FeatureArea::Finalization,
        Directive::run(["sh", "-c", "exit 4"]),
    );
    plan.push(
        Phase::Deferred,
        FeatureArea::Finalization,
        Directive::write("after.txt", "should not exist"),
    );

    let err = run_plan(&plan, &mut executor(dir.path())).await.unwrap_err();
    assert!(matches!(err, ExecError::CommandFailed { code: Some(4), .. }));
    assert_eq!(err.exit_code(), 4);

    // already-applied directives stay applied
    let gemfile = fs::read_to_string(dir.path().join("Gemfile")).unwrap();
    assert!(gemfile.ends_with("gem \"pry\"\n"));
    assert!(!dir.path().join("after.txt").exists());
}

#[cfg(unix)]
#[tokio::test]
async fn test_commands_run_in_project_root() {
    let dir = TempDir::new().unwrap();
    create_skeleton(dir.path());

    let mut plan = Plan::new();
    plan.push(
        Phase::Immediate,
        FeatureArea::ViewComponents,
        Directive::run(["mkdir", "-p", "app/components"]),
    );
    run_plan(&plan, &mut executor(dir.path())).await.unwrap();

    assert!(dir.path().join("app/components").is_dir());
}
