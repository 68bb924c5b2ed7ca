//! File contents written or spliced by the template session

/// Marker every Rails routes file opens its route block with
pub const ROUTES_DRAW: &str = "Rails.application.routes.draw do";

pub const ROUTES_FILE: &str = "config/routes.rb";
pub const RAILS_HELPER_FILE: &str = "spec/rails_helper.rb";
pub const RSPEC_CONFIGURE: &str = "RSpec.configure do |config|";
pub const RUBOCOP_FILE: &str = ".rubocop.yml";
pub const SENTRY_INITIALIZER_FILE: &str = "config/initializers/sentry.rb";

pub const DEVISE_GIT: &str = "https://github.com/heartcombo/devise";

pub const RAILS_HELPER_SNIPPET: &str = r#"

  config.include FactoryBot::Syntax::Methods

  if Bullet.enable?
    config.before do
      Bullet.start_request
    end

    config.after do
      Bullet.perform_out_of_channel_notifications if Bullet.notification?
      Bullet.end_request
    end
  end
"#;

pub const SENTRY_INITIALIZER: &str = r#"Sentry.init do |config|
  config.dsn = 'https://examplePublicKey@o0.ingest.sentry.io/0'
  config.breadcrumbs_logger = [:active_support_logger, :http_logger]

  # To activate performance monitoring, set one of these options.
  # We recommend adjusting the value in production:
  config.traces_sample_rate = 1.0
  # or
  config.traces_sampler = lambda do |context|
    true
  end
end
"#;

/// Extra plugin line spliced after `rubocop-rspec` when GraphQL is in use
pub const RUBOCOP_GRAPHQL_LINE: &str = "\n  - rubocop-graphql";
pub const RUBOCOP_RSPEC_MARKER: &str = "rubocop-rspec";

/// Static analysis configuration for the generated app
pub fn rubocop_config(ruby_version: &str) -> String {
    format!(
        r#"require:
  - rubocop-performance
  - rubocop-rails
  - rubocop-rspec

AllCops:
  TargetRubyVersion: {ruby_version}
  NewCops: enable
  Exclude:
    - 'db/**/*'
    - 'vendor/**/*'
    - 'tmp/**/*'
    - 'bin/**/*'
    - 'log/**/*'
    - 'public/**/*'
Layout/LineLength:
  Max: 120
Style/Documentation:
  Enabled: false
Metrics/BlockLength:
  Exclude:
    - 'config/**/*'
"#
    )
}

pub fn completion_summary() -> Vec<String> {
    vec![
        String::new(),
        "--------- POST GENERATION MESSAGE -----------".to_string(),
        "Set up your database now and run the migrations".to_string(),
        "Remember that most authentication tools require some mailer configuration".to_string(),
    ]
}
