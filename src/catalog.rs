//! Question lists for the two sessions
//!
//! Keys are shared with the emitter, which branches on them.

use crate::models::{AnswerSet, Question};

pub mod keys {
    // Application generator
    pub const APP_NAME: &str = "app_name";
    pub const DATABASE: &str = "database";
    pub const JAVASCRIPT: &str = "javascript";
    pub const INSTALL_CSS: &str = "install_css";
    pub const CSS: &str = "css";
    pub const SKIP_ACTION_CABLE: &str = "skip_action_cable";
    pub const SKIP_ACTION_TEXT: &str = "skip_action_text";
    pub const SKIP_TEST: &str = "skip_test";

    // Template
    pub const VIEW_COMPONENTS: &str = "view_components";
    pub const API: &str = "api";
    pub const AUTHENTICATION: &str = "authentication";
    pub const DEVISE_GENERATE_MODEL: &str = "devise_generate_model";
    pub const DEVISE_MODEL: &str = "devise_model";
    pub const RODAUTH_JSON_MODE: &str = "rodauth_json_mode";
    pub const SORCERY_MODEL: &str = "sorcery_model";
    pub const ADMIN: &str = "admin";
    pub const ADMIN_DEVISE: &str = "admin_devise";
    pub const INSTALL_STORAGE: &str = "install_storage";
    pub const STORAGE: &str = "storage";
    pub const AWS_S3: &str = "aws_s3";
    pub const SIDEKIQ: &str = "sidekiq";
    pub const AUTHORIZATION: &str = "authorization";
    pub const MONITORING: &str = "monitoring";
}

pub const DATABASES: &[&str] = &["postgresql", "sqlite3", "mysql"];
pub const JS_APPROACHES: &[&str] = &["importmap", "webpack", "esbuild"];
pub const CSS_PROCESSORS: &[&str] = &["tailwind", "bootstrap", "bulma", "postcss", "sass"];
/// importmap only bundles JavaScript, so tailwind is the only compatible processor
pub const IMPORTMAP_CSS_PROCESSORS: &[&str] = &["tailwind"];

pub const API_STYLES: &[&str] = &["None", "REST", "GraphQL", "Both"];
pub const AUTHENTICATION_TOOLS: &[&str] = &["None", "rodauth", "sorcery", "devise"];
pub const RODAUTH_JSON_MODES: &[&str] = &["No", "JSON", "JWT"];
pub const ADMIN_FRAMEWORKS: &[&str] = &["None", "Active Admin", "Administrate"];
pub const STORAGE_APPROACHES: &[&str] = &["Active Storage", "Shrine", "Carrierwave"];
pub const AUTHORIZATION_LIBRARIES: &[&str] = &["None", "Pundit", "CanCanCan"];
pub const MONITORING_TOOLS: &[&str] = &["None", "Sentry", "Rollbar"];

fn css_choices(answers: &AnswerSet) -> &'static [&'static str] {
    if answers.choice(keys::JAVASCRIPT) == Some("importmap") {
        IMPORTMAP_CSS_PROCESSORS
    } else {
        CSS_PROCESSORS
    }
}

/// Questions asked before the application skeleton is generated
pub fn app_questions() -> Vec<Question> {
    vec![
        Question::text(keys::APP_NAME, "What is the name of your application?")
            .required(Some("C'mon, give some fancy name to this nice app.")),
        Question::select(keys::DATABASE, "Choose database", DATABASES),
        Question::select(keys::JAVASCRIPT, "Choose JavaScript approach", JS_APPROACHES),
        Question::confirm(keys::INSTALL_CSS, "Install CSS processor?", true),
        Question::select_derived(
            keys::CSS,
            "Choose CSS processor. If importmap was chosen as the JavaScript approach only \
             tailwind is compatible (other CSS frameworks can still be added separately)",
            css_choices,
        )
        .visible_if(|a| a.flag(keys::INSTALL_CSS)),
        Question::confirm(keys::SKIP_ACTION_CABLE, "Skip Action Cable?", true),
        Question::confirm(keys::SKIP_ACTION_TEXT, "Skip Action Text?", true),
        Question::confirm(keys::SKIP_TEST, "Skip Test Files?", true),
    ]
}

/// Questions asked by the template session, in feature area order
pub fn template_questions() -> Vec<Question> {
    vec![
        Question::confirm(
            keys::VIEW_COMPONENTS,
            "Install GithubViewComponent? (A better Trailblazer Cells)",
            true,
        ),
        Question::select(keys::API, "Choose your API type", API_STYLES),
        Question::select(
            keys::AUTHENTICATION,
            "What is your desired authentication tool, if any?",
            AUTHENTICATION_TOOLS,
        ),
        Question::confirm(keys::DEVISE_GENERATE_MODEL, "Generate devise model?", true)
            .visible_if(|a| a.choice(keys::AUTHENTICATION) == Some("devise")),
        Question::text(keys::DEVISE_MODEL, "Name your user model")
            .default_text("User")
            .visible_if(|a| {
                a.choice(keys::AUTHENTICATION) == Some("devise") && a.flag(keys::DEVISE_GENERATE_MODEL)
            }),
        Question::select(
            keys::RODAUTH_JSON_MODE,
            "Use rodauth for JSON API? What mode if yes",
            RODAUTH_JSON_MODES,
        )
        .visible_if(|a| a.choice(keys::AUTHENTICATION) == Some("rodauth")),
        Question::text(keys::SORCERY_MODEL, "Name your user model")
            .default_text("User")
            .visible_if(|a| a.choice(keys::AUTHENTICATION) == Some("sorcery")),
        Question::select(keys::ADMIN, "Choose your administration framework", ADMIN_FRAMEWORKS),
        Question::confirm(keys::ADMIN_DEVISE, "Install Devise for Active Admin?", false).visible_if(
            |a| {
                a.choice(keys::ADMIN) == Some("Active Admin")
                    && a.choice(keys::AUTHENTICATION) != Some("devise")
            },
        ),
        Question::confirm(keys::INSTALL_STORAGE, "Install file storage library?", true),
        Question::select(keys::STORAGE, "Choose your file storage approach", STORAGE_APPROACHES)
            .visible_if(|a| a.flag(keys::INSTALL_STORAGE)),
        Question::confirm(keys::AWS_S3, "Install AWS SDK for S3?", true)
            .visible_if(|a| a.flag(keys::INSTALL_STORAGE)),
        Question::confirm(keys::SIDEKIQ, "Install Sidekiq?", true),
        Question::select(
            keys::AUTHORIZATION,
            "Choose your authorization library",
            AUTHORIZATION_LIBRARIES,
        ),
        Question::select(keys::MONITORING, "Choose your error reporting tool", MONITORING_TOOLS),
    ]
}
