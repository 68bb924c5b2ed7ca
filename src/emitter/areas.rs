//! One function per feature area, evaluated in presentation order

use super::{snippets, wants_graphql, AreaPlan, EmitOptions};
use crate::catalog::keys;
use crate::models::{AnswerSet, Anchor, Directive, Require};
use crate::utils::inflect::classify;

const REST_GEMS: &[&str] = &[
    "grape",
    "grape-entity",
    "grape-swagger",
    "grape-swagger-entity",
    "grape-swagger-rails",
];
const GRAPHQL_GEMS: &[&str] = &["graphql", "graphiql-rails"];

const RUBOCOP_GEMS: &[&str] = &[
    "rubocop",
    "rubocop-rails",
    "rubocop-performance",
    "rubocop-rspec",
];
const DEV_TEST_GEMS: &[&str] = &[
    "strong_migrations",
    "rspec-rails",
    "amazing_print",
    "factory_bot_rails",
    "pry",
    "bullet",
    "faker",
];

pub(super) fn view_components(out: &mut AreaPlan<'_>, answers: &AnswerSet) {
    if !answers.flag(keys::VIEW_COMPONENTS) {
        return;
    }
    out.gem("view_component");
    out.now(Directive::run(["mkdir", "-p", "app/components"]));
}

pub(super) fn api(out: &mut AreaPlan<'_>, answers: &AnswerSet, opts: &EmitOptions) {
    if answers.choice_in(keys::API, &["REST", "Both"]) {
        out.gems(REST_GEMS);
        out.route("mount GrapeSwaggerRails::Engine => '/swagger'");
    }

    if wants_graphql(answers) {
        out.gems(GRAPHQL_GEMS);
        out.rails(opts, &["g", "graphql:install"]);
    }

    if matches!(answers.choice(keys::API), Some(api) if api != "None") {
        out.gem_with(
            "rack-cors",
            None,
            Some(Require::Path("rack/cors".to_string())),
            &[],
        );
    }
}

pub(super) fn authentication(out: &mut AreaPlan<'_>, answers: &AnswerSet, opts: &EmitOptions) {
    match answers.choice(keys::AUTHENTICATION) {
        Some("devise") => {
            out.devise_gem();
            out.rails(opts, &["g", "devise:install"]);
            if answers.flag(keys::DEVISE_GENERATE_MODEL) {
                let model = classify(answers.text(keys::DEVISE_MODEL).unwrap_or("User"));
                out.rails(opts, &["g", "devise", model.as_str()]);
            }
        }
        Some("rodauth") => {
            out.gem("rodauth-rails");
            let mode = answers
                .choice(keys::RODAUTH_JSON_MODE)
                .filter(|m| *m != "No")
                .map(|m| format!("--{}", m.to_lowercase()));
            match mode {
                Some(flag) => out.rails(opts, &["generate", "rodauth:install", flag.as_str()]),
                None => out.rails(opts, &["generate", "rodauth:install"]),
            }
        }
        Some("sorcery") => {
            out.gem("sorcery");
            let model = classify(answers.text(keys::SORCERY_MODEL).unwrap_or("User"));
            out.rails(opts, &["generate", "sorcery:install", "--model", model.as_str()]);
        }
        _ => {}
    }
}

pub(super) fn admin(out: &mut AreaPlan<'_>, answers: &AnswerSet, opts: &EmitOptions) {
    match answers.choice(keys::ADMIN) {
        Some("Active Admin") => {
            out.gem("activeadmin");
            if answers.choice(keys::AUTHENTICATION) == Some("devise") {
                // devise was already declared by the authentication area
                out.rails(opts, &["g", "active_admin:install"]);
            } else if answers.flag(keys::ADMIN_DEVISE) {
                out.devise_gem();
                out.rails(opts, &["g", "active_admin:install"]);
            } else {
                out.rails(opts, &["g", "active_admin:install", "--skip-users"]);
            }
        }
        Some("Administrate") => {
            out.gem("administrate");
            out.rails(opts, &["g", "administrate:install"]);
        }
        _ => {}
    }
}

pub(super) fn storage(out: &mut AreaPlan<'_>, answers: &AnswerSet, opts: &EmitOptions) {
    if !answers.flag(keys::INSTALL_STORAGE) {
        return;
    }

    match answers.choice(keys::STORAGE) {
        Some("Active Storage") => out.rails(opts, &["active_storage:install"]),
        Some("Shrine") => out.gem("shrine"),
        Some("Carrierwave") => out.gem("carrierwave"),
        _ => {}
    }

    if answers.flag(keys::AWS_S3) {
        out.gem("aws-sdk-s3");
    }
}

pub(super) fn jobs(out: &mut AreaPlan<'_>, answers: &AnswerSet) {
    if !answers.flag(keys::SIDEKIQ) {
        return;
    }
    out.gems(&["sidekiq", "sidekiq-scheduler"]);
    out.after_bundle(Directive::append(
        snippets::ROUTES_FILE,
        Anchor::Before("Rails.application.routes".to_string()),
        "require 'sidekiq/web'\n\n",
    ));
    out.route("mount Sidekiq::Web => '/sidekiq'");
}

pub(super) fn authorization(out: &mut AreaPlan<'_>, answers: &AnswerSet, opts: &EmitOptions) {
    match answers.choice(keys::AUTHORIZATION) {
        Some("Pundit") => {
            out.gem("pundit");
            out.rails(opts, &["g", "pundit:install"]);
        }
        Some("CanCanCan") => {
            out.gem("cancancan");
            out.rails(opts, &["g", "cancan:ability"]);
        }
        _ => {}
    }
}

pub(super) fn monitoring(out: &mut AreaPlan<'_>, answers: &AnswerSet) {
    match answers.choice(keys::MONITORING) {
        Some("Sentry") => {
            out.gems(&["sentry-ruby", "sentry-rails"]);
            out.now(Directive::write(
                snippets::SENTRY_INITIALIZER_FILE,
                snippets::SENTRY_INITIALIZER,
            ));
        }
        Some("Rollbar") => out.gem("rollbar"),
        _ => {}
    }
}

pub(super) fn tooling(out: &mut AreaPlan<'_>, answers: &AnswerSet) {
    out.gem("dry-monads");

    out.gem_with("overcommit", None, None, &["development"]);
    for name in RUBOCOP_GEMS {
        out.gem_with(name, None, Some(Require::Disabled), &["development"]);
    }
    if wants_graphql(answers) {
        out.gem_with("rubocop-graphql", None, Some(Require::Disabled), &["development"]);
    }

    for name in DEV_TEST_GEMS {
        out.gem_with(name, None, None, &["development", "test"]);
    }
}

pub(super) fn finalization(out: &mut AreaPlan<'_>, answers: &AnswerSet, opts: &EmitOptions) {
    out.rails(opts, &["g", "rspec:install"]);
    out.rails(opts, &["g", "strong_migrations:install"]);
    out.rails(opts, &["g", "bullet:install"]);

    out.after_bundle(Directive::append(
        snippets::RAILS_HELPER_FILE,
        Anchor::After(snippets::RSPEC_CONFIGURE.to_string()),
        snippets::RAILS_HELPER_SNIPPET,
    ));

    out.after_bundle(Directive::write(
        snippets::RUBOCOP_FILE,
        snippets::rubocop_config(&opts.ruby_version),
    ));
    if wants_graphql(answers) {
        out.after_bundle(Directive::append(
            snippets::RUBOCOP_FILE,
            Anchor::After(snippets::RUBOCOP_RSPEC_MARKER.to_string()),
            snippets::RUBOCOP_GRAPHQL_LINE,
        ));
    }

    out.after_bundle(Directive::run(["rubocop", "-A"]));
    out.after_bundle(Directive::run(["git", "init"]));
    out.after_bundle(Directive::run(["git", "add", "."]));
    out.after_bundle(Directive::run(["git", "commit", "-m", "init"]));
    out.after_bundle(Directive::Say {
        lines: snippets::completion_summary(),
    });
}
