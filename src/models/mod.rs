pub mod answer;
pub mod config;
pub mod directive;
pub mod question;

pub use answer::{AnswerSet, AnswerValue};
pub use config::RailsmithConfig;
pub use directive::{
    Anchor, Directive, FeatureArea, GemSource, Phase, Plan, PlannedDirective, Require,
};
pub use question::{AnswerPredicate, Choices, Question, QuestionKind};
