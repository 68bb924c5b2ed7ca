//! Option collector
//!
//! Walks an ordered question list, asking each visible question through a
//! [`Prompter`] and recording the result in an [`AnswerSet`].

pub mod scripted;
pub mod terminal;

pub use scripted::{ScriptedPrompter, ScriptedResponse};
pub use terminal::TerminalPrompter;

use crate::models::{AnswerSet, AnswerValue, Question, QuestionKind};

pub type PromptResult<T> = Result<T, PromptError>;

/// Errors raised while reading answers
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Input stream closed before all questions were answered")]
    EndOfInput,

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Source of operator input
pub trait Prompter {
    /// Free text. An empty string is returned as-is; the collector decides
    /// whether that is acceptable.
    fn input(&mut self, prompt: &str, default: Option<&str>) -> PromptResult<String>;

    /// Index of the selected entry in `choices`
    fn select(&mut self, prompt: &str, choices: &[&str], default: usize) -> PromptResult<usize>;

    fn confirm(&mut self, prompt: &str, default: bool) -> PromptResult<bool>;
}

pub struct Collector;

impl Collector {
    /// Ask every visible question in order
    pub fn collect(questions: &[Question], prompter: &mut dyn Prompter) -> PromptResult<AnswerSet> {
        let mut answers = AnswerSet::new();

        for question in questions {
            if !question.is_visible(&answers) {
                continue;
            }
            let value = Self::ask(question, &answers, prompter)?;
            answers.insert(question.key, value);
        }

        Ok(answers)
    }

    fn ask(
        question: &Question,
        answers: &AnswerSet,
        prompter: &mut dyn Prompter,
    ) -> PromptResult<AnswerValue> {
        match &question.kind {
            QuestionKind::FreeText {
                prompt,
                default,
                required,
                retry_prompt,
            } => {
                let mut current = *prompt;
                loop {
                    let value = prompter.input(current, *default)?;
                    let value = value.trim();
                    if !value.is_empty() {
                        return Ok(AnswerValue::Text(value.to_string()));
                    }
                    if let Some(d) = default {
                        return Ok(AnswerValue::Text(d.to_string()));
                    }
                    if !required {
                        return Ok(AnswerValue::Text(String::new()));
                    }
                    current = retry_prompt.unwrap_or(*prompt);
                }
            }
            QuestionKind::SingleSelect {
                prompt,
                choices,
                default,
            } => {
                let list = choices.resolve(answers);
                if list.is_empty() {
                    return Err(PromptError::Terminal(format!(
                        "No choices available for '{}'",
                        question.key
                    )));
                }
                let default = (*default).min(list.len() - 1);
                let index = prompter.select(prompt, list, default)?;
                let choice = list.get(index).ok_or_else(|| {
                    PromptError::Terminal(format!("Selection {} out of range for '{}'", index, question.key))
                })?;
                Ok(AnswerValue::Choice((*choice).to_string()))
            }
            QuestionKind::Confirm { prompt, default } => {
                Ok(AnswerValue::Bool(prompter.confirm(prompt, *default)?))
            }
        }
    }
}
