//! Interactive prompter backed by dialoguer

use super::{PromptError, PromptResult, Prompter};
use dialoguer::{Confirm, Input, Select};
use std::io::ErrorKind;

#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn map_err(err: dialoguer::Error) -> PromptError {
    match err {
        dialoguer::Error::IO(e)
            if matches!(
                e.kind(),
                ErrorKind::UnexpectedEof | ErrorKind::Interrupted | ErrorKind::NotConnected
            ) =>
        {
            PromptError::EndOfInput
        }
        dialoguer::Error::IO(e) => PromptError::Terminal(e.to_string()),
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str, default: Option<&str>) -> PromptResult<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(d) = default {
            input = input.default(d.to_string());
        }
        input.interact_text().map_err(map_err)
    }

    fn select(&mut self, prompt: &str, choices: &[&str], default: usize) -> PromptResult<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(choices)
            .default(default)
            .interact()
            .map_err(map_err)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> PromptResult<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(map_err)
    }
}
