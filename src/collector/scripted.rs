//! Prompter that replays canned responses

use super::{PromptError, PromptResult, Prompter};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedResponse {
    Text(String),
    /// Select by position
    Index(usize),
    /// Select by label
    Choice(String),
    Confirm(bool),
    /// Accept whatever default the question offers
    Default,
}

/// Replays a fixed queue of responses in order.
///
/// Running out of responses behaves like a closed input stream.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    responses: VecDeque<ScriptedResponse>,
    prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(responses: Vec<ScriptedResponse>) -> Self {
        Self {
            responses: responses.into(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt shown so far, in order
    pub fn prompts_seen(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.responses.len()
    }

    fn next(&mut self, prompt: &str) -> PromptResult<ScriptedResponse> {
        self.prompts.push(prompt.to_string());
        self.responses.pop_front().ok_or(PromptError::EndOfInput)
    }

    fn mismatch(prompt: &str, response: &ScriptedResponse) -> PromptError {
        PromptError::Terminal(format!(
            "Scripted response {:?} does not fit prompt '{}'",
            response, prompt
        ))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str, default: Option<&str>) -> PromptResult<String> {
        match self.next(prompt)? {
            ScriptedResponse::Text(s) => Ok(s),
            ScriptedResponse::Default => Ok(default.unwrap_or_default().to_string()),
            other => Err(Self::mismatch(prompt, &other)),
        }
    }

    fn select(&mut self, prompt: &str, choices: &[&str], default: usize) -> PromptResult<usize> {
        match self.next(prompt)? {
            ScriptedResponse::Index(i) => Ok(i),
            ScriptedResponse::Default => Ok(default),
            ScriptedResponse::Choice(label) => choices
                .iter()
                .position(|c| *c == label)
                .ok_or_else(|| Self::mismatch(prompt, &ScriptedResponse::Choice(label))),
            other => Err(Self::mismatch(prompt, &other)),
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> PromptResult<bool> {
        match self.next(prompt)? {
            ScriptedResponse::Confirm(b) => Ok(b),
            ScriptedResponse::Default => Ok(default),
            other => Err(Self::mismatch(prompt, &other)),
        }
    }
}
