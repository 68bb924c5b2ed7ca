//! Answers collected from the operator during one session

use serde::{Deserialize, Serialize};

/// Value of a single answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnswerValue {
    /// Free text input
    Text(String),
    /// Yes/no confirmation
    Bool(bool),
    /// One entry of a single-select list
    Choice(String),
}

/// Insertion-ordered record of every answer given in a session.
///
/// Questions that were skipped never get an entry, so "absent" and
/// "answered with the default" stay distinguishable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerSet {
    entries: Vec<(String, AnswerValue)>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer. A repeated key replaces the earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: AnswerValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style insert, handy for scripted answer sets
    pub fn with(mut self, key: impl Into<String>, value: AnswerValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn is_answered(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(AnswerValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Confirmation value; an absent or non-boolean answer reads as `false`
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.get(key), Some(AnswerValue::Bool(true)))
    }

    pub fn choice(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(AnswerValue::Choice(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// True when `key` was answered with one of `options`
    pub fn choice_in(&self, key: &str, options: &[&str]) -> bool {
        self.choice(key).is_some_and(|c| options.contains(&c))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
