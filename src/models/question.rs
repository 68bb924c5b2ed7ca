use super::AnswerSet;

/// Predicate over answers collected so far
pub type AnswerPredicate = fn(&AnswerSet) -> bool;

/// Choice list of a single-select question
#[derive(Debug, Clone, Copy)]
pub enum Choices {
    Static(&'static [&'static str]),
    /// Computed from earlier answers at the moment the question is asked
    Derived(fn(&AnswerSet) -> &'static [&'static str]),
}

impl Choices {
    pub fn resolve(&self, answers: &AnswerSet) -> &'static [&'static str] {
        match self {
            Choices::Static(list) => *list,
            Choices::Derived(f) => f(answers),
        }
    }
}

/// What kind of input a question expects
#[derive(Debug, Clone)]
pub enum QuestionKind {
    FreeText {
        prompt: &'static str,
        default: Option<&'static str>,
        /// Re-prompt until a non-empty value is supplied
        required: bool,
        /// Prompt shown on the second and later attempts
        retry_prompt: Option<&'static str>,
    },
    SingleSelect {
        prompt: &'static str,
        choices: Choices,
        /// Index into the resolved choice list
        default: usize,
    },
    Confirm {
        prompt: &'static str,
        default: bool,
    },
}

/// A single entry of a question list
#[derive(Debug, Clone)]
pub struct Question {
    pub key: &'static str,
    pub kind: QuestionKind,
    /// When set and false, the question is skipped and its key left absent
    pub visible_if: Option<AnswerPredicate>,
}

impl Question {
    pub fn text(key: &'static str, prompt: &'static str) -> Self {
        Self {
            key,
            kind: QuestionKind::FreeText {
                prompt,
                default: None,
                required: false,
                retry_prompt: None,
            },
            visible_if: None,
        }
    }

    pub fn select(key: &'static str, prompt: &'static str, choices: &'static [&'static str]) -> Self {
        Self {
            key,
            kind: QuestionKind::SingleSelect {
                prompt,
                choices: Choices::Static(choices),
                default: 0,
            },
            visible_if: None,
        }
    }

    pub fn select_derived(
        key: &'static str,
        prompt: &'static str,
        choices: fn(&AnswerSet) -> &'static [&'static str],
    ) -> Self {
        Self {
            key,
            kind: QuestionKind::SingleSelect {
                prompt,
                choices: Choices::Derived(choices),
                default: 0,
            },
            visible_if: None,
        }
    }

    pub fn confirm(key: &'static str, prompt: &'static str, default: bool) -> Self {
        Self {
            key,
            kind: QuestionKind::Confirm { prompt, default },
            visible_if: None,
        }
    }

    /// Mark a free text question as required, with an optional nagging re-prompt
    pub fn required(mut self, retry: Option<&'static str>) -> Self {
        if let QuestionKind::FreeText {
            required,
            retry_prompt,
            ..
        } = &mut self.kind
        {
            *required = true;
            *retry_prompt = retry;
        }
        self
    }

    /// Default value for free text questions
    pub fn default_text(mut self, value: &'static str) -> Self {
        if let QuestionKind::FreeText { default, .. } = &mut self.kind {
            *default = Some(value);
        }
        self
    }

    pub fn visible_if(mut self, predicate: AnswerPredicate) -> Self {
        self.visible_if = Some(predicate);
        self
    }

    pub fn is_visible(&self, answers: &AnswerSet) -> bool {
        self.visible_if.map_or(true, |p| p(answers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnswerValue;

    #[test]
    fn test_builders_only_touch_free_text() {
        let q = Question::confirm("x", "Proceed?", true)
            .required(Some("again"))
            .default_text("nope");
        assert!(matches!(q.kind, QuestionKind::Confirm { default: true, .. }));

        let q = Question::text("name", "Name?").required(None).default_text("User");
        match q.kind {
            QuestionKind::FreeText {
                default, required, ..
            } => {
                assert_eq!(default, Some("User"));
                assert!(required);
            }
            _ => panic!("expected free text"),
        }
    }

    #[test]
    fn test_visibility_predicate() {
        let q = Question::confirm("aws", "S3?", false).visible_if(|a| a.flag("storage"));
        assert!(!q.is_visible(&AnswerSet::new()));

        let answers = AnswerSet::new().with("storage", AnswerValue::Bool(true));
        assert!(q.is_visible(&answers));
    }

    #[test]
    fn test_derived_choices() {
        fn pick(a: &AnswerSet) -> &'static [&'static str] {
            if a.flag("small") {
                &["one"]
            } else {
                &["one", "two"]
            }
        }
        let choices = Choices::Derived(pick);
        assert_eq!(choices.resolve(&AnswerSet::new()).len(), 2);
        let small = AnswerSet::new().with("small", AnswerValue::Bool(true));
        assert_eq!(choices.resolve(&small), &["one"]);
    }
}
