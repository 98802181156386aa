//! Fluent form definition.

use std::collections::HashSet;

use anyhow::Result;

use super::{
    answer::FormResult,
    error::FormError,
    question::{InputFilter, Question},
    runner,
};
use crate::tui::{terminal::TerminalSession, theme::Theme};

/// Accumulates questions in call order.
///
/// Every method appends one question and hands the builder back, so a form
/// reads top to bottom in the order it will be asked:
///
/// ```no_run
/// use tuiform::form::FormBuilder;
///
/// let form = FormBuilder::new()
///     .text_input("name", "Name", "What should we call you?")
///     .radio_list("level", "Level", "Your experience", ["Beginner", "Advanced"])
///     .yes_no("subscribe", "Newsletter", "Subscribe to updates?")
///     .build()?;
/// # Ok::<(), tuiform::form::FormError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    questions: Vec<Question>,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already constructed question.
    #[must_use]
    pub fn question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Free-text input.
    #[must_use]
    pub fn text_input(
        self,
        key: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.question(Question::text(key, title, description))
    }

    /// Free-text input restricted by `filter`.
    #[must_use]
    pub fn filtered_text_input(
        self,
        key: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        filter: InputFilter,
    ) -> Self {
        self.question(Question::filtered_text(key, title, description, filter))
    }

    /// Single-select list; the first option is selected by default.
    #[must_use]
    pub fn radio_list<I, S>(
        self,
        key: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        options: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.question(Question::radio(key, title, description, options))
    }

    /// Multi-select list; nothing is toggled by default.
    #[must_use]
    pub fn checkbox_list<I, S>(
        self,
        key: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        options: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.question(Question::checkbox(key, title, description, options))
    }

    /// Yes/No confirmation. "No" cancels the whole form, like `Esc`.
    #[must_use]
    pub fn confirmation(
        self,
        key: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.question(Question::confirm(key, title, text))
    }

    /// Yes/No question that records "No" as `false` instead of cancelling.
    #[must_use]
    pub fn yes_no(
        self,
        key: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.question(Question::yes_no(key, title, text))
    }

    /// Validate and freeze the question list.
    pub fn build(self) -> Result<Form, FormError> {
        Form::new(self.questions)
    }
}

/// A validated, immutable, ordered list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    questions: Vec<Question>,
}

impl Form {
    /// Validates an explicit list of questions.
    ///
    /// Keys must be non-empty and unique; single-select questions need at
    /// least one option.
    pub fn new(questions: Vec<Question>) -> Result<Self, FormError> {
        let mut seen = HashSet::new();
        for question in &questions {
            question.validate()?;
            if !seen.insert(question.key()) {
                return Err(FormError::DuplicateKey(question.key().to_string()));
            }
        }
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Run the form on the real terminal.
    ///
    /// Returns `Ok(None)` if the user cancelled any dialog. The terminal is
    /// restored before this returns, on every path.
    pub fn run(&self, theme: &Theme) -> Result<Option<FormResult>> {
        let session = TerminalSession::acquire()?;
        runner::run(self, session, theme)
    }
}
