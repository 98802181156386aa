//! Question descriptors.
//!
//! A [`Question`] is an immutable record of one step of a form: the key its
//! answer is stored under, the text shown to the user, and what kind of
//! dialog collects the answer.

use std::fmt;

use regex::Regex;

use super::error::FormError;

/// Pattern accepted by [`InputFilter::digits`].
const DIGITS_PATTERN: &str = "[0-9]*";

/// Constraint applied to a text buffer on every edit.
///
/// The pattern must match the *whole* buffer; an edit that would produce a
/// non-matching buffer is rejected at entry time.
#[derive(Clone)]
pub struct InputFilter {
    source: String,
    regex: Regex,
}

impl InputFilter {
    /// Compiles a filter from a regular expression.
    ///
    /// The expression is anchored at both ends, so `[0-9]*` accepts `"42"`
    /// but not `"4a"`.
    pub fn new(pattern: &str) -> Result<Self, FormError> {
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|e| {
            FormError::InvalidFilter {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Digits only (empty buffer allowed).
    pub fn digits() -> Self {
        Self {
            source: DIGITS_PATTERN.to_string(),
            regex: Regex::new(&format!("^(?:{DIGITS_PATTERN})$"))
                .unwrap_or_else(|_| unreachable!("digits pattern is a valid regex")),
        }
    }

    /// Returns true if `text` satisfies the filter.
    pub fn accepts(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The pattern as given by the caller (without anchors).
    pub fn pattern(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for InputFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InputFilter").field(&self.source).finish()
    }
}

impl PartialEq for InputFilter {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for InputFilter {}

/// What kind of dialog collects the answer, with kind-specific options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free-text input, optionally filtered.
    Text { filter: Option<InputFilter> },
    /// Pick exactly one option. The first option is pre-selected.
    SingleSelect { options: Vec<String> },
    /// Toggle any number of options.
    MultiSelect { options: Vec<String> },
    /// Yes/No.
    ///
    /// With `decline_cancels` (the default for confirmations), answering "No"
    /// cancels the whole form. Without it "No" is recorded as `false`.
    Confirm { decline_cancels: bool },
}

impl QuestionKind {
    /// Short name used in logs and listings.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::SingleSelect { .. } => "single-select",
            Self::MultiSelect { .. } => "multi-select",
            Self::Confirm { .. } => "confirm",
        }
    }
}

/// One question of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    key: String,
    title: String,
    prompt: String,
    kind: QuestionKind,
}

impl Question {
    /// Free-text question.
    pub fn text(
        key: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(key, title, description, QuestionKind::Text { filter: None })
    }

    /// Free-text question whose buffer must always satisfy `filter`.
    pub fn filtered_text(
        key: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        filter: InputFilter,
    ) -> Self {
        Self::new(
            key,
            title,
            description,
            QuestionKind::Text {
                filter: Some(filter),
            },
        )
    }

    /// Single-select (radio) question.
    pub fn radio<I, S>(
        key: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        options: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            key,
            title,
            description,
            QuestionKind::SingleSelect {
                options: options.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Multi-select (checkbox) question.
    pub fn checkbox<I, S>(
        key: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        options: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            key,
            title,
            description,
            QuestionKind::MultiSelect {
                options: options.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Yes/No question where "No" cancels the form.
    pub fn confirm(
        key: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::new(
            key,
            title,
            text,
            QuestionKind::Confirm {
                decline_cancels: true,
            },
        )
    }

    /// Yes/No question where "No" records `false` and the form goes on.
    pub fn yes_no(
        key: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::new(
            key,
            title,
            text,
            QuestionKind::Confirm {
                decline_cancels: false,
            },
        )
    }

    fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        prompt: impl Into<String>,
        kind: QuestionKind,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            prompt: prompt.into(),
            kind,
        }
    }

    /// The key the answer is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Dialog title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description / prompt text shown above the control.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub const fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Checks the descriptor on its own (key and options).
    pub(crate) fn validate(&self) -> Result<(), FormError> {
        if self.key.trim().is_empty() {
            return Err(FormError::EmptyKey);
        }
        if let QuestionKind::SingleSelect { options } = &self.kind {
            if options.is_empty() {
                return Err(FormError::NoOptions(self.key.clone()));
            }
        }
        Ok(())
    }
}
