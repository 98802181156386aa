//! Typed answers and the completed form result.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// One answer, tagged by the shape the question produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    /// Text input or single-select label.
    Text(String),
    /// Multi-select labels, in option order.
    List(Vec<String>),
    /// Confirmation.
    Bool(bool),
}

impl Answer {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::List(items) if items.is_empty() => f.write_str("(none)"),
            Self::List(items) => f.write_str(&items.join(", ")),
            Self::Bool(true) => f.write_str("yes"),
            Self::Bool(false) => f.write_str("no"),
        }
    }
}

/// Answers of a completed form, keyed by question key in question order.
///
/// Only produced when every question was answered; a cancelled run yields
/// no `FormResult` at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormResult {
    answers: IndexMap<String, Answer>,
}

impl FormResult {
    pub const fn new(answers: IndexMap<String, Answer>) -> Self {
        Self { answers }
    }

    /// Raw answer for `key`.
    pub fn get(&self, key: &str) -> Option<&Answer> {
        self.answers.get(key)
    }

    /// Text answer for `key`, `None` if absent or not text.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Answer::as_str)
    }

    /// List answer for `key`, `None` if absent or not a list.
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(Answer::as_list)
    }

    /// Boolean answer for `key`.
    ///
    /// Returns `false` when the key is absent, when the stored answer is
    /// `false`, and when the stored answer is not a boolean. Callers cannot
    /// tell "never asked" from "answered no"; use [`FormResult::get`] when
    /// that distinction matters.
    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key).and_then(Answer::as_bool).unwrap_or(false)
    }

    /// All answers in question order.
    pub const fn all(&self) -> &IndexMap<String, Answer> {
        &self.answers
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.answers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn into_inner(self) -> IndexMap<String, Answer> {
        self.answers
    }
}
