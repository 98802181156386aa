//! Errors raised while defining a form.

use thiserror::Error;

/// A form definition that cannot be run.
///
/// Runtime failures (terminal, I/O) are reported through `anyhow` by the runner;
/// this type only covers mistakes in the question list itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Two questions share the same answer key.
    #[error("duplicate question key '{0}'")]
    DuplicateKey(String),

    /// A question was added with an empty (or whitespace-only) key.
    #[error("question key must not be empty")]
    EmptyKey,

    /// A single-select question has nothing to select.
    #[error("question '{0}' has no options to choose from")]
    NoOptions(String),

    /// The input filter pattern is not a valid regular expression.
    #[error("invalid input filter '{pattern}': {reason}")]
    InvalidFilter { pattern: String, reason: String },
}
