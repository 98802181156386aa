//! # Calc Command
//!
//! Two-number calculator. Asks for two operands and an operation, and asks
//! again when the input cannot be calculated.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt;

use anyhow::Result;
use thiserror::Error;
use tracing::warn;

use crate::{
    config::Config,
    form::{runner, Form, FormBuilder, FormError, FormResult, InputFilter},
    tui::terminal::TerminalSession,
    ui,
};

/// Input that cannot be calculated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("{0} is empty")]
    Empty(&'static str),

    #[error("{field} is not a valid number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("the result does not fit in a 64-bit integer")]
    Overflow,
}

/// Supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
}

impl Operation {
    pub const ALL: [Self; 2] = [Self::Add, Self::Subtract];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.label() == label)
    }

    /// `None` on overflow.
    pub const fn apply(self, left: i64, right: i64) -> Option<i64> {
        match self {
            Self::Add => left.checked_add(right),
            Self::Subtract => left.checked_sub(right),
        }
    }
}

/// A finished calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculation {
    pub left: i64,
    pub operation: Operation,
    pub right: i64,
    pub value: i64,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left,
            self.operation.symbol(),
            self.right,
            self.value
        )
    }
}

/// The calculator form.
pub fn form() -> Result<Form, FormError> {
    FormBuilder::new()
        .filtered_text_input("left", "Num 1", "First number", InputFilter::digits())
        .filtered_text_input("right", "Num 2", "Second number", InputFilter::digits())
        .radio_list(
            "operation",
            "Operation",
            "What should be done with the numbers?",
            Operation::ALL.map(Operation::label),
        )
        .build()
}

fn parse_operand(field: &'static str, value: Option<&str>) -> Result<i64, CalcError> {
    let value = value.unwrap_or_default().trim();
    if value.is_empty() {
        return Err(CalcError::Empty(field));
    }
    value.parse().map_err(|_| CalcError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Calculates the answers of [`form`].
pub fn calculate(result: &FormResult) -> Result<Calculation, CalcError> {
    let left = parse_operand("Num 1", result.get_string("left"))?;
    let right = parse_operand("Num 2", result.get_string("right"))?;
    let label = result.get_string("operation").unwrap_or_default();
    let operation =
        Operation::from_label(label).ok_or_else(|| CalcError::UnknownOperation(label.to_string()))?;
    let value = operation
        .apply(left, right)
        .ok_or(CalcError::Overflow)?;

    Ok(Calculation {
        left,
        operation,
        right,
        value,
    })
}

fn retry_form(err: &CalcError) -> Result<Form, FormError> {
    FormBuilder::new()
        .confirmation("retry", "Invalid input", format!("{err}. Try again?"))
        .build()
}

/// Executes the calc command.
pub fn execute(config: &Config) -> Result<()> {
    let theme = config.theme()?;
    let form = form()?;

    // One terminal session across retries
    let mut session = TerminalSession::acquire()?;
    let calculation = loop {
        let Some(answers) = runner::run(&form, &mut session, &theme)? else {
            drop(session);
            ui::print_cancelled("calculation");
            return Ok(());
        };

        match calculate(&answers) {
            Ok(calculation) => break calculation,
            Err(err) => {
                warn!(%err, "Rejected calculator input");
                if runner::run(&retry_form(&err)?, &mut session, &theme)?.is_none() {
                    drop(session);
                    ui::print_cancelled("calculation");
                    return Ok(());
                }
            }
        }
    };
    session.close()?;

    println!("{calculation}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Answer;
    use indexmap::IndexMap;

    fn answers(left: &str, right: &str, operation: &str) -> FormResult {
        let mut map = IndexMap::new();
        map.insert("left".to_string(), Answer::Text(left.to_string()));
        map.insert("right".to_string(), Answer::Text(right.to_string()));
        map.insert("operation".to_string(), Answer::Text(operation.to_string()));
        FormResult::new(map)
    }

    #[test]
    fn test_add_and_subtract() {
        assert_eq!(calculate(&answers("2", "40", "Add")).unwrap().value, 42);
        let calc = calculate(&answers("2", "40", "Subtract")).unwrap();
        assert_eq!(calc.value, -38);
        assert_eq!(calc.to_string(), "2 - 40 = -38");
    }

    #[test]
    fn test_empty_operand() {
        assert_eq!(
            calculate(&answers("", "1", "Add")),
            Err(CalcError::Empty("Num 1"))
        );
    }

    #[test]
    fn test_operand_too_large() {
        let err = calculate(&answers("1", "99999999999999999999", "Add")).unwrap_err();
        assert!(matches!(err, CalcError::InvalidNumber { field: "Num 2", .. }));
    }

    #[test]
    fn test_overflow() {
        let max = i64::MAX.to_string();
        assert_eq!(calculate(&answers(&max, "1", "Add")), Err(CalcError::Overflow));
    }

    #[test]
    fn test_unknown_operation() {
        assert_eq!(
            calculate(&answers("1", "1", "Multiply")),
            Err(CalcError::UnknownOperation("Multiply".to_string()))
        );
    }

    #[test]
    fn test_form_shape() {
        let form = form().unwrap();
        assert_eq!(form.len(), 3);
        assert_eq!(Operation::from_label("Subtract"), Some(Operation::Subtract));
    }
}
