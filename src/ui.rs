//! # UI Utilities
//!
//! Plain terminal output used around the dialogs: status lines and
//! answer listings printed after the terminal has been restored.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::{
    constants::UI_VALUE_TRUNCATE_LEN,
    form::{Form, FormResult},
};

// =============================================================================
// Status Messages
// =============================================================================

/// Prints a success message.
///
/// Format: `✓ {message}`
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints warnings with yellow prefix.
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {}", "warning:".yellow(), warning);
    }
}

/// Prints the cancellation notice on stderr.
pub fn print_cancelled(what: &str) {
    eprintln!("{} {}", "cancelled:".yellow(), what);
}

// =============================================================================
// Answer Output
// =============================================================================

/// Title and display value of every answer, in question order.
pub fn answer_rows(form: &Form, result: &FormResult) -> Vec<(String, String)> {
    form.questions()
        .iter()
        .filter_map(|question| {
            result.get(question.key()).map(|answer| {
                (
                    question.title().to_string(),
                    truncate(&answer.to_string(), UI_VALUE_TRUNCATE_LEN),
                )
            })
        })
        .collect()
}

/// Prints answers as an aligned two-column list.
pub fn print_answers(form: &Form, result: &FormResult) {
    let rows = answer_rows(form, result);
    let width = rows
        .iter()
        .map(|(title, _)| title.chars().count())
        .max()
        .unwrap_or(0);

    for (title, value) in rows {
        println!("  {}  {}", format!("{title:<width$}").bold(), value);
    }
}

/// Prints answers as a JSON object keyed by question key.
pub fn print_json(result: &FormResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("Failed to serialize answers")?;
    println!("{json}");
    Ok(())
}

// =============================================================================
// String Utilities
// =============================================================================

/// Truncates a string to the specified maximum length in characters,
/// adding an ellipsis if truncated.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
