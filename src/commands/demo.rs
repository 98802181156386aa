//! # Demo Command
//!
//! Runs a sample survey that uses every question kind and prints the answers.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{
    config::Config,
    form::{Form, FormBuilder, FormError, FormResult, InputFilter},
    ui,
};

/// Experience levels offered by the survey.
pub const LEVELS: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

/// Interest topics offered by the survey.
pub const INTERESTS: [&str; 3] = ["Cloud", "Database", "AI/ML"];

/// Arguments for the demo command
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoArgs {
    /// Print answers as JSON instead of a list
    pub json: bool,
}

/// The sample survey.
pub fn survey() -> Result<Form, FormError> {
    FormBuilder::new()
        .text_input("name", "Name", "What should we call you?")
        .radio_list(
            "level",
            "Experience",
            "How much experience do you have?",
            LEVELS,
        )
        .checkbox_list(
            "interests",
            "Interests",
            "Which topics interest you? Space toggles, Enter confirms.",
            INTERESTS,
        )
        .filtered_text_input("age", "Age", "How old are you? (digits only)", InputFilter::digits())
        .yes_no("subscribe", "Newsletter", "Subscribe to the newsletter?")
        .build()
}

/// Closing line for a completed survey.
pub fn farewell(result: &FormResult) -> String {
    let name = result
        .get_string("name")
        .filter(|n| !n.trim().is_empty())
        .unwrap_or("stranger");
    if result.get_bool("subscribe") {
        format!("Thanks for subscribing, {name}!")
    } else {
        format!("Thanks, {name}!")
    }
}

/// Executes the demo command.
pub fn execute(args: DemoArgs, config: &Config) -> Result<()> {
    let theme = config.theme()?;
    let form = survey()?;

    let Some(result) = form.run(&theme)? else {
        ui::print_cancelled("survey not completed");
        return Ok(());
    };

    if args.json {
        return ui::print_json(&result);
    }

    ui::print_success("Survey complete");
    ui::print_answers(&form, &result);
    println!("\n{}", farewell(&result));
    Ok(())
}
