//! # tuiform
//!
//! Interactive terminal forms built from a sequence of questions.
//!
//! A form is declared with [`FormBuilder`] and run as a series of modal
//! dialogs, one per question. Answers come back as a [`FormResult`] keyed by
//! question key, or not at all if the user cancels.
//!
//! ## Features
//!
//! - **Question kinds**: free text (optionally filtered), radio list,
//!   checkbox list, yes/no confirmation
//! - **All or nothing**: cancelling any dialog discards the whole form
//! - **Headless runs**: [`tui::script::ScriptedSession`] drives forms from a
//!   list of key events for tests
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod form;
pub mod logging;
pub mod tui;
pub mod ui;

pub use config::{set_home_override, Config};
pub use form::{Answer, Form, FormBuilder, FormError, FormResult, InputFilter, Question};
