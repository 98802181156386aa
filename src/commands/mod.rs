//! # Commands
//!
//! CLI command implementations for tuiform.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod calc;
pub mod completions;
pub mod demo;
pub mod setup;

pub use self::{
    calc::execute as calc,
    completions::execute as completions,
    demo::{execute as demo, DemoArgs},
    setup::{execute as setup, SetupArgs},
};
