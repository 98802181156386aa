//! # Test Harness
//!
//! Provides utilities for integration testing tuiform without affecting user configuration.
//! Uses thread-local storage instead of environment variables to avoid any interference
//! with the user's shell environment.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{fs, path::PathBuf, sync::Mutex};

use anyhow::Result;
use crossterm::event::KeyCode;
use tempfile::TempDir;

// Re-export from library - this is the mechanism for test isolation
use tuiform::{
    form::{runner, Form, FormResult, QuestionKind},
    set_home_override,
    tui::{
        event::TuiEvent,
        script::{key, ScriptedSession},
        theme::Theme,
    },
};

/// Global lock to ensure tests touching the config run sequentially.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment with a temporary "home" directory for the global config.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/tuiform/config)
    pub home_dir: TempDir,
    /// Guard for the test lock
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment.
    ///
    /// Uses thread-local storage to redirect global config (no env var modification).
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        set_home_override(Some(home_dir.path().to_path_buf()));

        Self {
            home_dir,
            test_guard,
        }
    }

    /// Returns the path where global config would be stored.
    pub fn global_config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("tuiform")
            .join("config")
    }

    /// Creates a global config file with the given content.
    pub fn write_global_config(&self, content: &str) {
        let path = self.global_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create global config directory");
        }
        fs::write(path, content).expect("Failed to write global config");
    }

    /// Reads the global config file content.
    pub fn read_global_config(&self) -> String {
        fs::read_to_string(self.global_config_path()).unwrap_or_default()
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        // Clear the thread-local home override
        set_home_override(None);
    }
}

// =============================================================================
// Config Builder Helpers
// =============================================================================

/// Builder for creating test configurations.
#[derive(Default)]
pub struct GlobalConfigBuilder {
    lines: Vec<String>,
}

impl GlobalConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accent_color(mut self, color: &str) -> Self {
        self.lines.push(format!("accent_color = \"{color}\""));
        self
    }

    pub fn show_progress(mut self, show: bool) -> Self {
        self.lines.push(format!("show_progress = {show}"));
        self
    }

    pub fn log_file(mut self, path: &str) -> Self {
        self.lines.push(format!("log_file = \"{path}\""));
        self
    }

    pub fn log_level(mut self, level: &str) -> Self {
        self.lines.push(format!("log_level = \"{level}\""));
        self
    }

    /// Adds a raw `key = value` line (for unknown-field tests).
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn build(&self) -> String {
        self.lines.join("\n")
    }
}

// =============================================================================
// Scripted Runs
// =============================================================================

/// Key presses that confirm a question with its default answer.
pub fn accept(kind: &QuestionKind) -> Vec<TuiEvent> {
    match kind {
        QuestionKind::Confirm { .. } => vec![key(KeyCode::Char('y'))],
        _ => vec![key(KeyCode::Enter)],
    }
}

/// Key presses that confirm every question of `form` with defaults.
pub fn accept_all(form: &Form) -> Vec<TuiEvent> {
    form.questions()
        .iter()
        .flat_map(|q| accept(q.kind()))
        .collect()
}

/// Outcome of a scripted run.
pub struct Run {
    pub result: Result<Option<FormResult>>,
    /// How often the session was released
    pub releases: usize,
}

/// Runs `form` on a headless session replaying `events`.
pub fn run_scripted(form: &Form, events: Vec<TuiEvent>) -> Run {
    let session = ScriptedSession::new(events).expect("Failed to create scripted session");
    let counter = session.release_counter();
    let result = runner::run(form, session, &Theme::default());
    Run {
        result,
        releases: counter.count(),
    }
}
