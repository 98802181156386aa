//! # Configuration
//!
//! User configuration (~/.config/tuiform/config) and the values derived from it.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;

use std::path::PathBuf;

use anyhow::{Context, Result};

pub use self::global::{home_dir, set_home_override, ConfigValidation, GlobalConfig};
use crate::tui::theme::Theme;

/// Loaded configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
}

impl Config {
    /// Loads the global configuration (defaults if the file is missing)
    pub fn load() -> Result<Self> {
        let global = GlobalConfig::load()?;
        Ok(Self { global })
    }

    /// Dialog theme from the configured colors
    pub fn theme(&self) -> Result<Theme> {
        let theme = Theme::with_accent(&self.global.accent_color).with_context(|| {
            format!(
                "Check accent_color in {}",
                GlobalConfig::path().map_or_else(
                    || "the global config".to_string(),
                    |p| p.display().to_string()
                )
            )
        })?;
        Ok(theme.with_progress(self.global.show_progress))
    }

    /// Log file path, with a leading `~/` expanded
    pub fn log_file(&self) -> Option<PathBuf> {
        let raw = self.global.log_file.as_deref()?;
        match raw.strip_prefix("~/") {
            Some(rest) => home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(raw)),
        }
    }

    pub fn log_level(&self) -> &str {
        &self.global.log_level
    }
}
