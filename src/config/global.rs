//! # Global Configuration
//!
//! Handles the user configuration stored at `~/.config/tuiform/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ACCENT_COLOR, DEFAULT_LOG_LEVEL, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME,
};

/// Valid field names in the global config file.
/// Used for validation to detect unknown/invalid fields.
const VALID_FIELDS: &[&str] = &["accent_color", "show_progress", "log_file", "log_level"];

/// Fields that should be present with actual values (have meaningful defaults).
/// `log_file` is optional and stays commented when not set.
const REQUIRED_FIELDS: &[&str] = &["accent_color", "show_progress", "log_level"];

/// Result of validating a config file.
#[derive(Debug, Default)]
pub struct ConfigValidation {
    /// Fields that were missing and have been added with defaults
    pub missing: Vec<String>,
    /// Fields that were unrecognized and have been removed
    pub invalid: Vec<String>,
}

impl ConfigValidation {
    /// Returns true if any changes were made to the config.
    pub fn has_changes(&self) -> bool {
        !self.missing.is_empty() || !self.invalid.is_empty()
    }
}

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// The user's home directory, honoring the thread-local override.
pub fn home_dir() -> Option<PathBuf> {
    get_home_override().or_else(dirs::home_dir)
}

/// Global configuration stored at ~/.config/tuiform/config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Accent color for focused borders and highlights
    /// (name like "cyan" or hex like "#00afff")
    #[serde(default = "default_accent_color")]
    pub accent_color: String,

    /// Whether dialogs show "n/N" progress in their border
    #[serde(default = "default_true")]
    pub show_progress: bool,

    /// File that receives log output while dialogs own the terminal
    #[serde(default)]
    pub log_file: Option<String>,

    /// Log filter used with `log_file` (e.g. "info", "tuiform=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            show_progress: true,
            log_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_true() -> bool {
    true
}

fn default_accent_color() -> String {
    DEFAULT_ACCENT_COLOR.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/tuiform/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join(GLOBAL_CONFIG_FILENAME))
    }

    /// Returns the path to the global config directory (~/.config/tuiform)
    pub fn dir() -> Option<PathBuf> {
        // Use $HOME/.config for XDG compliance (not dirs::config_dir which varies by OS)
        home_dir().map(|home| home.join(".config").join(GLOBAL_CONFIG_DIR))
    }

    /// Loads the global config, falling back to defaults when the file
    /// does not exist.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Loads a config file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))
    }

    /// Creates the global config with default values and comments.
    /// Used by `tuiform setup`. Returns true if created, false if already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine config directory");
        };

        if path.exists() {
            return Ok(false);
        }

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        Self::save_with_comments(&path, &Self::default())?;
        Ok(true)
    }

    /// Saves config with detailed comments for all options.
    ///
    /// Required fields are always written with actual values.
    /// `log_file` is shown as a commented example when not set.
    fn save_with_comments(path: &Path, config: &Self) -> Result<()> {
        let log_file_line = config.log_file.as_ref().map_or_else(
            || "# log_file = \"/tmp/tuiform.log\"".to_string(),
            |v| format!("log_file = \"{v}\""),
        );

        let content = format!(
            r##"# tuiform Configuration
# Location: ~/.config/tuiform/config

# Accent color for focused borders, highlighted rows and key hints.
# Accepts color names ("cyan", "light-blue", "magenta") or hex values ("#00afff").
# Default: "{default_accent}"
accent_color = "{accent_color}"

# Whether each dialog shows its position in the form ("2/5") in the border.
# Default: true
show_progress = {show_progress}

# File that receives log output. Dialogs own the terminal while a form runs,
# so logs are only written when this is set (or RUST_LOG is set, to stderr).
{log_file_line}

# Log filter for log_file, in tracing's EnvFilter syntax.
# Examples: "info", "debug", "tuiform=trace"
# Default: "{default_level}"
log_level = "{log_level}"
"##,
            default_accent = DEFAULT_ACCENT_COLOR,
            accent_color = config.accent_color,
            show_progress = config.show_progress,
            log_file_line = log_file_line,
            default_level = DEFAULT_LOG_LEVEL,
            log_level = config.log_level,
        );

        fs::write(path, content)
            .with_context(|| format!("Failed to write global config: {}", path.display()))
    }

    /// Validates the global config file and returns any issues found.
    ///
    /// This parses the raw TOML to detect:
    /// - Unknown fields that should be removed
    /// - Missing fields (by comparing against what serde would produce)
    pub fn validate() -> Result<ConfigValidation> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if !path.exists() {
            anyhow::bail!("Global config not found");
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))?;

        let mut validation = ConfigValidation::default();

        for key in table.keys() {
            if !VALID_FIELDS.contains(&key.as_str()) {
                validation.invalid.push(key.clone());
            }
        }

        for &field in REQUIRED_FIELDS {
            if !table.contains_key(field) {
                validation.missing.push(field.to_string());
            }
        }

        Ok(validation)
    }

    /// Validates and updates the global config file if needed.
    ///
    /// This will:
    /// 1. Check for missing or invalid fields
    /// 2. If changes are needed, load the config (serde fills defaults), then re-save
    /// 3. Return a validation report of what changed
    pub fn update_if_needed() -> Result<ConfigValidation> {
        let validation = Self::validate()?;

        if !validation.has_changes() {
            return Ok(validation);
        }

        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        // Unknown fields are dropped by serde, missing ones get defaults
        let config = Self::load_from(&path)?;
        Self::save_with_comments(&path, &config)?;

        Ok(validation)
    }
}
