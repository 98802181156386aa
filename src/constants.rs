//! # Constants
//!
//! Centralized constants for magic values used throughout tuiform.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Dialogs
// =============================================================================

/// Narrowest popup, wide enough for the button row and hint line.
pub const DIALOG_MIN_WIDTH: u16 = 48;

/// Widest popup; longer prompts wrap.
pub const DIALOG_MAX_WIDTH: u16 = 76;

/// Columns kept free next to the title for the progress indicator.
pub const DIALOG_TITLE_RESERVE: usize = 12;

/// Rows shown by list dialogs before scrolling.
pub const LIST_MAX_VISIBLE_ROWS: usize = 10;

// =============================================================================
// UI Display
// =============================================================================

/// Maximum length for answer values in the summary listing.
pub const UI_VALUE_TRUNCATE_LEN: usize = 60;

// =============================================================================
// Configuration
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "tuiform";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

/// Accent color when none is configured.
pub const DEFAULT_ACCENT_COLOR: &str = "cyan";

/// Log filter for `log_file` when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable read for the stderr log filter.
pub const LOG_ENV_VAR: &str = "RUST_LOG";

// =============================================================================
// Shell Completion Paths
// =============================================================================

/// Binary name used for completion file names.
pub const BIN_NAME: &str = "tuiform";

/// Zsh custom completions directory (relative to home).
pub const ZSH_COMPLETIONS_DIR: &str = ".zfunc";

/// Bash completions directory (relative to home).
pub const BASH_COMPLETIONS_DIR: &str = ".local/share/bash-completion/completions";

/// Fish completions directory (relative to home).
pub const FISH_COMPLETIONS_DIR: &str = ".config/fish/completions";

/// Elvish completions directory (relative to home).
pub const ELVISH_COMPLETIONS_DIR: &str = ".config/elvish/lib";
