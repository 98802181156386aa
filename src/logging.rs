//! # Logging
//!
//! Dialogs own the terminal while a form runs, so log lines cannot go to the
//! screen. With `log_file` configured they are appended there; otherwise
//! `RUST_LOG` turns on logging to stderr. With neither, nothing is logged.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fs::OpenOptions, io, path::Path, sync::Mutex};

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::{config::Config, constants::LOG_ENV_VAR};

/// Installs the global subscriber according to `config`.
pub fn init(config: &Config) -> Result<()> {
    if let Some(path) = config.log_file() {
        return init_file(&path, config.log_level());
    }

    if std::env::var_os(LOG_ENV_VAR).is_some() {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .with_context(|| format!("Invalid {LOG_ENV_VAR} filter"))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;
    }

    Ok(())
}

fn init_file(path: &Path, level: &str) -> Result<()> {
    let filter = file_filter(level)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

/// Parses the configured `log_level` as an `EnvFilter` directive.
fn file_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("Invalid log_level '{level}'"))
}
