//! # Setup Command
//!
//! One-time setup for tuiform: creates (or repairs) the global config and
//! optionally installs shell completions.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Command;
use clap_complete::Shell;
use owo_colors::OwoColorize;

use super::completions::generate_to_string;
use crate::{
    config::{home_dir, Config, GlobalConfig},
    constants::{
        BASH_COMPLETIONS_DIR, BIN_NAME, ELVISH_COMPLETIONS_DIR, FISH_COMPLETIONS_DIR,
        ZSH_COMPLETIONS_DIR,
    },
    form::FormBuilder,
    ui,
};

/// Shells offered when `$SHELL` is not recognized.
const SHELLS: [(&str, Shell); 5] = [
    ("zsh", Shell::Zsh),
    ("bash", Shell::Bash),
    ("fish", Shell::Fish),
    ("elvish", Shell::Elvish),
    ("powershell", Shell::PowerShell),
];

/// Arguments for the setup command
#[derive(Debug, Clone, Copy, Default)]
pub struct SetupArgs {
    /// Also install shell completions
    pub completions: bool,
    /// Shell to install completions for (detected when absent)
    pub shell: Option<Shell>,
}

/// Executes the setup command.
///
/// The `cmd` parameter should be a clone of the CLI command for generating completions.
pub fn execute(args: SetupArgs, cmd: &mut Command) -> Result<()> {
    eprintln!("{}\n", "Setting up tuiform...".bold());

    setup_global_config()?;

    if args.completions || args.shell.is_some() {
        setup_completions(cmd, args.shell)?;
    }

    eprintln!("\n{} Setup complete!", "✓".green().bold());
    Ok(())
}

/// Creates the global config file, or repairs an existing one.
fn setup_global_config() -> Result<()> {
    let path = GlobalConfig::path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    if GlobalConfig::create_default_if_missing()? {
        eprintln!("{} Created global config: {}", "✓".green(), path.display());
        return Ok(());
    }

    let validation = GlobalConfig::update_if_needed()?;
    if validation.has_changes() {
        let mut warnings: Vec<String> = validation
            .invalid
            .iter()
            .map(|field| format!("removed unknown field '{field}'"))
            .collect();
        warnings.extend(
            validation
                .missing
                .iter()
                .map(|field| format!("added missing field '{field}' with its default")),
        );
        ui::print_warnings(&warnings);
        eprintln!("{} Updated global config: {}", "✓".green(), path.display());
    } else {
        eprintln!(
            "{} Global config already exists: {}",
            "✓".green(),
            path.display()
        );
    }

    Ok(())
}

/// Maps a `$SHELL` value like `/bin/zsh` or `-bash` to a shell.
fn shell_from_path(shell_path: &str) -> Option<Shell> {
    let name = shell_path.rsplit('/').next().unwrap_or(shell_path);
    // Login shells are reported with a leading dash
    let name = name.strip_prefix('-').unwrap_or(name);
    match name {
        "pwsh" => Some(Shell::PowerShell),
        _ => SHELLS
            .iter()
            .find(|(label, _)| *label == name)
            .map(|(_, shell)| *shell),
    }
}

/// Detects the user's shell, or asks with a radio list.
///
/// Returns `None` if the question is cancelled.
fn detect_or_prompt_shell() -> Result<Option<Shell>> {
    if let Some(shell) = env::var("SHELL").ok().as_deref().and_then(shell_from_path) {
        return Ok(Some(shell));
    }

    let theme = Config::load()?.theme()?;
    let form = FormBuilder::new()
        .radio_list(
            "shell",
            "Shell",
            "Which shell do you use?",
            SHELLS.map(|(label, _)| label),
        )
        .build()?;

    let shell = form
        .run(&theme)?
        .and_then(|result| result.get_string("shell").and_then(shell_from_path));
    Ok(shell)
}

/// Returns the completion file path for each shell
fn completion_path(shell: Shell) -> Option<PathBuf> {
    let home = home_dir()?;

    match shell {
        Shell::Zsh => Some(home.join(ZSH_COMPLETIONS_DIR).join(format!("_{BIN_NAME}"))),
        Shell::Bash => Some(home.join(BASH_COMPLETIONS_DIR).join(BIN_NAME)),
        Shell::Fish => Some(home.join(FISH_COMPLETIONS_DIR).join(format!("{BIN_NAME}.fish"))),
        Shell::Elvish => Some(home.join(ELVISH_COMPLETIONS_DIR).join(format!("{BIN_NAME}.elv"))),
        // PowerShell doesn't have a standard auto-load directory
        _ => None,
    }
}

/// Sets up shell completions for the specified or detected shell.
fn setup_completions(cmd: &mut Command, shell_override: Option<Shell>) -> Result<()> {
    let shell = match shell_override {
        Some(s) => s,
        None => match detect_or_prompt_shell()? {
            Some(s) => s,
            None => {
                ui::print_cancelled("completions not installed");
                return Ok(());
            }
        },
    };

    let Some(install_path) = completion_path(shell) else {
        eprintln!("\n  {} Manual setup required for {:?}", "→".cyan(), shell);
        eprintln!(
            "    Run: {} {} > <completions-file>",
            format!("{BIN_NAME} completions").green(),
            format!("{shell:?}").to_lowercase().cyan()
        );
        return Ok(());
    };

    if let Some(parent) = install_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(&install_path, generate_to_string(shell, cmd))
        .with_context(|| format!("Failed to write completions: {}", install_path.display()))?;

    eprintln!(
        "{} Installed {} completions: {}",
        "✓".green(),
        format!("{shell:?}").to_lowercase(),
        install_path.display()
    );

    if shell == Shell::Zsh {
        eprintln!(
            "\n  {} To enable completions, add to ~/.zshrc:\n    {}",
            "→".cyan(),
            "fpath=(~/.zfunc $fpath) && autoload -Uz compinit && compinit".dimmed()
        );
    }

    Ok(())
}
