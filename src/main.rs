//! # tuiform CLI
//!
//! Command-line interface for the tuiform interactive form runner.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use tuiform::{
    commands::{self, DemoArgs, SetupArgs},
    logging, Config,
};

const GLOBAL_HELP: &str = "\
Configuration File:
  ~/.config/tuiform/config    Accent color, progress display, logging

Dialog Keys:
  Enter          Confirm (or press the highlighted button)
  Esc, Ctrl+C    Cancel the whole form
  Tab            Move between the control and the buttons
  Space          Select / toggle a list option
  y, n           Answer a confirmation

Getting Started:
  tuiform setup                 Create the config file
  tuiform demo                  Run the sample survey
  tuiform demo --json           Run it and print answers as JSON

Learn more:
  tuiform <COMMAND> --help      Show detailed help for a command";

#[derive(Parser)]
#[command(name = "tuiform")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Interactive terminal forms: text, radio, checkbox and confirm dialogs")]
#[command(
    long_about = "tuiform runs forms in the terminal. A form is an ordered list of questions \
(free text, single choice, multiple choice, yes/no), each shown as a modal dialog. \
Answers are collected in question order; cancelling any dialog discards the whole form."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sample survey
    #[command(
        long_about = "Run a sample survey that uses every question kind.\n\n\
Asks for a name, an experience level (single choice), interests (multiple choice), \
an age (digits only) and a newsletter confirmation, then prints the answers.\n\n\
Cancelling any question prints a notice and exits successfully without answers.",
        after_help = "Examples:\n  \
tuiform demo                  Print answers as a list\n  \
tuiform demo --json           Print answers as a JSON object"
    )]
    Demo {
        /// Print answers as JSON
        #[arg(long, help = "Print answers as a JSON object keyed by question key")]
        json: bool,
    },

    /// Add or subtract two numbers
    #[command(
        long_about = "Add or subtract two numbers.\n\n\
Both number fields accept digits only. Empty or oversized numbers are rejected \
and the form is offered again.",
        after_help = "Examples:\n  \
tuiform calc                  Prints e.g. \"2 + 40 = 42\""
    )]
    Calc,

    /// Create or repair the configuration file
    #[command(
        long_about = "Create the global configuration file with commented defaults.\n\n\
If the file already exists it is checked: unknown fields are removed and missing \
fields are added with their defaults.",
        after_help = "Examples:\n  \
tuiform setup                       Create or repair the config\n  \
tuiform setup --completions         Also install shell completions\n  \
tuiform setup --shell zsh           Install zsh completions"
    )]
    Setup {
        /// Also install shell completions
        #[arg(long, help = "Install completions for the detected shell")]
        completions: bool,

        /// Shell to install completions for
        #[arg(long, value_enum, help = "Install completions for this shell")]
        shell: Option<Shell>,
    },

    /// Generate shell completions
    #[command(
        after_help = "Examples:\n  \
tuiform completions zsh > ~/.zfunc/_tuiform\n  \
tuiform completions bash > ~/.local/share/bash-completion/completions/tuiform"
    )]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { json } => {
            let config = load_config()?;
            commands::demo(DemoArgs { json }, &config)
        }

        Commands::Calc => {
            let config = load_config()?;
            commands::calc(&config)
        }

        Commands::Setup { completions, shell } => {
            commands::setup(SetupArgs { completions, shell }, &mut Cli::command())
        }

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}

/// Loads the config and starts logging before any dialog opens.
fn load_config() -> Result<Config> {
    let config = Config::load()?;
    logging::init(&config)?;
    Ok(config)
}
