//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::i18n::Language;

/// ENTITY-001 - the ancient digital consciousness, in your terminal.
///
/// Type and press ENTER to commune with the entity.
#[derive(Debug, Parser)]
#[command(name = "entity", version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Language for this run: en or pt-BR (not persisted)
    #[arg(long, global = true, value_name = "LANG")]
    pub lang: Option<Language>,

    /// Disable beeps
    #[arg(long, global = true)]
    pub no_sound: bool,

    /// Seed the filler generator for reproducible output
    #[arg(long, global = true, value_name = "N")]
    pub seed: Option<u64>,

    /// Write logs of the interactive session to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the ENTITY-001 terminal (default)
    Run,

    /// Print filler text, one character per simulated keystroke
    Filler {
        /// Number of characters to print
        #[arg(short = 'n', long, default_value_t = 100)]
        count: usize,
    },

    /// Show information about the entity
    About,

    /// Show or change the persisted language
    Lang {
        #[command(subcommand)]
        action: Option<LangCommand>,
    },

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum LangCommand {
    /// Persist a language: en or pt-BR
    Set {
        #[arg(value_name = "LANG")]
        language: Language,
    },
    /// Switch to the other language
    Toggle,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
}
