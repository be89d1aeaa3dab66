//! Subcommand handlers.

pub mod about;
pub mod config;
pub mod filler;
pub mod lang;
pub mod run;

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use entity::cli::Cli;
use entity::language::LanguageStore;
use entity::tui::{theme_or_default, Theme};
use entity::{Config, Language};

/// Settings resolved from the command line and the config file.
#[derive(Debug)]
pub struct Context {
    pub config_path: PathBuf,
    pub config: Config,
    /// `--lang` override, if given.
    pub lang_override: Option<Language>,
    pub seed: Option<u64>,
    pub no_sound: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::config_path()?,
        };
        let config = Config::load_from(&config_path)
            .with_context(|| format!("Could not load {}", config_path.display()))?;
        Ok(Self {
            config_path,
            seed: cli.seed.or(config.typewriter.seed),
            config,
            lang_override: cli.lang,
            no_sound: cli.no_sound,
        })
    }

    /// Persisted language store for this config file.
    pub fn language_store(&self) -> LanguageStore {
        LanguageStore::load(self.config_path.clone())
    }

    /// Language for this run: `--lang`, then the stored choice, then the locale.
    pub fn language(&self) -> Language {
        self.lang_override
            .or(self.config.language)
            .unwrap_or_else(Language::detect)
    }

    /// Theme named by `[ui] theme`.
    pub fn theme(&self) -> Theme {
        theme_or_default(&self.config.ui.theme)
    }
}
