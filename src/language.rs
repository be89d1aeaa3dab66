//! Persisted language preference.
//!
//! The chosen language is stored under the `language` key of the config
//! file. Without a stored choice the locale environment decides.

use std::path::PathBuf;

use crate::config::{Config, ConfigError};
use crate::i18n::Language;

/// Language preference backed by the config file.
#[derive(Debug)]
pub struct LanguageStore {
    path: PathBuf,
    current: Language,
}

impl LanguageStore {
    /// Load the stored language from `path`, or detect it.
    ///
    /// An unreadable config file is logged and treated as "nothing stored".
    pub fn load(path: PathBuf) -> Self {
        let stored = match Config::load_from(&path) {
            Ok(config) => config.language,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable config for language");
                None
            }
        };
        let current = stored.unwrap_or_else(Language::detect);
        tracing::debug!(language = %current, stored = stored.is_some(), "Loaded language");
        Self { path, current }
    }

    /// Store backed by the default config location.
    pub fn load_default() -> Result<Self, ConfigError> {
        Ok(Self::load(Config::config_path()?))
    }

    pub fn get(&self) -> Language {
        self.current
    }

    /// Switch language and persist the choice.
    ///
    /// The in-memory value changes even if writing the file fails.
    pub fn set_language(&mut self, lang: Language) -> Result<(), ConfigError> {
        self.current = lang;
        let mut config = Config::load_from(&self.path)?;
        config.language = Some(lang);
        config.save_to(&self.path)?;
        tracing::info!(language = %lang, "Language changed");
        Ok(())
    }

    /// Flip to the other language and persist it.
    pub fn toggle(&mut self) -> Result<Language, ConfigError> {
        let next = self.current.toggle();
        self.set_language(next)?;
        Ok(next)
    }
}
