//! Internationalization: English and Brazilian Portuguese.
//!
//! - [`Language`] identifies the active language
//! - [`filler_fragments`] feeds the typewriter
//! - [`translations`] holds every other user-visible string

mod fillers;
mod translations;

pub use fillers::filler_fragments;
pub use translations::{
    translations, AboutStrings, ResponseTemplates, Translations, UiStrings, CREATOR_NAME,
    GITHUB_URL,
};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Environment variables consulted by [`Language::detect`], in priority order.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// A supported UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt-BR")]
    PtBr,
}

/// Unknown language code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown language '{0}' (expected 'en' or 'pt-BR')")]
pub struct LanguageParseError(pub String);

impl Language {
    /// Every supported language, in selector order.
    pub const ALL: [Language; 2] = [Language::En, Language::PtBr];

    /// Canonical code, also used in the config file.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::PtBr => "pt-BR",
        }
    }

    /// Two-letter label for the language selector.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::PtBr => "PT",
        }
    }

    /// The other language.
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::PtBr,
            Language::PtBr => Language::En,
        }
    }

    /// Map a locale tag (`pt_BR.UTF-8`, `pt-PT`, `en_US`, ...) to a language.
    ///
    /// Anything Portuguese maps to `pt-BR`, everything else to English.
    pub fn from_locale(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("pt") {
            Language::PtBr
        } else {
            Language::En
        }
    }

    /// Detect the language from the locale environment.
    ///
    /// Empty variables and the `C`/`POSIX` locales are skipped.
    pub fn detect() -> Self {
        Self::detect_with(|var| std::env::var(var).ok())
    }

    fn detect_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        LOCALE_VARS
            .iter()
            .filter_map(|var| lookup(var))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
            .map(|value| Self::from_locale(&value))
            .unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "english" => Ok(Language::En),
            "pt" | "pt-br" | "portuguese" => Ok(Language::PtBr),
            _ => Err(LanguageParseError(s.to_string())),
        }
    }
}
