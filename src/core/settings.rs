//! User settings: reply language and sentiment badge visibility.

use std::io;

use serde::{Deserialize, Serialize};

use crate::core::store::KvStore;

const LANGUAGE_KEY: &str = "language";
const SHOW_SENTIMENT_KEY: &str = "show_sentiment";

/// Language the assistant answers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Assamese,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Assamese => "assamese",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Assamese,
            Language::Assamese => Language::English,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "english" => Some(Language::English),
            "assamese" => Some(Language::Assamese),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub language: Language,
    pub show_sentiment: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::English,
            show_sentiment: true,
        }
    }
}

/// Load settings from the store. Missing or unreadable values fall back to
/// the defaults, so a damaged store never prevents startup.
pub fn load(store: &dyn KvStore) -> Settings {
    let defaults = Settings::default();
    Settings {
        language: store
            .get(LANGUAGE_KEY)
            .and_then(|s| Language::parse(&s))
            .unwrap_or(defaults.language),
        show_sentiment: store
            .get(SHOW_SENTIMENT_KEY)
            .map(|s| s.trim() != "false")
            .unwrap_or(defaults.show_sentiment),
    }
}

/// Persist settings to the store.
pub fn save(store: &dyn KvStore, settings: &Settings) -> io::Result<()> {
    store.set(LANGUAGE_KEY, settings.language.as_str())?;
    store.set(
        SHOW_SENTIMENT_KEY,
        if settings.show_sentiment {
            "true"
        } else {
            "false"
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryStore;

    #[test]
    fn load_from_empty_store_gives_defaults() {
        let store = MemoryStore::default();
        let settings = load(&store);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::default();
        let settings = Settings {
            language: Language::Assamese,
            show_sentiment: false,
        };
        save(&store, &settings).expect("save");
        assert_eq!(load(&store), settings);
    }

    #[test]
    fn garbage_language_falls_back_to_default() {
        let store = MemoryStore::default();
        store.set("language", "klingon").expect("set");
        assert_eq!(load(&store).language, Language::English);
    }

    #[test]
    fn toggled_flips_language() {
        assert_eq!(Language::English.toggled(), Language::Assamese);
        assert_eq!(Language::Assamese.toggled(), Language::English);
    }
}
