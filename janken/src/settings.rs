//! Host-provided settings and the holder they are swapped through.

use std::{
    env,
    sync::{Arc, PoisonError, RwLock},
};

use crate::game::constants::{DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};

/// Settings the host hands over on every configuration change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Slash command that starts a game
    pub trigger: String,

    /// Locale for games created without an explicit language
    pub default_language: String,
}

impl Settings {
    /// Create settings from environment variables
    ///
    /// Expected environment variables:
    /// - `JANKEN_TRIGGER`: command trigger (default: `janken`)
    /// - `JANKEN_DEFAULT_LANGUAGE`: default locale (default: `en`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            trigger: env::var("JANKEN_TRIGGER")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.trigger),
            default_language: env::var("JANKEN_DEFAULT_LANGUAGE")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.default_language),
        }
    }

    pub fn is_supported_language(language: &str) -> bool {
        SUPPORTED_LANGUAGES.contains(&language)
    }

    /// The configured default locale, or `en` if it isn't supported.
    pub fn default_language_tag(&self) -> &str {
        if Self::is_supported_language(&self.default_language) {
            &self.default_language
        } else {
            DEFAULT_LANGUAGE
        }
    }

    /// Locale for a new game: the requested one when supported, the
    /// default otherwise.
    pub fn language_for(&self, requested: Option<&str>) -> &str {
        match requested {
            Some(language) if Self::is_supported_language(language) => {
                SUPPORTED_LANGUAGES
                    .iter()
                    .copied()
                    .find(|supported| *supported == language)
                    .unwrap_or(DEFAULT_LANGUAGE)
            }
            _ => self.default_language_tag(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trigger: "janken".to_string(),
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Shared, replaceable settings
#[derive(Debug, Default)]
pub struct SettingsCell {
    current: RwLock<Arc<Settings>>,
}

impl SettingsCell {
    pub fn new(settings: Settings) -> Self {
        Self {
            current: RwLock::new(Arc::new(settings)),
        }
    }

    /// Snapshot of the current settings.
    pub fn get(&self) -> Arc<Settings> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }

    /// Swap in new settings.
    ///
    /// # Panics
    ///
    /// Panics if `settings` is the very allocation already installed. That
    /// only happens when a caller mutated the live settings instead of
    /// building a new value.
    pub fn replace(&self, settings: Arc<Settings>) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        assert!(
            !Arc::ptr_eq(&current, &settings),
            "settings replaced with the existing settings"
        );
        *current = settings;
    }
}
