//! App settings: theme and language over a key-value store.
//!
//! The store is a platform seam — each target supplies its own key-value
//! backend — so it is a trait object behind the [`Settings`] facade. Unknown
//! or missing stored values fall back to defaults rather than failing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uniflow_types::CoreResult;

const KEY_THEME: &str = "settings.theme_mode";
const KEY_LANGUAGE: &str = "settings.language_code";

/// Platform key-value storage for settings.
pub trait SettingsStore: Send + Sync {
    fn get_string(&self, key: &str) -> CoreResult<Option<String>>;
    fn put_string(&self, key: &str, value: &str) -> CoreResult<()>;
    fn remove(&self, key: &str) -> CoreResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Forgiving parse: anything unrecognized is the system default.
    #[must_use]
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            Some("dark") => Self::Dark,
            _ => Self::System,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageCode {
    #[default]
    Ko,
    En,
    Ja,
}

impl LanguageCode {
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    /// Forgiving parse: anything unrecognized is Korean.
    #[must_use]
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("en") => Self::En,
            Some("ja") => Self::Ja,
            _ => Self::Ko,
        }
    }
}

/// Typed facade over a [`SettingsStore`].
#[derive(Clone)]
pub struct Settings {
    store: Arc<dyn SettingsStore>,
}

impl Settings {
    #[must_use]
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub fn theme(&self) -> CoreResult<ThemeMode> {
        Ok(ThemeMode::from_value(
            self.store.get_string(KEY_THEME)?.as_deref(),
        ))
    }

    pub fn set_theme(&self, mode: ThemeMode) -> CoreResult<()> {
        self.store.put_string(KEY_THEME, mode.value())
    }

    pub fn language(&self) -> CoreResult<LanguageCode> {
        Ok(LanguageCode::from_value(
            self.store.get_string(KEY_LANGUAGE)?.as_deref(),
        ))
    }

    pub fn set_language(&self, code: LanguageCode) -> CoreResult<()> {
        self.store.put_string(KEY_LANGUAGE, code.value())
    }
}

/// Map-backed store for tests and targets without platform storage.
#[derive(Default)]
pub struct InMemorySettingsStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemorySettingsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        match self.values.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn get_string(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.values().get(key).cloned())
    }

    fn put_string(&self, key: &str, value: &str) -> CoreResult<()> {
        self.values().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.values().remove(key);
        Ok(())
    }
}
