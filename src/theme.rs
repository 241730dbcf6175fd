//! Light/dark theme preference and its persistence.
//!
//! The preference is a single key holding `"dark"` or `"light"`. Anything
//! else, including an absent key, reads as light. Persistence goes through
//! [`PreferenceStore`] so the browser `localStorage` binding and the
//! in-memory store used natively share the same controller.
//!
//! TRADE-OFFS
//! ==========
//! Store failures are reported to the caller but never change the in-memory
//! theme; the visual toggle still works when storage is unavailable.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored value. Only `"dark"` selects the dark theme.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Glyph shown on the toggle control: the theme a click switches to.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }
}

/// Error raised by a [`PreferenceStore`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("preference store: {0}")]
pub struct StoreError(pub String);

/// Key-value persistence for a single preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store; backs native use and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[cfg(test)]
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Current theme plus the store it is persisted to.
#[derive(Debug)]
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    key: String,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the persisted preference. An unreadable store yields the default
    /// theme together with the error.
    pub fn load(store: S, key: impl Into<String>) -> (Self, Option<StoreError>) {
        let key = key.into();
        let (theme, err) = match store.get(&key) {
            Ok(value) => (Theme::from_stored(value.as_deref()), None),
            Err(e) => (Theme::default(), Some(e)),
        };
        (Self { store, key, theme }, err)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flip the theme and persist it. The flip happens even if the write
    /// fails.
    pub fn toggle(&mut self) -> Result<Theme, StoreError> {
        self.theme = self.theme.toggled();
        self.store.set(&self.key, self.theme.as_stored())?;
        Ok(self.theme)
    }
}
