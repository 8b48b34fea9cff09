//! Light/dark theme toggle.
//!
//! The preference lives in a [`PreferenceStore`] under one key as the literal
//! strings `"true"`/`"false"`. [`ThemeToggle`] holds the current theme and
//! turns it into body-class and icon [`Patch`]es; the page applies them.
//!
//! TRADE-OFFS
//! ==========
//! An unavailable store (private browsing, denied storage) reads as "no
//! preference" and drops writes. The toggle still works for the page view.

use std::collections::HashMap;

use crate::config::UiConfig;
use crate::render::{Patch, Target};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Key-value preference storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, used when no browser storage exists.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// `window.localStorage`, if the browser grants it.
#[cfg(feature = "hydrate")]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().unwrap_or(None));
        if storage.is_none() {
            log::warn!("theme: localStorage unavailable, preference will not persist");
        }
        Self { storage }
    }
}

#[cfg(feature = "hydrate")]
impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).unwrap_or(None)
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("theme: failed to persist {key}: {err:?}");
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored flag. Only the exact string `"true"` means dark.
    pub fn from_stored(raw: Option<&str>) -> Self {
        if raw == Some("true") { Self::Dark } else { Self::Light }
    }

    /// The stored representation of this theme.
    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Light => "false",
            Self::Dark => "true",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// View model for the theme toggler.
#[derive(Clone, Debug)]
pub struct ThemeToggle {
    theme: Theme,
    storage_key: String,
    dark_class: String,
    light_icon: String,
    dark_icon: String,
}

impl ThemeToggle {
    /// Read the saved preference from `store`.
    pub fn load<S: PreferenceStore + ?Sized>(store: &S, config: &UiConfig) -> Self {
        let theme = Theme::from_stored(store.get(&config.theme_storage_key).as_deref());
        log::debug!("theme: loaded {theme:?}");
        Self {
            theme,
            storage_key: config.theme_storage_key.clone(),
            dark_class: config.dark_class.clone(),
            light_icon: config.light_icon.clone(),
            dark_icon: config.dark_icon.clone(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme, persist it, and return the patches for the new state.
    pub fn toggle<S: PreferenceStore + ?Sized>(&mut self, store: &mut S) -> Vec<Patch> {
        self.theme = self.theme.toggled();
        store.set(&self.storage_key, self.theme.as_stored());
        log::info!("theme: switched to {:?}", self.theme);
        self.patches()
    }

    /// Patches that make the body class and icon reflect the current theme.
    pub fn patches(&self) -> Vec<Patch> {
        let (from, to) = if self.theme.is_dark() {
            (&self.light_icon, &self.dark_icon)
        } else {
            (&self.dark_icon, &self.light_icon)
        };
        vec![
            Patch::class(Target::Body, &self.dark_class, self.theme.is_dark()),
            Patch::swap(Target::ThemeIcon, from, to),
        ]
    }
}
