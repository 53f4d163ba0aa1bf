use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::local::{LocalStore, THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemePreference::Light => write!(f, "light"),
            ThemePreference::Dark => write!(f, "dark"),
        }
    }
}

/// The stored theme, or [`ThemePreference::Light`] when none is stored.
///
/// # Errors
///
/// Returns [`StoreError`] if the stored value cannot be read or parsed.
pub fn load_theme(store: &LocalStore) -> Result<ThemePreference, StoreError> {
    Ok(store.get(THEME_KEY)?.unwrap_or_default())
}

/// # Errors
///
/// Returns [`StoreError`] if the value cannot be written.
pub fn save_theme(store: &LocalStore, theme: ThemePreference) -> Result<(), StoreError> {
    store.set(THEME_KEY, &theme)
}
