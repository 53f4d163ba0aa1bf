//! Directory-backed key-value store. Each key is one JSON file,
//! `<dir>/<key>.json`.
//!
//! Writes go straight to the file with no locking: concurrent writers race
//! and whichever persisted last is what the next reader sees.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// Key holding the serialized cart.
pub const CART_KEY: &str = "cart";
/// Key holding the theme preference.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Opens (creating if needed) the store directory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::Io {
            path: dir.display().to_string(),
            source: e,
        })?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reads and deserializes `key`. An absent key is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidKey`] for keys outside `[a-z0-9_-]`.
    /// - [`StoreError::Io`] if the file exists but cannot be read.
    /// - [`StoreError::Deserialize`] if the contents do not parse as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.path_for(key)?;
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Io {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Deserialize {
                key: key.to_owned(),
                source: e,
            })
    }

    /// Serializes `value` and writes it under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidKey`] for keys outside `[a-z0-9_-]`.
    /// - [`StoreError::Serialize`] if `value` cannot be serialized.
    /// - [`StoreError::Io`] if the file cannot be written.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let body = serde_json::to_string(value).map_err(|e| StoreError::Serialize {
            key: key.to_owned(),
            source: e,
        })?;
        fs::write(&path, body.as_bytes()).map_err(|e| StoreError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        tracing::debug!(key, bytes = body.len(), "persisted local value");
        Ok(())
    }

    /// Deletes `key`. Returns `true` if a value was present.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidKey`] for keys outside `[a-z0-9_-]`.
    /// - [`StoreError::Io`] if the file exists but cannot be removed.
    pub fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(key, "removed local value");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::Io {
                path: path.display().to_string(),
                source: e,
            }),
        }
    }

    /// Whether a value is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.path_for(key).is_ok_and(|p| p.is_file())
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}
