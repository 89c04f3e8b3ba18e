// SPDX-License-Identifier: MPL-2.0
//! File-backed preference storage using TOML format.
//!
//! Preferences are stored as a flat string map in `preferences.toml` under
//! the application's config directory (see [`crate::app::paths`]).
//!
//! A corrupt or unreadable file degrades to an empty map on `get`; the next
//! successful `set` rewrites the whole file. Writes are last-write-wins
//! between concurrent instances, which is acceptable for preferences.

use crate::app::paths;
use crate::application::port::{PreferenceStore, PrefsError};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Preference file name within the app config directory.
const PREFS_FILE: &str = "preferences.toml";

/// [`PreferenceStore`] adapter persisting to a TOML file.
#[derive(Debug, Clone)]
pub struct TomlPreferenceStore {
    path: Option<PathBuf>,
}

impl TomlPreferenceStore {
    /// Creates a store rooted at the default config directory.
    ///
    /// If no config directory can be determined the store still constructs;
    /// every operation then reports [`PrefsError::Unavailable`] and callers
    /// fall back to session defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_dir(paths::get_config_dir())
    }

    /// Creates a store rooted at an explicit directory (used by tests).
    #[must_use]
    pub fn with_dir(dir: Option<PathBuf>) -> Self {
        Self {
            path: dir.map(|mut p| {
                p.push(PREFS_FILE);
                p
            }),
        }
    }

    fn path(&self) -> Result<&PathBuf, PrefsError> {
        self.path.as_ref().ok_or(PrefsError::Unavailable)
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, PrefsError> {
        let path = self.path()?;
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path).map_err(|e| PrefsError::Io(e.to_string()))?;
        // A hand-edited or truncated file must not poison the store.
        Ok(toml::from_str(&content).unwrap_or_default())
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), PrefsError> {
        let path = self.path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| PrefsError::Io(e.to_string()))?;
        }
        let content = toml::to_string_pretty(map).map_err(|e| PrefsError::Format(e.to_string()))?;
        fs::write(path, content).map_err(|e| PrefsError::Io(e.to_string()))
    }
}

impl Default for TomlPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for TomlPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }
}
