// SPDX-License-Identifier: MPL-2.0
//! Preference store adapters.
//!
//! [`FilePreferences`] keeps a flat TOML table in the app data directory,
//! rewritten on every `set`. [`MemoryPreferences`] is the in-process
//! equivalent for hosts without a filesystem.

use crate::app::paths;
use crate::application::port::PreferenceStore;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Preference file name within the app data directory.
const PREFERENCES_FILE: &str = "preferences.toml";

#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Opens the preference file from the default data directory.
    ///
    /// Returns a tuple of (store, optional_warning). An unreadable or
    /// malformed file yields an empty store plus a warning key.
    pub fn open() -> Result<(Self, Option<String>)> {
        Self::open_in(None)
    }

    /// Opens the preference file from a custom directory.
    pub fn open_in(base_dir: Option<PathBuf>) -> Result<(Self, Option<String>)> {
        let mut path = paths::get_app_data_dir_with_override(base_dir).ok_or_else(|| {
            Error::Preferences("no data directory available".to_string())
        })?;
        path.push(PREFERENCES_FILE);
        Ok(Self::open_path(path))
    }

    /// Opens a specific preference file.
    pub fn open_path(path: PathBuf) -> (Self, Option<String>) {
        if !path.exists() {
            return (Self::empty(path), None);
        }

        match read_values(&path) {
            Ok(values) => (Self { path, values }, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable preferences");
                (
                    Self::empty(path),
                    Some("notification-preferences-load-error".to_string()),
                )
            }
        }
    }

    fn empty(path: PathBuf) -> Self {
        Self {
            path,
            values: BTreeMap::new(),
        }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(&self.values)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

fn read_values(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()?;
        tracing::debug!(key, value, path = %self.path.display(), "preference saved");
        Ok(())
    }
}

/// Non-persistent preference store.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
