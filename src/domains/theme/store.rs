//! Preference storage for the theme domain.
//!
//! The theme preference is one key-value pair that must survive restarts
//! and be shared by every page. The capability is an explicit trait so the
//! switcher never touches ambient state, with a JSON-file-backed
//! implementation for the binary and an in-memory one for tests and
//! embedding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::ThemeError;

/// A persistent string key-value capability scoped to the site.
pub trait PreferenceStore: Send + Sync {
    /// Read the value persisted under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`, overwriting any prior value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// On-disk shape of the preference file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(default)]
    preferences: BTreeMap<String, String>,

    /// When the file was last written.
    updated_at: Option<DateTime<Utc>>,
}

/// A `PreferenceStore` backed by one JSON file.
///
/// Writes go straight to disk so the preference survives process restarts.
pub struct FilePreferenceStore {
    path: PathBuf,
    data: PreferenceFile,
}

impl FilePreferenceStore {
    /// Open the store at `path`. A missing file yields an empty store; it is
    /// created on the first write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref().to_path_buf();

        let data = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            PreferenceFile::default()
        };

        Ok(Self { path, data })
    }

    fn flush(&mut self) -> Result<(), ThemeError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        self.data.updated_at = Some(Utc::now());
        let raw = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, raw)?;
        debug!("Preferences written to {}", self.path.display());
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.preferences.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.data
            .preferences
            .insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// An in-memory `PreferenceStore`. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryPreferenceStore::new();
        assert_eq!(store.get("multiToolTheme"), None);
        store.set("multiToolTheme", "dark").unwrap();
        assert_eq!(store.get("multiToolTheme"), Some("dark".to_string()));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::open(dir.path().join("preferences.json")).unwrap();
        assert_eq!(store.get("multiToolTheme"), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut store = FilePreferenceStore::open(&path).unwrap();
        store.set("multiToolTheme", "ocean").unwrap();
        drop(store);

        let reopened = FilePreferenceStore::open(&path).unwrap();
        assert_eq!(reopened.get("multiToolTheme"), Some("ocean".to_string()));
    }

    #[test]
    fn test_file_store_overwrites_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut store = FilePreferenceStore::open(&path).unwrap();
        store.set("multiToolTheme", "dark").unwrap();
        store.set("multiToolTheme", "light").unwrap();
        assert_eq!(store.get("multiToolTheme"), Some("light".to_string()));

        let reopened = FilePreferenceStore::open(&path).unwrap();
        assert_eq!(reopened.get("multiToolTheme"), Some("light".to_string()));
    }

    #[test]
    fn test_file_store_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "not json").unwrap();

        let result = FilePreferenceStore::open(&path);
        assert!(matches!(result, Err(ThemeError::Json(_))));
    }
}
