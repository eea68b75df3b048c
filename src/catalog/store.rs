//! JSON key-value store inside the workflow data directory.
//!
//! Each key is one `<key>.json` file. Values are replaced atomically, so a
//! reader sees either the previous value or the new one.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use crate::utils::fs::atomic_write;

/// File-backed store for small JSON values.
#[derive(Debug, Clone)]
pub struct DataStore {
    dir: PathBuf,
}

impl DataStore {
    /// Creates a store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
        }
    }

    /// Directory holding the value files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or does not decode as `T`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.path_for(key);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        let value = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(value))
    }

    /// Replaces the value stored under `key`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.path_for(key);
        let mut json = serde_json::to_vec_pretty(value)
            .with_context(|| format!("Failed to serialize value for key '{key}'"))?;
        json.push(b'\n');
        atomic_write(&path, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_key_is_none() {
        let temp = tempdir().unwrap();
        let store = DataStore::new(temp.path());
        let value: Option<Vec<String>> = store.load("templates").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let temp = tempdir().unwrap();
        let store = DataStore::new(temp.path().join("data"));

        store.save("templates", &vec!["Go", "Node"]).unwrap();

        assert!(store.path_for("templates").ends_with("data/templates.json"));
        let value: Option<Vec<String>> = store.load("templates").unwrap();
        assert_eq!(value.unwrap(), vec!["Go", "Node"]);
    }

    #[test]
    fn test_corrupt_value_is_error() {
        let temp = tempdir().unwrap();
        let store = DataStore::new(temp.path());
        std::fs::write(store.path_for("templates"), "{not json").unwrap();

        let result: Result<Option<Vec<String>>> = store.load("templates");
        let error = result.unwrap_err();
        assert!(error.to_string().contains("Failed to parse"));
    }
}
