//! Client-scoped key-value slots that survive restarts.
//!
//! `FileStore` keeps one file per key under the client's data directory, so two
//! data directories never see each other's values. `MemoryStore` is ephemeral.

use crate::app::AppError;
use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing::debug;

pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when the key was never set.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;

    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Removes the key; removing a missing key is not an error.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be modified.
    fn remove_item(&self, key: &str) -> Result<(), AppError>;
}

#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(name)
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::Storage(format!(
                "Failed to read {}: {err}",
                path.display()
            ))),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        fs::create_dir_all(&self.root).map_err(|err| {
            AppError::Storage(format!("Failed to create {}: {err}", self.root.display()))
        })?;

        let path = self.path_for(key);
        fs::write(&path, value).map_err(|err| {
            AppError::Storage(format!("Failed to write {}: {err}", path.display()))
        })?;

        debug!(path = %path.display(), "stored client value");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(AppError::Storage(format!(
                "Failed to remove {}: {err}",
                path.display()
            ))),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, AppError> {
        self.items
            .lock()
            .map_err(|_| AppError::Storage("Memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("k").ok().flatten(), None);

        assert!(store.set_item("k", "v").is_ok());
        assert_eq!(store.get_item("k").ok().flatten(), Some("v".to_string()));

        assert!(store.remove_item("k").is_ok());
        assert!(store.remove_item("k").is_ok());
        assert_eq!(store.get_item("k").ok().flatten(), None);
    }

    #[test]
    fn file_store_maps_keys_to_safe_names() {
        let store = FileStore::new("/tmp/twenty20");
        assert_eq!(
            store.path_for("twenty20:user"),
            PathBuf::from("/tmp/twenty20/twenty20_user")
        );
        assert_eq!(
            store.path_for("../escape"),
            PathBuf::from("/tmp/twenty20/.._escape")
        );
    }
}
