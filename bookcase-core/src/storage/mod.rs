//! Key-value preference storage

use crate::error::PreferenceError;
use crate::theme::Theme;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, PreferenceError>;

/// Key under which the theme is persisted
pub const THEME_KEY: &str = "theme";

/// Abstract preference store
pub trait PreferenceStore: Send + Sync {
    /// Read the value for `key`; absence is `Ok(None)`
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write the value for `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`, returning whether it was present
    fn remove(&self, key: &str) -> StorageResult<bool>;
}

/// Read the persisted theme
///
/// A missing key yields `None`; an unrecognised stored value is an error.
pub fn load_theme(store: &dyn PreferenceStore) -> StorageResult<Option<Theme>> {
    store
        .get(THEME_KEY)?
        .map(|value| value.parse::<Theme>())
        .transpose()
}

/// Persist the theme
pub fn save_theme(store: &dyn PreferenceStore, theme: Theme) -> StorageResult<()> {
    store.set(THEME_KEY, theme.as_str())?;
    tracing::info!("Saved theme preference: {}", theme);
    Ok(())
}

/// Forget the persisted theme, returning whether one was stored
pub fn clear_theme(store: &dyn PreferenceStore) -> StorageResult<bool> {
    let removed = store.remove(THEME_KEY)?;
    if removed {
        tracing::info!("Cleared theme preference");
    }
    Ok(removed)
}

/// Preferences kept in a JSON object on disk
///
/// Read-modify-write cycles are serialised, so one store can be shared
/// between threads.
pub struct FilePreferenceStore {
    path: PathBuf,
    update: Mutex<()>,
}

impl FilePreferenceStore {
    /// Store preferences in `preferences.json` under `dir`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join("preferences.json"),
            update: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> StorageResult<BTreeMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(data) => {
                serde_json::from_str(&data).map_err(|e| PreferenceError::Backend(e.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(PreferenceError::Backend(e.to_string())),
        }
    }

    /// Current values for an update; a corrupt file is replaced rather than kept
    fn read_for_update(&self) -> StorageResult<(BTreeMap<String, String>, bool)> {
        match std::fs::read_to_string(&self.path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(values) => Ok((values, false)),
                Err(e) => {
                    tracing::warn!(
                        "Discarding unreadable preferences in {}: {}",
                        self.path.display(),
                        e
                    );
                    Ok((BTreeMap::new(), true))
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok((BTreeMap::new(), false)),
            Err(e) => Err(PreferenceError::Backend(e.to_string())),
        }
    }

    /// Write to a temp file then rename to avoid partial writes
    fn write_all(&self, values: &BTreeMap<String, String>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PreferenceError::Backend(e.to_string()))?;
        }
        let data = serde_json::to_string_pretty(values)
            .map_err(|e| PreferenceError::Backend(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, data).map_err(|e| PreferenceError::Backend(e.to_string()))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| PreferenceError::Backend(e.to_string()))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self
            .update
            .lock()
            .map_err(|e| PreferenceError::Backend(e.to_string()))?;
        let (mut values, _) = self.read_for_update()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove(&self, key: &str) -> StorageResult<bool> {
        let _guard = self
            .update
            .lock()
            .map_err(|e| PreferenceError::Backend(e.to_string()))?;
        let (mut values, corrupt) = self.read_for_update()?;
        let removed = values.remove(key).is_some();
        if removed || corrupt {
            self.write_all(&values)?;
        }
        Ok(removed)
    }
}

/// In-memory preference store (for testing)
#[derive(Default)]
pub struct MemoryPreferenceStore {
    data: RwLock<BTreeMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let data = self
            .data
            .read()
            .map_err(|e| PreferenceError::Backend(e.to_string()))?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.data
            .write()
            .map_err(|e| PreferenceError::Backend(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<bool> {
        Ok(self
            .data
            .write()
            .map_err(|e| PreferenceError::Backend(e.to_string()))?
            .remove(key)
            .is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let store = MemoryPreferenceStore::new();

        assert_eq!(load_theme(&store).unwrap(), None);

        save_theme(&store, Theme::Night).unwrap();
        assert_eq!(load_theme(&store).unwrap(), Some(Theme::Night));

        assert!(store.remove(THEME_KEY).unwrap());
        assert!(!store.remove(THEME_KEY).unwrap());
    }

    #[test]
    fn test_file_store_persists() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("nested"));

        assert_eq!(store.get("theme").unwrap(), None);
        save_theme(&store, Theme::Day).unwrap();
        store.set("other", "kept").unwrap();

        let reopened = FilePreferenceStore::new(dir.path().join("nested"));
        assert_eq!(load_theme(&reopened).unwrap(), Some(Theme::Day));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("kept"));
        assert!(!reopened.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_save_replaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(dir.path());
        std::fs::write(store.path(), "{ not json").unwrap();

        assert!(load_theme(&store).is_err());

        save_theme(&store, Theme::Night).unwrap();
        assert_eq!(load_theme(&store).unwrap(), Some(Theme::Night));
    }

    #[test]
    fn test_clear_theme() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(dir.path());

        assert!(!clear_theme(&store).unwrap());
        save_theme(&store, Theme::Night).unwrap();
        assert!(clear_theme(&store).unwrap());
        assert_eq!(load_theme(&store).unwrap(), None);

        std::fs::write(store.path(), "garbage").unwrap();
        assert!(!clear_theme(&store).unwrap());
        assert_eq!(load_theme(&store).unwrap(), None);
    }

    #[test]
    fn test_concurrent_updates_keep_file_valid() {
        let dir = TempDir::new().unwrap();
        let store = std::sync::Arc::new(FilePreferenceStore::new(dir.path()));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = std::sync::Arc::clone(&store);
                std::thread::spawn(move || store.set(&format!("key-{}", i), "value").unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        for i in 0..8 {
            assert_eq!(store.get(&format!("key-{}", i)).unwrap().as_deref(), Some("value"));
        }
    }

    #[test]
    fn test_invalid_stored_theme() {
        let store = MemoryPreferenceStore::new();
        store.set(THEME_KEY, "sepia").unwrap();
        assert!(matches!(
            load_theme(&store),
            Err(PreferenceError::InvalidTheme(_))
        ));
    }
}
