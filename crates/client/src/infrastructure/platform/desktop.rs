//! Desktop platform implementations
//!
//! Provides the file-backed storage provider and the `create_platform`
//! factory used by the composition root.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use directories::ProjectDirs;

use crate::infrastructure::clock::SystemClock;
use crate::ports::outbound::{StorageError, StorageProvider};
use crate::state::Platform;

/// File storage provider with an in-memory cache
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/medidesk/storage.json
/// - macOS: ~/Library/Application Support/io.medidesk.medidesk/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\medidesk\medidesk\config\storage.json
///
/// Every write goes through to disk before returning; the cache only
/// changes once the file has been replaced.
#[derive(Clone)]
pub struct FileStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for FileStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStorageProvider {
    /// Open the store at the platform config directory
    pub fn new() -> Self {
        Self::at(default_storage_path())
    }

    /// Open the store at an explicit path
    ///
    /// A missing file starts empty; an unreadable or corrupt file is logged
    /// and also starts empty, and is overwritten on the next write.
    pub fn at(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();

        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!("Failed to parse storage file: {}", e);
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read storage file: {}", e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("File storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    /// Persist a snapshot of the cache to disk
    fn persist(&self, snapshot: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StorageError::Io(e.to_string()))?;
            }
        }

        let data = serde_json::to_string_pretty(snapshot)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        // Write to a sibling temp file, then rename over the original
        let temp_path = self.storage_path.with_extension("tmp");
        fs::write(&temp_path, data).map_err(|e| StorageError::Io(e.to_string()))?;
        fs::rename(&temp_path, &self.storage_path).map_err(|e| StorageError::Io(e.to_string()))
    }
}

impl StorageProvider for FileStorageProvider {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .cache
            .read()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .cache
            .write()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        let mut next = guard.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .cache
            .write()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        if !guard.contains_key(key) {
            return Ok(());
        }
        let mut next = guard.clone();
        next.remove(key);
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }
}

fn default_storage_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("io", "medidesk", "medidesk") {
        dirs.config_dir().join("storage.json")
    } else {
        // Fallback to current directory if project dirs unavailable
        PathBuf::from("medidesk_storage.json")
    }
}

/// Create platform services for desktop
///
/// `storage_path` overrides the platform config directory.
pub fn create_platform(storage_path: Option<PathBuf>) -> Platform {
    let storage = match storage_path {
        Some(path) => FileStorageProvider::at(path),
        None => FileStorageProvider::new(),
    };
    Platform::new(SystemClock::new(), storage)
}
