//! In-memory storage provider, for tests and headless runs.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::outbound::{StorageError, StorageProvider};

#[derive(Clone, Default)]
pub struct InMemoryStorageProvider {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageProvider for InMemoryStorageProvider {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .data
            .read()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .data
            .write()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .data
            .write()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}
