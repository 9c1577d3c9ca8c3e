//! Key-value storage wrapper
//!
//! Thin pass-through to the platform `StorageProvider`. Every failure is
//! logged and swallowed: callers see `None` for both "never stored" and
//! "could not read".

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::ports::outbound::StorageProvider;

#[derive(Clone)]
pub struct StorageService {
    provider: Arc<dyn StorageProvider>,
}

impl StorageService {
    pub fn new(provider: Arc<dyn StorageProvider>) -> Self {
        Self { provider }
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        match self.provider.load(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(key, error = %e, "Error retrieving data");
                None
            }
        }
    }

    pub fn set_item(&self, key: &str, value: &str) {
        if let Err(e) = self.provider.save(key, value) {
            tracing::error!(key, error = %e, "Error storing data");
        }
    }

    pub fn remove_item(&self, key: &str) {
        if let Err(e) = self.provider.remove(key) {
            tracing::error!(key, error = %e, "Error removing data");
        }
    }

    /// Read and decode a JSON value. A value that no longer decodes is
    /// treated as absent.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get_item(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Stored value is not valid JSON, ignoring it");
                None
            }
        }
    }

    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.set_item(key, &raw),
            Err(e) => tracing::error!(key, error = %e, "Error serializing data"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::InMemoryStorageProvider;
    use crate::ports::outbound::{MockStorageProvider, StorageError};

    fn service() -> StorageService {
        StorageService::new(Arc::new(InMemoryStorageProvider::new()))
    }

    #[test]
    fn get_item_of_unknown_key_is_none() {
        assert_eq!(service().get_item("never-set"), None);
    }

    #[test]
    fn set_then_get_then_remove() {
        let storage = service();
        storage.set_item("doctor_profile", "cached");
        assert_eq!(storage.get_item("doctor_profile"), Some("cached".to_string()));

        storage.remove_item("doctor_profile");
        assert_eq!(storage.get_item("doctor_profile"), None);
    }

    #[test]
    fn read_failure_looks_like_absence() {
        let mut provider = MockStorageProvider::new();
        provider
            .expect_load()
            .returning(|_| Err(StorageError::Io("disk on fire".to_string())));

        let storage = StorageService::new(Arc::new(provider));
        assert_eq!(storage.get_item("doctor_profile"), None);
    }

    #[test]
    fn write_failures_are_swallowed() {
        let mut provider = MockStorageProvider::new();
        provider
            .expect_save()
            .times(1)
            .returning(|_, _| Err(StorageError::Io("read-only".to_string())));
        provider
            .expect_remove()
            .times(1)
            .returning(|_| Err(StorageError::Lock("poisoned".to_string())));

        let storage = StorageService::new(Arc::new(provider));
        storage.set_item("k", "v");
        storage.remove_item("k");
    }

    #[test]
    fn corrupt_json_is_treated_as_absent() {
        let storage = service();
        storage.set_item("numbers", "[1, 2");
        assert_eq!(storage.get_json::<Vec<u32>>("numbers"), None);

        storage.set_json("numbers", &vec![1u32, 2]);
        assert_eq!(storage.get_json::<Vec<u32>>("numbers"), Some(vec![1, 2]));
    }
}
