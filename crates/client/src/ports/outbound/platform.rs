//! Platform abstraction ports
//!
//! Clock and local storage are the only platform services the client needs.
//! Both are object-safe so they can be injected as `Arc<dyn ...>`.

use chrono::{DateTime, FixedOffset, Utc};

use super::StorageError;

/// Time source; tests use `FixedClock`
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Offset of the device's local time zone, used for "today" and for
    /// reading dates typed into forms.
    fn local_offset(&self) -> FixedOffset;
}

/// Persistent string-keyed storage (file-based on desktop)
///
/// Implementations report failures; the `StorageService` wrapper decides
/// that they are never surfaced to the user.
#[cfg_attr(test, mockall::automock)]
pub trait StorageProvider: Send + Sync {
    /// Load a value by key, `Ok(None)` if it was never saved
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value by key; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    /// Serialized `Doctor` of the signed-in user
    pub const DOCTOR_PROFILE: &str = "doctor_profile";
    /// Identity provider session, owned by the auth adapter
    pub const AUTH_SESSION: &str = "medidesk_auth_session";
}
