//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates the platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in `infrastructure/platform/desktop.rs`
//!   (or `Platform::new` with in-memory providers in tests)
//! - Handed to the composition root, which builds services from it

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};

use crate::application::services::StorageService;
use crate::ports::outbound::{ClockPort, StorageProvider};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    clock: Arc<dyn ClockPort>,
    storage: Arc<dyn StorageProvider>,
}

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<C, S>(clock: C, storage: S) -> Self
    where
        C: ClockPort + 'static,
        S: StorageProvider + 'static,
    {
        Self {
            clock: Arc::new(clock),
            storage: Arc::new(storage),
        }
    }

    // -------------------------------------------------------------------------
    // Time operations
    // -------------------------------------------------------------------------

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn local_offset(&self) -> FixedOffset {
        self.clock.local_offset()
    }

    pub fn clock(&self) -> Arc<dyn ClockPort> {
        Arc::clone(&self.clock)
    }

    // -------------------------------------------------------------------------
    // Storage operations
    // -------------------------------------------------------------------------

    pub fn storage(&self) -> Arc<dyn StorageProvider> {
        Arc::clone(&self.storage)
    }

    /// Error-swallowing wrapper over the storage provider
    pub fn storage_service(&self) -> StorageService {
        StorageService::new(self.storage())
    }
}
