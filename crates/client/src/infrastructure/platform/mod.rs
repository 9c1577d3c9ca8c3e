//! Platform-specific implementations
//!
//! This module provides implementations of the platform abstraction traits
//! defined in `ports/outbound/platform.rs`.

mod desktop;
mod memory;

pub use desktop::{create_platform, FileStorageProvider};
pub use memory::InMemoryStorageProvider;
