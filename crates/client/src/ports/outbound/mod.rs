//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

mod error;
pub mod identity_port;
pub mod platform;
pub mod profile_port;

pub use error::{AuthError, RepoError, StorageError};
pub use identity_port::{AuthEvent, AuthSession, AuthUser, IdentityPort};
pub use platform::{storage_keys, ClockPort, StorageProvider};
pub use profile_port::{NewDoctor, ProfileRepo};

#[cfg(test)]
pub use identity_port::MockIdentityPort;
#[cfg(test)]
pub use platform::MockStorageProvider;
#[cfg(test)]
pub use profile_port::MockProfileRepo;
