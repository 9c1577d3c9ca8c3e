//! Application services - use cases over the outbound ports.

pub mod appointment_store;
pub mod auth_service;
pub mod prescription_store;
pub mod storage_service;

pub use appointment_store::AppointmentStore;
pub use auth_service::AuthService;
pub use prescription_store::PrescriptionStore;
pub use storage_service::StorageService;
