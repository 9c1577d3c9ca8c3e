//! MediDesk client.
//!
//! Application services, outbound ports and their adapters for the doctor
//! app. Rendering lives elsewhere; this crate owns state and I/O.

pub mod app;
pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::{ClientConfig, ConfigError};
