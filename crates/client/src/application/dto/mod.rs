//! Plain data handed between services and screens.

mod auth;
mod dashboard;
mod filters;

pub use auth::{AuthState, AuthStatus, LoginResult};
pub use dashboard::{DashboardSummary, UPCOMING_WINDOW_MINUTES};
pub use filters::{AppointmentFilter, ConsultationFilter, PrescriptionFilter};
