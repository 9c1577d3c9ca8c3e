//! Authentication state as the screens see it.

use medidesk_domain::Doctor;

/// Where the sign-in flow currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStatus {
    #[default]
    Unauthenticated,
    /// A sign-in, sign-out or startup check is in flight
    Loading,
    Authenticated,
}

/// Snapshot of the authenticated doctor
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub status: AuthStatus,
    pub doctor: Option<Doctor>,
}

impl AuthState {
    pub fn loading(doctor: Option<Doctor>) -> Self {
        Self {
            status: AuthStatus::Loading,
            doctor,
        }
    }

    pub fn authenticated(doctor: Doctor) -> Self {
        Self {
            status: AuthStatus::Authenticated,
            doctor: Some(doctor),
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated && self.doctor.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.status == AuthStatus::Loading
    }
}

/// Outcome of a login attempt, shaped for display on the login screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    pub success: bool,
    pub error: Option<String>,
}

impl LoginResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}
