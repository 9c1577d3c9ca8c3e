//! Identity provider port - sessions, password sign-in, sign-out and the
//! session-change stream.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_channel::mpsc;
use serde::{Deserialize, Serialize};

use super::AuthError;

/// The authenticated account as the identity provider knows it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Server-issued proof of authentication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub user: AuthUser,
}

impl AuthSession {
    pub fn email(&self) -> Option<&str> {
        self.user.email.as_deref()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Session-change notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn(AuthSession),
    SignedOut,
    TokenRefreshed(AuthSession),
}

impl AuthEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AuthEvent::SignedIn(_) => "SIGNED_IN",
            AuthEvent::SignedOut => "SIGNED_OUT",
            AuthEvent::TokenRefreshed(_) => "TOKEN_REFRESHED",
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityPort: Send + Sync {
    /// The current session, if one exists (restored from a previous run or
    /// created by sign-in).
    async fn get_session(&self) -> Result<Option<AuthSession>, AuthError>;

    /// Check credentials. `Ok(None)` means the provider accepted the request
    /// but issued no session.
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<AuthSession>, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Stream of session changes; each call returns an independent receiver.
    fn subscribe(&self) -> mpsc::UnboundedReceiver<AuthEvent>;
}
