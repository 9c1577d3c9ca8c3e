//! Auth Service - sign-in, sign-out and the doctor profile lifecycle
//!
//! A session with the identity provider is not enough to use the app: the
//! signed-in email must also have a row in the remote `doctors` table. The
//! profile is cached locally so the next start can paint immediately, then
//! refreshed from the remote copy.
//!
//! Every remote failure is logged and folded into the state or a
//! [`LoginResult`]; nothing here returns an error to the caller.

use std::sync::{Arc, RwLock};

use futures_channel::mpsc;
use futures_util::StreamExt;
use medidesk_domain::Doctor;

use crate::application::dto::{AuthState, AuthStatus, LoginResult};
use crate::application::services::StorageService;
use crate::ports::outbound::{
    storage_keys, AuthError, AuthEvent, AuthSession, IdentityPort, NewDoctor, ProfileRepo,
    RepoError,
};

pub const MISSING_CREDENTIALS: &str = "Email and password are required";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const NO_SESSION_CREATED: &str = "Login failed - no session created";
pub const ACCOUNT_NOT_FOUND: &str =
    "Account not found. Only doctors and admins can access this app.";

pub struct AuthService {
    identity: Arc<dyn IdentityPort>,
    profiles: Arc<dyn ProfileRepo>,
    storage: StorageService,
    state: RwLock<AuthState>,
}

impl AuthService {
    /// Starts in the loading state until [`AuthService::initialize`] runs.
    pub fn new(
        identity: Arc<dyn IdentityPort>,
        profiles: Arc<dyn ProfileRepo>,
        storage: StorageService,
    ) -> Self {
        Self {
            identity,
            profiles,
            storage,
            state: RwLock::new(AuthState::loading(None)),
        }
    }

    // -------------------------------------------------------------------------
    // State accessors
    // -------------------------------------------------------------------------

    pub fn state(&self) -> AuthState {
        match self.state.read() {
            Ok(guard) => guard.clone(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for auth state: {}", e);
                AuthState::signed_out()
            }
        }
    }

    pub fn doctor(&self) -> Option<Doctor> {
        self.state().doctor
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state().is_loading()
    }

    fn set_state(&self, next: AuthState) {
        match self.state.write() {
            Ok(mut guard) => *guard = next,
            Err(e) => tracing::error!("Failed to acquire write lock for auth state: {}", e),
        }
    }

    /// Leave the loading state without changing who is signed in.
    fn finish_loading(&self) {
        match self.state.write() {
            Ok(mut guard) => {
                guard.status = if guard.doctor.is_some() {
                    AuthStatus::Authenticated
                } else {
                    AuthStatus::Unauthenticated
                };
            }
            Err(e) => tracing::error!("Failed to acquire write lock for auth state: {}", e),
        }
    }

    fn set_status(&self, status: AuthStatus) {
        match self.state.write() {
            Ok(mut guard) => guard.status = status,
            Err(e) => tracing::error!("Failed to acquire write lock for auth state: {}", e),
        }
    }

    // -------------------------------------------------------------------------
    // Startup
    // -------------------------------------------------------------------------

    /// Restore an existing session: cached profile first, then the remote one.
    pub async fn initialize(&self) {
        self.set_state(AuthState::loading(None));

        let session = match self.identity.get_session().await {
            Ok(Some(session)) => session,
            Ok(None) => {
                tracing::info!("No existing session found");
                self.set_state(AuthState::signed_out());
                return;
            }
            Err(e) => {
                tracing::error!(error = %e, "Error getting session");
                self.set_state(AuthState::signed_out());
                return;
            }
        };

        let Some(email) = session.email().map(str::to_string) else {
            tracing::warn!(user_id = %session.user.id, "Session has no email, signing out");
            self.sign_out_quietly().await;
            self.set_state(AuthState::signed_out());
            return;
        };

        tracing::info!(email = %email, "Found existing session");
        self.load_cached_profile();
        self.refresh_from_remote(&email).await;
    }

    /// Phase one of startup: adopt the cached profile, if any.
    pub fn load_cached_profile(&self) -> Option<Doctor> {
        let cached: Option<Doctor> = self.storage.get_json(storage_keys::DOCTOR_PROFILE);
        match &cached {
            Some(doctor) => {
                tracing::debug!(email = %doctor.email, "Using cached doctor profile");
                self.set_state(AuthState::authenticated(doctor.clone()));
            }
            None => tracing::debug!("No stored doctor profile found"),
        }
        cached
    }

    /// Phase two of startup: fetch the authoritative profile.
    ///
    /// A failed fetch keeps a cached profile in place; without one the
    /// session is ended. A missing profile always ends the session.
    pub async fn refresh_from_remote(&self, email: &str) -> Option<Doctor> {
        match self.profiles.get_doctor_by_email(email).await {
            Ok(Some(doctor)) => {
                self.adopt_profile(doctor.clone());
                Some(doctor)
            }
            Ok(None) => {
                tracing::info!(email = %email, "No doctor profile found for user");
                self.sign_out_quietly().await;
                self.storage.remove_item(storage_keys::DOCTOR_PROFILE);
                self.set_state(AuthState::signed_out());
                None
            }
            Err(e) => {
                tracing::error!(email = %email, error = %e, "Error fetching doctor profile");
                match self.doctor() {
                    Some(cached) => {
                        self.set_state(AuthState::authenticated(cached.clone()));
                        Some(cached)
                    }
                    None => {
                        self.sign_out_quietly().await;
                        self.set_state(AuthState::signed_out());
                        None
                    }
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // User actions
    // -------------------------------------------------------------------------

    pub async fn login(&self, email: &str, password: &str) -> LoginResult {
        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            return LoginResult::failure(MISSING_CREDENTIALS);
        }

        self.set_status(AuthStatus::Loading);

        let session = match self.identity.sign_in_with_password(email, password).await {
            Ok(Some(session)) => session,
            Ok(None) => {
                self.finish_loading();
                return LoginResult::failure(NO_SESSION_CREATED);
            }
            Err(e) => {
                tracing::error!(email = %email, error = %e, "Login error");
                self.finish_loading();
                return LoginResult::failure(login_error_message(&e));
            }
        };

        let profile_email = session.email().unwrap_or(email).to_string();
        match self.profiles.get_doctor_by_email(&profile_email).await {
            Ok(Some(doctor)) => {
                tracing::info!(email = %profile_email, "Doctor signed in");
                self.adopt_profile(doctor);
                LoginResult::ok()
            }
            Ok(None) => {
                tracing::info!(email = %profile_email, "No doctor profile found for user");
                self.reject_login().await
            }
            Err(e) => {
                tracing::error!(email = %profile_email, error = %e, "Error fetching doctor profile");
                self.reject_login().await
            }
        }
    }

    pub async fn logout(&self) {
        self.set_status(AuthStatus::Loading);
        if let Err(e) = self.identity.sign_out().await {
            tracing::error!(error = %e, "Logout error");
        }
        self.storage.remove_item(storage_keys::DOCTOR_PROFILE);
        self.set_state(AuthState::signed_out());
        tracing::info!("Signed out");
    }

    /// Re-fetch the signed-in doctor's profile. Failures leave everything as is.
    pub async fn refresh_profile(&self) {
        let Some(current) = self.doctor() else {
            tracing::debug!("No doctor signed in, skipping profile refresh");
            return;
        };

        match self.profiles.get_doctor_by_email(&current.email).await {
            Ok(Some(doctor)) => self.adopt_profile(doctor),
            Ok(None) => tracing::debug!(email = %current.email, "Profile refresh found no row"),
            Err(e) => tracing::error!(error = %e, "Error refreshing profile"),
        }
    }

    /// Insert a new profile row; admin tooling only.
    pub async fn register_doctor(&self, doctor: &NewDoctor) -> Result<Doctor, RepoError> {
        let created = self.profiles.create_doctor(doctor).await?;
        tracing::info!(doctor_id = %created.id, email = %created.email, "Doctor profile created");
        Ok(created)
    }

    // -------------------------------------------------------------------------
    // Session-change stream
    // -------------------------------------------------------------------------

    pub async fn handle_auth_event(&self, event: AuthEvent) {
        tracing::info!(event = event.name(), "Auth state changed");
        match event {
            AuthEvent::SignedIn(session) => self.on_signed_in(&session).await,
            AuthEvent::SignedOut => {
                self.storage.remove_item(storage_keys::DOCTOR_PROFILE);
                self.set_state(AuthState::signed_out());
            }
            AuthEvent::TokenRefreshed(_) => {}
        }
    }

    /// Apply session changes until the provider drops its sender.
    pub async fn run_event_loop(self: Arc<Self>, mut events: mpsc::UnboundedReceiver<AuthEvent>) {
        while let Some(event) = events.next().await {
            self.handle_auth_event(event).await;
        }
        tracing::debug!("Auth event stream closed");
    }

    async fn on_signed_in(&self, session: &AuthSession) {
        let Some(email) = session.email() else {
            tracing::warn!(user_id = %session.user.id, "Signed-in session has no email");
            return;
        };

        match self.profiles.get_doctor_by_email(email).await {
            Ok(Some(doctor)) => self.adopt_profile(doctor),
            Ok(None) => {
                // The sign-in path that produced this session ends it itself
                tracing::info!(email = %email, "No doctor profile found for signed in user");
                self.set_state(AuthState::signed_out());
            }
            Err(e) => {
                tracing::error!(email = %email, error = %e, "Error fetching doctor profile on sign in");
                self.set_state(AuthState::signed_out());
            }
        }
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn adopt_profile(&self, doctor: Doctor) {
        self.storage.set_json(storage_keys::DOCTOR_PROFILE, &doctor);
        self.set_state(AuthState::authenticated(doctor));
    }

    async fn reject_login(&self) -> LoginResult {
        self.sign_out_quietly().await;
        self.set_state(AuthState::signed_out());
        LoginResult::failure(ACCOUNT_NOT_FOUND)
    }

    async fn sign_out_quietly(&self) {
        if let Err(e) = self.identity.sign_out().await {
            tracing::warn!(error = %e, "Sign-out failed");
        }
    }
}

/// The identity provider's own message, or a generic one when it gave none
fn login_error_message(error: &AuthError) -> String {
    match error {
        AuthError::Rejected(message) if message.trim().is_empty() => {
            INVALID_CREDENTIALS.to_string()
        }
        AuthError::Rejected(message) => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::InMemoryStorageProvider;
    use crate::ports::outbound::{AuthUser, MockIdentityPort, MockProfileRepo};
    use chrono::{TimeZone, Utc};
    use futures_util::FutureExt;

    fn doctor(email: &str) -> Doctor {
        Doctor::new(
            "1",
            email,
            "John",
            "Smith",
            "Cardiology",
            Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        )
    }

    fn session(email: &str) -> AuthSession {
        AuthSession {
            access_token: "token".to_string(),
            refresh_token: Some("refresh".to_string()),
            expires_at: None,
            user: AuthUser {
                id: "user-1".to_string(),
                email: Some(email.to_string()),
            },
        }
    }

    fn service(
        identity: MockIdentityPort,
        profiles: MockProfileRepo,
    ) -> (AuthService, StorageService) {
        let storage = StorageService::new(Arc::new(InMemoryStorageProvider::new()));
        let service = AuthService::new(Arc::new(identity), Arc::new(profiles), storage.clone());
        (service, storage)
    }

    fn cached_profile(storage: &StorageService) -> Option<Doctor> {
        storage.get_json(storage_keys::DOCTOR_PROFILE)
    }

    #[tokio::test]
    async fn login_with_blank_input_never_reaches_identity_provider() {
        let mut identity = MockIdentityPort::new();
        identity.expect_sign_in_with_password().times(0);
        let (service, _) = service(identity, MockProfileRepo::new());

        let result = service.login("   ", "secret").await;
        assert_eq!(result, LoginResult::failure(MISSING_CREDENTIALS));

        let result = service.login("john@example.com", "  ").await;
        assert_eq!(result, LoginResult::failure(MISSING_CREDENTIALS));
    }

    #[tokio::test]
    async fn login_without_profile_signs_out_once() {
        let mut identity = MockIdentityPort::new();
        identity
            .expect_sign_in_with_password()
            .returning(|email, _| Ok(Some(session(email))));
        identity.expect_sign_out().times(1).returning(|| Ok(()));

        let mut profiles = MockProfileRepo::new();
        profiles.expect_get_doctor_by_email().returning(|_| Ok(None));

        let (service, storage) = service(identity, profiles);
        let result = service.login("patient@example.com", "secret").await;

        assert_eq!(result, LoginResult::failure(ACCOUNT_NOT_FOUND));
        assert!(!service.is_authenticated());
        assert!(cached_profile(&storage).is_none());
    }

    #[tokio::test]
    async fn login_profile_lookup_failure_is_rejected() {
        let mut identity = MockIdentityPort::new();
        identity
            .expect_sign_in_with_password()
            .returning(|email, _| Ok(Some(session(email))));
        identity.expect_sign_out().times(1).returning(|| Ok(()));

        let mut profiles = MockProfileRepo::new();
        profiles
            .expect_get_doctor_by_email()
            .returning(|_| Err(RepoError::request("get_doctor_by_email", "timeout")));

        let (service, _) = service(identity, profiles);
        let result = service.login("john@example.com", "secret").await;
        assert_eq!(result.error.as_deref(), Some(ACCOUNT_NOT_FOUND));
    }

    #[tokio::test]
    async fn login_success_caches_profile() {
        let mut identity = MockIdentityPort::new();
        identity
            .expect_sign_in_with_password()
            .withf(|email, password| email == "john@example.com" && password == "secret")
            .returning(|email, _| Ok(Some(session(email))));
        identity.expect_sign_out().times(0);

        let mut profiles = MockProfileRepo::new();
        profiles
            .expect_get_doctor_by_email()
            .returning(|email| Ok(Some(doctor(email))));

        let (service, storage) = service(identity, profiles);
        let result = service.login("  john@example.com ", "secret").await;

        assert_eq!(result, LoginResult::ok());
        assert!(service.is_authenticated());
        assert_eq!(service.doctor(), Some(doctor("john@example.com")));
        assert_eq!(cached_profile(&storage), Some(doctor("john@example.com")));
    }

    #[tokio::test]
    async fn login_reports_identity_messages() {
        let mut identity = MockIdentityPort::new();
        identity
            .expect_sign_in_with_password()
            .returning(|_, password| match password {
                "wrong" => Err(AuthError::rejected("Invalid login credentials")),
                "blank" => Err(AuthError::rejected("")),
                _ => Ok(None),
            });

        let (service, _) = service(identity, MockProfileRepo::new());

        let wrong = service.login("john@example.com", "wrong").await;
        assert_eq!(wrong.error.as_deref(), Some("Invalid login credentials"));

        let blank = service.login("john@example.com", "blank").await;
        assert_eq!(blank.error.as_deref(), Some(INVALID_CREDENTIALS));

        let none = service.login("john@example.com", "other").await;
        assert_eq!(none.error.as_deref(), Some(NO_SESSION_CREATED));
        assert_eq!(service.state(), AuthState::signed_out());
    }

    #[tokio::test]
    async fn initialize_without_session_is_unauthenticated() {
        let mut identity = MockIdentityPort::new();
        identity.expect_get_session().returning(|| Ok(None));
        let (service, _) = service(identity, MockProfileRepo::new());

        assert!(service.is_loading());
        service.initialize().await;

        assert_eq!(service.state(), AuthState::signed_out());
    }

    #[tokio::test]
    async fn initialize_session_error_is_unauthenticated() {
        let mut identity = MockIdentityPort::new();
        identity
            .expect_get_session()
            .returning(|| Err(AuthError::request("connection refused")));
        let (service, _) = service(identity, MockProfileRepo::new());

        service.initialize().await;
        assert!(!service.is_authenticated());
        assert!(!service.is_loading());
    }

    #[tokio::test]
    async fn initialize_refreshes_cached_profile_from_remote() {
        let mut identity = MockIdentityPort::new();
        identity
            .expect_get_session()
            .returning(|| Ok(Some(session("john@example.com"))));

        let mut profiles = MockProfileRepo::new();
        profiles
            .expect_get_doctor_by_email()
            .returning(|email| Ok(Some(doctor(email).with_bio("Updated"))));

        let (service, storage) = service(identity, profiles);
        storage.set_json(storage_keys::DOCTOR_PROFILE, &doctor("john@example.com"));

        service.initialize().await;

        let current = service.doctor().unwrap();
        assert_eq!(current.bio.as_deref(), Some("Updated"));
        assert_eq!(cached_profile(&storage), Some(current));
        assert!(service.is_authenticated());
    }

    #[tokio::test]
    async fn initialize_keeps_cached_profile_when_remote_fails() {
        let mut identity = MockIdentityPort::new();
        identity
            .expect_get_session()
            .returning(|| Ok(Some(session("john@example.com"))));
        identity.expect_sign_out().times(0);

        let mut profiles = MockProfileRepo::new();
        profiles
            .expect_get_doctor_by_email()
            .returning(|_| Err(RepoError::database("get_doctor_by_email", "500")));

        let (service, storage) = service(identity, profiles);
        storage.set_json(storage_keys::DOCTOR_PROFILE, &doctor("john@example.com"));

        service.initialize().await;

        assert!(service.is_authenticated());
        assert_eq!(service.doctor(), Some(doctor("john@example.com")));
    }

    #[tokio::test]
    async fn initialize_remote_failure_without_cache_signs_out() {
        let mut identity = MockIdentityPort::new();
        identity
            .expect_get_session()
            .returning(|| Ok(Some(session("john@example.com"))));
        identity.expect_sign_out().times(1).returning(|| Ok(()));

        let mut profiles = MockProfileRepo::new();
        profiles
            .expect_get_doctor_by_email()
            .returning(|_| Err(RepoError::request("get_doctor_by_email", "offline")));

        let (service, _) = service(identity, profiles);
        service.initialize().await;

        assert_eq!(service.state(), AuthState::signed_out());
    }

    #[tokio::test]
    async fn initialize_missing_profile_clears_cache() {
        let mut identity = MockIdentityPort::new();
        identity
            .expect_get_session()
            .returning(|| Ok(Some(session("gone@example.com"))));
        identity.expect_sign_out().times(1).returning(|| Ok(()));

        let mut profiles = MockProfileRepo::new();
        profiles.expect_get_doctor_by_email().returning(|_| Ok(None));

        let (service, storage) = service(identity, profiles);
        storage.set_json(storage_keys::DOCTOR_PROFILE, &doctor("gone@example.com"));

        service.initialize().await;

        assert!(!service.is_authenticated());
        assert!(cached_profile(&storage).is_none());
    }

    #[tokio::test]
    async fn logout_clears_state_and_cache_even_if_sign_out_fails() {
        let mut identity = MockIdentityPort::new();
        identity
            .expect_sign_out()
            .times(1)
            .returning(|| Err(AuthError::request("offline")));

        let (service, storage) = service(identity, MockProfileRepo::new());
        storage.set_json(storage_keys::DOCTOR_PROFILE, &doctor("john@example.com"));
        service.load_cached_profile();
        assert!(service.is_authenticated());

        service.logout().await;

        assert_eq!(service.state(), AuthState::signed_out());
        assert!(cached_profile(&storage).is_none());
    }

    #[tokio::test]
    async fn refresh_profile_without_doctor_is_a_no_op() {
        let mut profiles = MockProfileRepo::new();
        profiles.expect_get_doctor_by_email().times(0);
        let (service, _) = service(MockIdentityPort::new(), profiles);

        service.refresh_profile().await;
        assert!(service.doctor().is_none());
    }

    #[tokio::test]
    async fn refresh_profile_failure_keeps_current_profile() {
        let mut profiles = MockProfileRepo::new();
        profiles
            .expect_get_doctor_by_email()
            .returning(|_| Err(RepoError::request("get_doctor_by_email", "offline")));
        let (service, storage) = service(MockIdentityPort::new(), profiles);
        storage.set_json(storage_keys::DOCTOR_PROFILE, &doctor("john@example.com"));
        service.load_cached_profile();

        service.refresh_profile().await;

        assert_eq!(service.doctor(), Some(doctor("john@example.com")));
    }

    #[tokio::test]
    async fn signed_out_event_clears_cache() {
        let (service, storage) = service(MockIdentityPort::new(), MockProfileRepo::new());
        storage.set_json(storage_keys::DOCTOR_PROFILE, &doctor("john@example.com"));
        service.load_cached_profile();

        service.handle_auth_event(AuthEvent::SignedOut).await;

        assert!(!service.is_authenticated());
        assert!(cached_profile(&storage).is_none());
    }

    #[tokio::test]
    async fn signed_in_event_adopts_profile() {
        let mut profiles = MockProfileRepo::new();
        profiles
            .expect_get_doctor_by_email()
            .returning(|email| Ok(Some(doctor(email))));
        let (service, storage) = service(MockIdentityPort::new(), profiles);

        service
            .handle_auth_event(AuthEvent::SignedIn(session("john@example.com")))
            .await;

        assert!(service.is_authenticated());
        assert!(cached_profile(&storage).is_some());
    }

    #[tokio::test]
    async fn signed_in_event_without_profile_does_not_sign_out() {
        let mut identity = MockIdentityPort::new();
        identity.expect_sign_out().times(0);
        let mut profiles = MockProfileRepo::new();
        profiles.expect_get_doctor_by_email().returning(|_| Ok(None));
        let (service, _) = service(identity, profiles);

        service
            .handle_auth_event(AuthEvent::SignedIn(session("patient@example.com")))
            .await;

        assert_eq!(service.state(), AuthState::signed_out());
    }

    #[tokio::test]
    async fn login_without_profile_signs_out_once_with_event_stream_attached() {
        let (tx, mut rx) = mpsc::unbounded();

        let mut identity = MockIdentityPort::new();
        identity
            .expect_sign_in_with_password()
            .returning(move |email, _| {
                let session = session(email);
                tx.unbounded_send(AuthEvent::SignedIn(session.clone())).unwrap();
                Ok(Some(session))
            });
        identity.expect_sign_out().times(1).returning(|| Ok(()));

        let mut profiles = MockProfileRepo::new();
        profiles.expect_get_doctor_by_email().returning(|_| Ok(None));

        let (service, _) = service(identity, profiles);
        let result = service.login("x@example.com", "pw").await;
        assert_eq!(result, LoginResult::failure(ACCOUNT_NOT_FOUND));

        let mut delivered = 0;
        while let Some(Some(event)) = rx.next().now_or_never() {
            service.handle_auth_event(event).await;
            delivered += 1;
        }

        assert_eq!(delivered, 1);
        assert_eq!(service.state(), AuthState::signed_out());
    }

    #[tokio::test]
    async fn signed_in_event_lookup_error_is_unauthenticated() {
        let mut identity = MockIdentityPort::new();
        identity.expect_sign_out().times(0);
        let mut profiles = MockProfileRepo::new();
        profiles
            .expect_get_doctor_by_email()
            .returning(|_| Err(RepoError::request("get_doctor_by_email", "offline")));
        let (service, _) = service(identity, profiles);

        service
            .handle_auth_event(AuthEvent::SignedIn(session("john@example.com")))
            .await;

        assert_eq!(service.state(), AuthState::signed_out());
    }

    #[tokio::test]
    async fn event_loop_applies_events_until_stream_closes() {
        let (service, storage) = service(MockIdentityPort::new(), MockProfileRepo::new());
        storage.set_json(storage_keys::DOCTOR_PROFILE, &doctor("john@example.com"));
        service.load_cached_profile();
        let service = Arc::new(service);

        let (tx, rx) = mpsc::unbounded();
        tx.unbounded_send(AuthEvent::TokenRefreshed(session("john@example.com")))
            .unwrap();
        tx.unbounded_send(AuthEvent::SignedOut).unwrap();
        drop(tx);

        Arc::clone(&service).run_event_loop(rx).await;

        assert!(!service.is_authenticated());
    }

    #[tokio::test]
    async fn register_doctor_returns_created_row() {
        let mut profiles = MockProfileRepo::new();
        profiles
            .expect_create_doctor()
            .times(1)
            .returning(|new| Ok(doctor(&new.email)));
        let (service, _) = service(MockIdentityPort::new(), profiles);

        let created = service
            .register_doctor(&NewDoctor {
                email: "new@example.com".to_string(),
                first_name: "New".to_string(),
                last_name: "Doctor".to_string(),
                specialization: "General Practice".to_string(),
                ..NewDoctor::default()
            })
            .await
            .unwrap();

        assert_eq!(created.email, "new@example.com");
    }
}
