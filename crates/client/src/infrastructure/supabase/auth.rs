//! GoTrue identity client
//!
//! Keeps the current session in memory and mirrors it into local storage so
//! a restart can pick it up again. Session changes are broadcast to every
//! subscriber.

use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use futures_channel::mpsc;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use super::SupabaseConfig;
use crate::application::services::StorageService;
use crate::ports::outbound::{
    storage_keys, AuthError, AuthEvent, AuthSession, AuthUser, ClockPort, IdentityPort,
};

pub struct SupabaseAuthClient {
    client: Client,
    config: SupabaseConfig,
    storage: StorageService,
    clock: Arc<dyn ClockPort>,
    session: RwLock<Option<AuthSession>>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<AuthEvent>>>,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshGrant<'a> {
    refresh_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    /// Unix seconds
    #[serde(default)]
    expires_at: Option<i64>,
    #[serde(default)]
    user: Option<AuthUser>,
}

/// GoTrue reports errors under several different keys depending on version.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> String {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
            .unwrap_or_default()
    }
}

impl TokenResponse {
    fn into_session(self, now: DateTime<Utc>) -> Option<AuthSession> {
        let access_token = self.access_token?;
        let user = self.user?;
        let expires_at = self
            .expires_at
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
            .or_else(|| self.expires_in.map(|secs| now + Duration::seconds(secs)));
        Some(AuthSession {
            access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user,
        })
    }
}

impl SupabaseAuthClient {
    /// Build the client and restore a session persisted by a previous run.
    pub fn new(config: SupabaseConfig, storage: StorageService, clock: Arc<dyn ClockPort>) -> Self {
        let restored: Option<AuthSession> = storage.get_json(storage_keys::AUTH_SESSION);
        if let Some(session) = &restored {
            tracing::debug!(user_id = %session.user.id, "Restored persisted auth session");
        }

        Self {
            client: config.http_client(),
            config,
            storage,
            clock,
            session: RwLock::new(restored),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Bearer token for authenticated REST calls, if signed in.
    pub fn current_access_token(&self) -> Option<String> {
        self.current_session().map(|s| s.access_token)
    }

    fn current_session(&self) -> Option<AuthSession> {
        match self.session.read() {
            Ok(guard) => guard.clone(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for session: {}", e);
                None
            }
        }
    }

    fn store_session(&self, session: Option<AuthSession>) {
        match &session {
            Some(s) => self.storage.set_json(storage_keys::AUTH_SESSION, s),
            None => self.storage.remove_item(storage_keys::AUTH_SESSION),
        }
        match self.session.write() {
            Ok(mut guard) => *guard = session,
            Err(e) => tracing::error!("Failed to acquire write lock for session: {}", e),
        }
    }

    /// Deliver `event` to every live subscriber, dropping closed ones.
    fn emit(&self, event: AuthEvent) {
        match self.subscribers.lock() {
            Ok(mut subscribers) => {
                subscribers.retain(|tx| tx.unbounded_send(event.clone()).is_ok());
            }
            Err(e) => tracing::error!("Failed to acquire subscriber lock: {}", e),
        }
    }

    async fn token_request<T: Serialize + ?Sized>(
        &self,
        grant_type: &str,
        body: &T,
    ) -> Result<Option<AuthSession>, AuthError> {
        let mut url = self
            .config
            .endpoint("/auth/v1/token")
            .map_err(AuthError::request)?;
        url.query_pairs_mut().append_pair("grant_type", grant_type);

        let response = self
            .client
            .post(url)
            .header("apikey", &self.config.anon_key)
            .json(body)
            .send()
            .await
            .map_err(AuthError::request)?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(AuthError::invalid_response)?;
        Ok(token.into_session(self.clock.now()))
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Option<AuthSession>, AuthError> {
        let session = self
            .token_request("refresh_token", &RefreshGrant { refresh_token })
            .await?;
        if let Some(session) = &session {
            tracing::debug!(user_id = %session.user.id, "Auth session refreshed");
            self.store_session(Some(session.clone()));
            self.emit(AuthEvent::TokenRefreshed(session.clone()));
        }
        Ok(session)
    }
}

/// Turn a non-success response into an error carrying the server's message.
async fn rejection(response: Response) -> AuthError {
    let status = response.status();
    let body: ErrorBody = response.json().await.unwrap_or_default();
    let message = body.into_message();
    if status.is_client_error() {
        AuthError::rejected(message)
    } else {
        AuthError::request(format!("{}: {}", status, message))
    }
}

#[async_trait]
impl IdentityPort for SupabaseAuthClient {
    async fn get_session(&self) -> Result<Option<AuthSession>, AuthError> {
        let Some(session) = self.current_session() else {
            return Ok(None);
        };

        if !session.is_expired(self.clock.now()) {
            return Ok(Some(session));
        }

        let Some(refresh_token) = session.refresh_token.clone() else {
            tracing::info!("Auth session expired without refresh token");
            self.store_session(None);
            self.emit(AuthEvent::SignedOut);
            return Ok(None);
        };

        match self.refresh(&refresh_token).await {
            Ok(session) => Ok(session),
            Err(AuthError::Rejected(message)) => {
                tracing::info!(reason = %message, "Refresh token rejected, session ended");
                self.store_session(None);
                self.emit(AuthEvent::SignedOut);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<AuthSession>, AuthError> {
        let session = self
            .token_request("password", &PasswordGrant { email, password })
            .await?;

        if let Some(session) = &session {
            tracing::info!(user_id = %session.user.id, "Signed in with password");
            self.store_session(Some(session.clone()));
            self.emit(AuthEvent::SignedIn(session.clone()));
        }
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let token = self.current_access_token();
        self.store_session(None);
        self.emit(AuthEvent::SignedOut);

        let Some(token) = token else {
            return Ok(());
        };

        let url = self
            .config
            .endpoint("/auth/v1/logout")
            .map_err(AuthError::request)?;
        let response = self
            .client
            .post(url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(AuthError::request)?;

        // An already-invalid token means the server side is signed out too
        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND => Ok(()),
            _ => Err(rejection(response).await),
        }
    }

    fn subscribe(&self) -> mpsc::UnboundedReceiver<AuthEvent> {
        let (tx, rx) = mpsc::unbounded();
        match self.subscribers.lock() {
            Ok(mut subscribers) => subscribers.push(tx),
            Err(e) => tracing::error!("Failed to acquire subscriber lock: {}", e),
        }
        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::platform::InMemoryStorageProvider;
    use futures_util::StreamExt;
    use url::Url;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 20, 10, 0, 0).unwrap()
    }

    fn session(expires_at: Option<DateTime<Utc>>) -> AuthSession {
        AuthSession {
            access_token: "access".to_string(),
            refresh_token: None,
            expires_at,
            user: AuthUser {
                id: "user-1".to_string(),
                email: Some("john@example.com".to_string()),
            },
        }
    }

    fn client(storage: StorageService) -> SupabaseAuthClient {
        let config = SupabaseConfig::new(
            Url::parse("http://127.0.0.1:9").unwrap(),
            "anon",
            std::time::Duration::from_secs(1),
        );
        SupabaseAuthClient::new(config, storage, Arc::new(FixedClock::utc(now())))
    }

    fn storage() -> StorageService {
        StorageService::new(Arc::new(InMemoryStorageProvider::new()))
    }

    #[test]
    fn token_response_builds_session() {
        let token: TokenResponse = serde_json::from_value(serde_json::json!({
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r1",
            "user": { "id": "u1", "email": "john@example.com", "role": "authenticated" }
        }))
        .unwrap();

        let session = token.into_session(now()).unwrap();

        assert_eq!(session.access_token, "jwt");
        assert_eq!(session.refresh_token.as_deref(), Some("r1"));
        assert_eq!(session.expires_at, Some(now() + Duration::hours(1)));
        assert_eq!(session.email(), Some("john@example.com"));
    }

    #[test]
    fn token_response_without_user_has_no_session() {
        let token: TokenResponse =
            serde_json::from_value(serde_json::json!({ "access_token": "jwt" })).unwrap();
        assert!(token.into_session(now()).is_none());
    }

    #[test]
    fn error_body_prefers_description() {
        let body: ErrorBody = serde_json::from_value(serde_json::json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        }))
        .unwrap();
        assert_eq!(body.into_message(), "Invalid login credentials");
        assert_eq!(ErrorBody::default().into_message(), "");
    }

    #[tokio::test]
    async fn restores_persisted_session() {
        let storage = storage();
        storage.set_json(storage_keys::AUTH_SESSION, &session(None));

        let client = client(storage);

        assert_eq!(client.get_session().await.unwrap(), Some(session(None)));
        assert_eq!(client.current_access_token().as_deref(), Some("access"));
    }

    #[tokio::test]
    async fn expired_session_without_refresh_token_ends() {
        let storage = storage();
        storage.set_json(
            storage_keys::AUTH_SESSION,
            &session(Some(now() - Duration::minutes(1))),
        );
        let client = client(storage.clone());
        let mut events = client.subscribe();

        assert_eq!(client.get_session().await.unwrap(), None);
        assert_eq!(events.next().await, Some(AuthEvent::SignedOut));
        assert!(storage.get_item(storage_keys::AUTH_SESSION).is_none());
    }

    #[tokio::test]
    async fn sign_out_without_session_notifies_subscribers() {
        let client = client(storage());
        let mut first = client.subscribe();
        let mut second = client.subscribe();

        client.sign_out().await.unwrap();

        assert_eq!(first.next().await, Some(AuthEvent::SignedOut));
        assert_eq!(second.next().await, Some(AuthEvent::SignedOut));
    }

    #[tokio::test]
    async fn closed_subscribers_are_dropped() {
        let client = client(storage());
        drop(client.subscribe());
        let mut live = client.subscribe();

        client.emit(AuthEvent::SignedOut);

        assert_eq!(live.next().await, Some(AuthEvent::SignedOut));
        assert_eq!(client.subscribers.lock().unwrap().len(), 1);
    }
}
