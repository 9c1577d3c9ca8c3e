//! Supabase adapters: GoTrue for identity, PostgREST for the `doctors` table.

mod auth;
mod profiles;
mod rows;

use std::time::Duration;

use reqwest::Client;
use url::Url;

pub use auth::SupabaseAuthClient;
pub use profiles::SupabaseProfileRepo;
pub use rows::{DoctorInsertRow, DoctorRow};

/// Connection settings shared by both adapters
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: Url,
    pub anon_key: String,
    pub timeout: Duration,
}

impl SupabaseConfig {
    pub fn new(url: Url, anon_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url,
            anon_key: anon_key.into(),
            timeout,
        }
    }

    pub fn http_client(&self) -> Client {
        Client::builder()
            .timeout(self.timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            })
    }

    /// Resolve `path` under the project URL, keeping any path prefix the
    /// project URL carries.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        let mut base = self.url.clone();
        if !base.path().ends_with('/') {
            let prefix = format!("{}/", base.path());
            base.set_path(&prefix);
        }
        base.join(path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_keeps_project_host() {
        let config = SupabaseConfig::new(
            Url::parse("https://abc.supabase.co").unwrap(),
            "anon",
            Duration::from_secs(30),
        );
        assert_eq!(
            config.endpoint("/rest/v1/doctors").unwrap().as_str(),
            "https://abc.supabase.co/rest/v1/doctors"
        );
    }

    #[test]
    fn endpoint_keeps_self_hosted_path_prefix() {
        let config = SupabaseConfig::new(
            Url::parse("https://example.org/supabase").unwrap(),
            "anon",
            Duration::from_secs(30),
        );
        assert_eq!(
            config.endpoint("/auth/v1/token").unwrap().as_str(),
            "https://example.org/supabase/auth/v1/token"
        );

        let trailing = SupabaseConfig::new(
            Url::parse("https://example.org/supabase/").unwrap(),
            "anon",
            Duration::from_secs(30),
        );
        assert_eq!(
            trailing.endpoint("/rest/v1/doctors").unwrap().as_str(),
            "https://example.org/supabase/rest/v1/doctors"
        );
    }
}
