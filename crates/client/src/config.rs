//! Client configuration read from the environment.

use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

pub const SUPABASE_URL: &str = "SUPABASE_URL";
pub const SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";
pub const STORAGE_PATH: &str = "MEDIDESK_STORAGE_PATH";
pub const HTTP_TIMEOUT_SECS: &str = "MEDIDESK_HTTP_TIMEOUT_SECS";

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {message}")]
    Invalid { name: &'static str, message: String },
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub supabase_url: Url,
    pub supabase_anon_key: String,
    /// Overrides the platform config directory for the storage file
    pub storage_path: Option<PathBuf>,
    pub http_timeout: Duration,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let raw_url = get(SUPABASE_URL).ok_or(ConfigError::Missing(SUPABASE_URL))?;
        let supabase_url = Url::parse(&raw_url).map_err(|e| ConfigError::Invalid {
            name: SUPABASE_URL,
            message: e.to_string(),
        })?;
        let supabase_anon_key =
            get(SUPABASE_ANON_KEY).ok_or(ConfigError::Missing(SUPABASE_ANON_KEY))?;

        let http_timeout_secs = match get(HTTP_TIMEOUT_SECS) {
            Some(raw) => raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                name: HTTP_TIMEOUT_SECS,
                message: e.to_string(),
            })?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            supabase_url,
            supabase_anon_key,
            storage_path: get(STORAGE_PATH).map(PathBuf::from),
            http_timeout: Duration::from_secs(http_timeout_secs),
        })
    }
}

/// Load `.env.local` then `.env` from `dir`; earlier files win.
pub fn load_dotenv(dir: &Path) {
    for filename in [".env.local", ".env"] {
        let path = dir.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
