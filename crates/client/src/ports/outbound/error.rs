//! Error types for port operations.

/// Identity provider failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    /// The provider refused the request (bad credentials, expired refresh
    /// token). Carries the provider's message, which may be empty.
    #[error("{0}")]
    Rejected(String),

    /// The request never produced a usable response.
    #[error("Auth request failed: {0}")]
    Request(String),

    /// The provider answered with something we could not decode.
    #[error("Invalid auth response: {0}")]
    InvalidResponse(String),
}

impl AuthError {
    pub fn rejected(message: impl ToString) -> Self {
        Self::Rejected(message.to_string())
    }

    pub fn request(message: impl ToString) -> Self {
        Self::Request(message.to_string())
    }

    pub fn invalid_response(message: impl ToString) -> Self {
        Self::InvalidResponse(message.to_string())
    }
}

/// Profile database failures, with context for debugging.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RepoError {
    /// The HTTP call failed before the database answered.
    #[error("Request error in {operation}: {message}")]
    Request {
        operation: &'static str,
        message: String,
    },

    /// The database answered with an error status.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    pub fn request(operation: &'static str, message: impl ToString) -> Self {
        Self::Request {
            operation,
            message: message.to_string(),
        }
    }

    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}

/// Local key-value store failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Storage lock poisoned: {0}")]
    Lock(String),

    #[error("Storage serialization error: {0}")]
    Serialization(String),
}
