use thiserror::Error;

use crate::keys::Collection;

/// Top-level error type returned by the record store and the domain components.
#[derive(Debug, Error)]
pub enum SocialError {
    /// Username is already registered, or was empty, at profile creation.
    #[error("username '{username}' is empty or already taken")]
    DuplicateUsername { username: String },

    /// Target record was not found when performing a mutation.
    #[error("{collection} record '{key}' not found")]
    NotFound { collection: Collection, key: String },

    /// A persisted document exists but does not parse as the expected mapping.
    #[error("{collection} record at {location} is corrupt: {source}")]
    StorageCorrupt {
        collection: Collection,
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the underlying storage failed.
    #[error("storage error at {location}: {source}")]
    Storage {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// A collection could not be rendered to JSON.
    #[error("failed to serialize {collection} record: {source}")]
    Serialize {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },

    /// Underlying Redis command failed.
    #[cfg(feature = "redis")]
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Configuration file or environment could not be resolved.
    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl SocialError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type SocialResult<T> = Result<T, SocialError>;
