//! Error types for hostinfo
//!
//! All modules use `HostInfoResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for hostinfo operations
pub type HostInfoResult<T> = Result<T, HostInfoError>;

/// All errors that can occur in hostinfo
#[derive(Error, Debug)]
pub enum HostInfoError {
    // Backend errors
    #[error("Failed to load host info from {store}: {reason}")]
    BackendLoad { store: String, reason: String },

    #[error("Failed to load host info from {store}: no host info recorded")]
    HostNotFound { store: String },

    #[error("Failed to persist host info to {store}: {reason}")]
    BackendPersist { store: String, reason: String },

    // Store file format errors
    #[error("Unsupported host info serializer version: {0}")]
    UnsupportedSerializerVersion(u32),

    #[error("Host info already exists: {0}")]
    HostExists(String),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown configuration key: {0}")]
    InvalidKey(String),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl HostInfoError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a backend load error
    pub fn load(store: impl Into<String>, reason: impl ToString) -> Self {
        Self::BackendLoad {
            store: store.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a backend persist error
    pub fn persist(store: impl Into<String>, reason: impl ToString) -> Self {
        Self::BackendPersist {
            store: store.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a load error for a source that holds no record yet
    pub fn not_found(store: impl Into<String>) -> Self {
        Self::HostNotFound {
            store: store.into(),
        }
    }

    /// Check if the backend has no record at all, as opposed to an unreadable one
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::HostNotFound { .. })
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::HostNotFound { .. } => {
                Some("Run: hostinfo --host <name> create, or check --store-dir")
            }
            Self::BackendLoad { .. } => {
                Some("Fix the host info file, or replace it with: hostinfo --host <name> create --force")
            }
            Self::HostExists(_) => Some("Use --force to overwrite"),
            Self::InvalidKey(_) => {
                Some("Valid keys: general.log_format, store.backend, store.dir")
            }
            _ => None,
        }
    }
}
