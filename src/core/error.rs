//! Error types and error handling for ragdex.
//!
//! Ingestion distinguishes fatal errors (the root path is missing
//! or cannot be read) from per-file errors that are recorded and skipped. Query-time
//! absence is never an error for `search`; only `stats` reports it.

use thiserror::Error;

/// Result type alias for ragdex operations
pub type Result<T> = std::result::Result<T, RagdexError>;

/// Main error type for ragdex
#[derive(Error, Debug)]
pub enum RagdexError {
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Cannot ingest {path}: {message}")]
    UnreadableRoot { path: String, message: String },

    #[error("Failed to read {path}: {message}")]
    FileRead { path: String, message: String },

    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse { path: String, message: String },

    #[error("Index not found: {0}")]
    IndexNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl RagdexError {
    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RagdexError::PathNotFound(_) | RagdexError::IndexNotFound(_)
        )
    }

    /// Check if this error only affects a single file during ingestion
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            RagdexError::FileRead { .. } | RagdexError::JsonParse { .. }
        )
    }
}
