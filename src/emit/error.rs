//! Emitter error types.

use crate::table::TableError;
use thiserror::Error;

/// Errors that can occur while writing or reading an artifact
#[derive(Debug, Error)]
pub enum EmitError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Artifact version is not supported by this version
    #[error("Unsupported artifact version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Artifact table failed validation
    #[error("Artifact validation failed: {0}")]
    ValidationFailed(#[from] TableError),

    /// Rendering Rust source failed
    #[error("Rendering failed: {0}")]
    Render(#[from] std::fmt::Error),

    /// Writing the artifact failed
    #[error("Write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when building emitter options.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must not be empty")]
    EmptyName { field: &'static str },

    #[error("{field} {value:?} is not a valid Rust path")]
    InvalidIdentifier { field: &'static str, value: String },
}
