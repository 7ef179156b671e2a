//! Error types for the Sage client core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the Sage client.
///
/// The two failure families the client actually distinguishes are network
/// failures (a request was rejected or came back with a non-success status)
/// and validation gaps (a required field is missing, so the triggering
/// control should have been inert). The remaining variants cover boundary
/// conversions and impossible states.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum SageError {
    /// A request was rejected or returned a non-success status
    #[error("Network failure: {message}")]
    Network { message: String },

    /// A required field is missing; the triggering control should be inert
    #[error("Validation gap: {0}")]
    Validation(String),

    /// Serialization/deserialization error at a wire or storage boundary
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", "multipart", etc.
        message: String,
    },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound { entity_type: String, id: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SageError {
    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a Network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<serde_json::Error> for SageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for SageError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<String> for SageError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, SageError>`.
pub type Result<T> = std::result::Result<T, SageError>;
