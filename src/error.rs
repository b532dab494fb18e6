//! Custom error types for pfm
//!
//! This module defines the error hierarchy for the client using thiserror.
//! The first group of variants mirrors the failure modes of the remote API
//! (transport, non-JSON body, application error); the rest cover local
//! concerns such as validation, configuration and exports.

use thiserror::Error;

/// Message used when the backend answers with something that is not JSON
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Check API URL.";

/// Message used when a non-2xx JSON body carries no `message` field
pub const API_ERROR_FALLBACK: &str = "API Error";

/// The main error type for pfm operations
#[derive(Error, Debug)]
pub enum PfmError {
    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Transport(String),

    /// The response body was not valid JSON
    #[error("Server error. Check API URL.")]
    Server,

    /// Non-2xx response with a JSON body; displays the backend message verbatim
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A protected operation was attempted without a signed-in user
    #[error("Not signed in. Run 'pfm login' first.")]
    Unauthenticated,

    /// The owning view was torn down before the result arrived
    #[error("Operation cancelled")]
    Cancelled,

    /// Client-side validation failed before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found in the locally held list
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Session file errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PfmError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Goal",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the owning view was cancelled
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if the backend rejected our credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. } | Self::Unauthenticated)
    }
}

impl From<std::io::Error> for PfmError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PfmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for PfmError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for PfmError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<reqwest::Error> for PfmError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Result type alias for pfm operations
pub type PfmResult<T> = Result<T, PfmError>;
