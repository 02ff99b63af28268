//! Error handling module for tiercalc
//!
//! Provides centralized error handling with proper error types using thiserror.
//! The tier engine itself never fails; these cover the surrounding layers.

use thiserror::Error;

/// Main error type for tiercalc
#[derive(Error, Debug)]
pub enum CalcError {
    /// IO errors (catalog files, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog errors (loading, parsing, validation)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A preset name that the active catalog does not define
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for tiercalc operations
pub type Result<T> = std::result::Result<T, CalcError>;

impl CalcError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}
