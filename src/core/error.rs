//! Error types and error handling for studyrag.
//!
//! The chunker, scorer and selector are total functions and never
//! fail. Errors only arise at the boundaries: constructing components
//! from bad numeric settings, loading documents, reading
//! configuration, and validating retrieval requests.

use thiserror::Error;

/// Result type alias for studyrag operations
pub type Result<T> = std::result::Result<T, RagError>;

/// Main error type for studyrag
#[derive(Error, Debug)]
pub enum RagError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Document error: {0}")]
    DocumentError(String),

    #[error("No documents to search")]
    NoDocuments,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl RagError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, RagError::NoDocuments)
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            RagError::InvalidArgument(_)
                | RagError::InvalidQuery(_)
                | RagError::DocumentError(_)
                | RagError::ConfigError(_)
        )
    }
}
