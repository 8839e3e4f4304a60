//! Error types for spider-document.
//!
//! Absence of content, title or filters is never an error; these variants
//! cover structurally invalid input and collaborator failures.

/// Error type for document analysis operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Subscription filters cannot be used for scoring.
    #[error("Invalid subscription: {0}")]
    InvalidSubscription(String),

    /// Writing extracted content to durable storage failed.
    #[error("Persistence failed: {0}")]
    Persistence(#[from] std::io::Error),

    /// Configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;
