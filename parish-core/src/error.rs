//! Error types for the parish ecosystem.

use thiserror::Error;

/// Errors that can occur in parish operations.
#[derive(Error, Debug)]
pub enum ParishError {
    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Annotation not found: {0}")]
    AnnotationNotFound(String),

    #[error("Invalid event data: {0}")]
    InvalidEvent(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for parish operations.
pub type ParishResult<T> = Result<T, ParishError>;
