//! Error types for chronogen

use thiserror::Error;

/// Result type alias for chronogen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for chronogen
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was missing or malformed (e.g. an unparseable date)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Positional generation access outside the stored range
    #[error("Generation index {index} out of bounds (have {len} generations)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The object store has no object under the requested name
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
