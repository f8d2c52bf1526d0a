//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation. Every
//! failure is fatal to the generator — there is no retry layer, partial
//! output is never emitted.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the migration generator.
#[derive(Error, Debug)]
pub enum Error {
    /// Registry collaborator failures (spawn error, non-zero exit, bad output
    /// encoding).
    #[error("registry error: {0}")]
    Registry(String),

    /// Serialization/deserialization errors (malformed registry JSON).
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience constructors
impl Error {
    pub fn registry(msg: impl Into<String>) -> Self {
        Self::Registry(msg.into())
    }
}
