//! Error types for lessonmark library.

use std::io;
use thiserror::Error;

/// Result type alias for lessonmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing or rendering content.
///
/// Malformed content (broken tables, unterminated emphasis, ragged rows) never
/// produces an error; it degrades to whatever can still be understood. These
/// variants cover contract violations and I/O only.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input was forced down the JSON path but is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The caller handed over input of the wrong shape (e.g. a JSON `null`
    /// where a fact sheet object is required).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error during rendering (JSON serialization and friends).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
