//! Error types for lyrics loading

use thiserror::Error;

/// Result type for lyrics operations
pub type Result<T> = std::result::Result<T, LyricsError>;

/// Errors that can occur while loading lyrics
///
/// Parsing itself never fails; only reading lyrics from disk can.
#[derive(Error, Debug)]
pub enum LyricsError {
    /// File not found
    #[error("Lyrics file not found: {0}")]
    FileNotFound(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
