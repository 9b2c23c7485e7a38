//! Error types for signal path configuration

use thiserror::Error;

/// Result type for signal path operations
pub type Result<T> = std::result::Result<T, SignalPathError>;

/// Errors that can occur while configuring the signal path
///
/// Building a path from track metadata never fails; these come from
/// loading configuration and parsing user-facing settings.
#[derive(Error, Debug)]
pub enum SignalPathError {
    /// Configuration could not be built or deserialized
    #[error("Configuration error: {0}")]
    Config(String),

    /// Lossless format list is empty
    #[error("Lossless format list is empty")]
    EmptyLosslessFormats,

    /// Unknown replay gain mode name
    #[error("Unknown replay gain mode: {0} (expected none, track or album)")]
    UnknownGainMode(String),
}

impl From<config::ConfigError> for SignalPathError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
