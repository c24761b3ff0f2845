//! Error types for varconf-json

use std::path::PathBuf;

/// Result type for varconf-json operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a JSON configuration source
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file does not exist
    #[error("Configuration source not found: {path}")]
    NotFound { path: PathBuf },

    /// Configuration file exists but could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source text is not valid JSON; the message carries serde_json's
    /// line and column detail
    #[error("Malformed JSON configuration: {message}")]
    Malformed { message: String },
}
