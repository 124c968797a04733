/// Error types for the application
///
/// Each enum covers one boundary:
/// - `ConfigError` - fatal, blocks the whole window
/// - `IntakeError` - a dropped/picked file was not an accepted image
/// - `AnalysisError` - operational failures of one analysis attempt
///
/// The `Display` text of `ConfigError` and `AnalysisError` is exactly what the
/// user sees, so keep the messages user-facing.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::API_KEY_VAR;

/// Startup configuration failure (no retry path)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Credential absent, blank, or still the placeholder value
    #[error("Please add your OpenAI API key to the .env file as {}", API_KEY_VAR)]
    MissingApiKey,
}

/// Rejection at the file intake boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("{} has no file extension", .0.display())]
    MissingExtension(PathBuf),

    #[error("{} is not a supported image type (.{extension})", .path.display())]
    UnsupportedType { path: PathBuf, extension: String },

    #[error("{} is not a regular file", .0.display())]
    NotAFile(PathBuf),
}

/// Failure of a single analysis attempt
///
/// Must be `Clone` because it travels inside iced messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Analysis requested while the client was never configured
    #[error("OpenAI client is not initialized")]
    ClientNotInitialized,

    /// The selected image could not be read from disk
    #[error("Failed to read image file")]
    Read(String),

    /// The endpoint answered with a non-success status
    #[error("{status} {message}")]
    Api { status: u16, message: String },

    /// Network level failure (DNS, connection refused, TLS...)
    #[error("{0}")]
    Transport(String),

    /// The endpoint answered 2xx but the body was not a chat completion
    #[error("{0}")]
    Decode(String),
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AnalysisError::Decode(err.to_string())
        } else {
            AnalysisError::Transport(err.to_string())
        }
    }
}
