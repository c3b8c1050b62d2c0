//! Error types for opsdeck
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (settings file, log directory)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
