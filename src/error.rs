//! Error types for crowdin-progress

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the update pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// A required environment variable is absent or empty
    #[error("Missing environment variable: {0}")]
    MissingVariable(&'static str),

    /// An environment variable is present but not usable
    #[error("Invalid environment variable {name}: {reason}")]
    InvalidVariable {
        /// Variable name
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The target file does not exist
    #[error("The file {} doesn't exists", .0.display())]
    MissingFile(PathBuf),

    /// The Crowdin API returned a non-success status
    #[error("Crowdin API error ({status}): {body}")]
    CrowdinApi {
        /// HTTP status code
        status: u16,
        /// Response body, as returned by the service
        body: String,
    },

    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem failure while reading or writing the target file
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being read or written
        path: String,
        /// Underlying error
        source: std::io::Error,
    },
}
