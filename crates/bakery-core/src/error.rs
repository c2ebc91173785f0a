//! Error types for the Bakery API.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for bakery operations.
#[derive(Error, Debug)]
pub enum BakeryError {
    /// Reading a data file failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file or payload was not valid JSON for the expected shape.
    #[error("Failed to parse {context}: {message}")]
    Parse { context: String, message: String },

    /// The service could not be reached.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The service answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
}

impl BakeryError {
    /// Returns true if retrying the same call could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            BakeryError::Connection(_) => true,
            BakeryError::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Convenience Result type for bakery operations.
pub type Result<T> = std::result::Result<T, BakeryError>;

impl From<serde_json::Error> for BakeryError {
    fn from(err: serde_json::Error) -> Self {
        BakeryError::Parse {
            context: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}
