//! Error types for the crate.

use thiserror::Error;

/// Main error type.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move '{input}' (expected r, p or s)")]
    InvalidMove { input: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("session already terminated")]
    SessionTerminated,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed history record: {0}")]
    Decode(#[from] serde_json::Error),

    #[cfg(feature = "cli")]
    #[error("terminal error: {0}")]
    Terminal(#[from] rustyline::error::ReadlineError),

    #[cfg(feature = "cli")]
    #[error("could not install signal handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

/// Result alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;
