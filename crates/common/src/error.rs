//! Error types for the subsweep pipeline

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read wordlist {}: {source}", .path.display())]
    Wordlist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open output {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Result type alias for subsweep operations
pub type SweepResult<T> = Result<T, SweepError>;
