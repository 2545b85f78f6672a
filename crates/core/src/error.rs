use std::io;

/// Errors that can occur while composing simulation launch commands
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown runner name: {0}")]
    UnknownRunner(String),

    #[error("{runner} requires a resolved device index from the previous runner in the pipeline")]
    UnresolvedPredecessor { runner: &'static str },

    #[error("{runner} requires a non-negative device index, got {index}")]
    InvalidDeviceIndex { runner: &'static str, index: i64 },

    #[error("Domain list is empty; the phy process must count itself as a domain")]
    EmptyDomains,

    #[error("Manifest error: {0}")]
    ManifestError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for bsim-runner operations
pub type Result<T> = std::result::Result<T, Error>;
