//! Raft Log Store Error Types
//!
//! The consensus engine only needs to branch on three conditions: a missing
//! log index, a missing metadata key and a corrupt record. Everything else is
//! an engine or configuration failure that is handed back untouched.

use config::ConfigError;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Requested log index is not present (compacted or never written)
    #[error("log entry not found at index {0}")]
    LogNotFound(u64),

    /// Requested metadata key is not present
    #[error("not found")]
    KeyNotFound,

    /// Stored value is shorter than the entry header
    #[error("invalid buffer: expected at least 17 bytes, received {len} bytes")]
    InvalidBuffer { len: usize },

    /// Embedded database errors
    #[error(transparent)]
    Engine(#[from] sled::Error),

    /// Malformed integer value or log key
    #[error("Value convert failed")]
    Convert(#[from] ConvertError),

    /// Peer list (de)serialization failures
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The database was created with another key encoding
    #[error("key encoding mismatch (stored: {stored}, configured: {configured})")]
    KeyEncodingMismatch {
        stored: &'static str,
        configured: &'static str,
    },

    /// Configuration source failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Configuration validation failures
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// True for the two expected-absence conditions.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::LogNotFound(_) | Error::KeyNotFound)
    }
}

/// Error type for value conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Invalid input length error
    ///
    /// This occurs when an encoded index does not have the width its key
    /// encoding requires.
    #[error("invalid byte length: expected {expected} bytes, received {actual} bytes")]
    InvalidLength { expected: usize, actual: usize },

    /// Generic conversion failure with detailed message
    ///
    /// Wraps underlying parsing/conversion errors with context information
    #[error("conversion failure: {0}")]
    ConversionFailure(String),
}
