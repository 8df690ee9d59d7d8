//! Error handling for key generation and key file operations

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key-specific errors
#[derive(Debug, Error)]
pub enum KeyError {
    /// The operating system entropy source failed or returned unusable output
    #[error("Entropy unavailable: {0}")]
    EntropyUnavailable(String),

    /// I/O operation on a key file failed
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        /// Path the failing operation targeted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Key material of the wrong length
    #[error("Invalid key size: expected {expected} bytes, got {actual}")]
    InvalidKeySize {
        /// Expected key size in bytes
        expected: usize,
        /// Actual key size in bytes
        actual: usize,
    },

    /// Hex text that does not decode to bytes
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),
}

impl KeyError {
    /// Create an `Io` error bound to the path it occurred on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an `EntropyUnavailable` error
    pub fn entropy(msg: impl Into<String>) -> Self {
        Self::EntropyUnavailable(msg.into())
    }
}

impl From<hex::FromHexError> for KeyError {
    fn from(err: hex::FromHexError) -> Self {
        Self::InvalidHex(err.to_string())
    }
}

/// Result type for key operations
pub type Result<T> = std::result::Result<T, KeyError>;
