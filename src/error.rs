//! Error types for identicon generation.

use std::path::PathBuf;

use thiserror::Error;

/// Why a hash string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashFormatError {
    /// The hash contains a character that is not a hex digit.
    #[error("Invalid hash: contains non-hex characters")]
    NotHex,

    /// The hash is made of hex digits but is too short to drive every
    /// selection.
    #[error("Invalid hash: too short, expected at least {min} hex digits, got {len}")]
    TooShort { len: usize, min: usize },
}

/// Main error type for identicon operations.
#[derive(Error, Debug)]
pub enum IdenticonError {
    #[error(transparent)]
    InvalidHashFormat(#[from] HashFormatError),

    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error with {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, IdenticonError>;
