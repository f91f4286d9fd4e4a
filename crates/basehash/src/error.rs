//! Error types for the byte-level API.

use basehash_core::{Base58Error, CoreError, HashError};
use thiserror::Error;

/// Errors surfaced by the byte-level contracts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Error from one of the primitives.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A declared length does not match the slice it describes.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<Base58Error> for Error {
    fn from(e: Base58Error) -> Self {
        Error::Core(e.into())
    }
}

impl From<HashError> for Error {
    fn from(e: HashError) -> Self {
        Error::Core(e.into())
    }
}

/// Result type for byte-level operations.
pub type Result<T> = std::result::Result<T, Error>;
