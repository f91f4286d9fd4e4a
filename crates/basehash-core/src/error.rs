//! Error types for the basehash core.

use thiserror::Error;

/// Errors produced by the Base58 codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Base58Error {
    /// The output buffer cannot hold the encoded text.
    ///
    /// `required` is the exact capacity (terminator included) that makes a
    /// retry succeed.
    #[error("output buffer too small: {required} bytes required")]
    BufferTooSmall { required: usize },

    /// The input or the requested output does not fit the working buffer.
    #[error("capacity exceeded: limit is {limit} bytes")]
    CapacityExceeded { limit: usize },

    /// A byte outside the Base58 alphabet.
    #[error("invalid base58 character 0x{byte:02x} at position {position}")]
    InvalidCharacter { byte: u8, position: usize },

    /// The encode accumulator index would have gone negative.
    #[error("base58 accumulator underflow")]
    Underflow,
}

/// Errors produced by the BLAKE2b context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HashError {
    #[error("invalid blake2b parameters: digest length {digest_len} (1-64), key length {key_len} (0-64)")]
    InvalidParameters { digest_len: usize, key_len: usize },

    #[error("digest buffer too small: expected {required}, got {got}")]
    OutputTooSmall { required: usize, got: usize },
}

/// Any error from the core primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("base58: {0}")]
    Base58(#[from] Base58Error),

    #[error("blake2b: {0}")]
    Hash(#[from] HashError),
}
