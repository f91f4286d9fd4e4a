//! # basehash core
//!
//! Pure primitives over caller-supplied byte buffers: a Base58 codec using
//! the Bitcoin alphabet and the BLAKE2b hash function.
//!
//! This crate contains no I/O and never grows its working memory. Every
//! buffer is either a fixed-size array sized at compile time or a slice
//! handed in by the caller, and every overflow is reported as an error.
//!
//! ## Key Types
//!
//! - [`Base58Codec`] - Stateless Base58 encoder/decoder with a configured limit
//! - [`Blake2b`] - Incremental BLAKE2b context (optionally keyed)
//! - [`Blake2bDigest`] - A 1 to 64 byte BLAKE2b output
//!
//! ## Example
//!
//! ```rust
//! use basehash_core::{blake2b, Base58Codec};
//!
//! let codec = Base58Codec::new();
//! let text = codec.encode(&[0x00, 0x00, 0x01]).unwrap();
//! assert_eq!(text, "112");
//!
//! let digest = blake2b(32, b"", b"abc").unwrap();
//! assert_eq!(digest.len(), 32);
//! ```

pub mod base58;
pub mod blake2b;
pub mod config;
pub mod digest;
pub mod error;
pub mod words;

pub use base58::{terminated, Base58Codec, ALPHABET, BASE58_DECODE_MAXLEN};
pub use blake2b::{blake2b, Blake2b, BLOCK_BYTES, MAX_DIGEST_BYTES, MAX_KEY_BYTES, ROUNDS};
pub use config::Base58Config;
pub use digest::Blake2bDigest;
pub use error::{Base58Error, CoreError, HashError};
