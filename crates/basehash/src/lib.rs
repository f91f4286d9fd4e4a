//! # basehash
//!
//! Base58 (Bitcoin alphabet) and BLAKE2b for callers working with raw byte
//! buffers, such as address encoders and content-hashing layers.
//!
//! ## Overview
//!
//! - **Base58**: binary to text and back, one `'1'` per leading zero byte,
//!   bounded by fixed working buffers
//! - **BLAKE2b**: 1 to 64 byte digests, optional key, incremental updates
//! - **Byte-level contracts**: the [`compat`] functions take output slices
//!   with in/out sizes and return `bool`, reporting the exact capacity to
//!   retry with when an encode buffer is too small
//!
//! ## Usage
//!
//! ```rust
//! use basehash::compat;
//!
//! let mut text = [0u8; 8];
//! let mut size = 3;
//! assert!(!compat::base58_encode(&mut text, &mut size, &[0x00, 0x00, 0x01]));
//! assert_eq!(size, 4); // three characters plus the terminator
//!
//! assert!(compat::base58_encode(&mut text, &mut size, &[0x00, 0x00, 0x01]));
//! assert_eq!(&text[..size], b"112\0");
//!
//! let mut digest = [0u8; 32];
//! assert!(compat::blake2b(&mut digest, 32, b"", b"abc"));
//! ```
//!
//! ## Re-exports
//!
//! - `basehash::core` - The primitives ([`Base58Codec`], [`Blake2b`], ...)

pub mod compat;
pub mod error;

// Re-export component crate
pub use basehash_core as core;

pub use error::{Error, Result};

// Re-export commonly used core types
pub use basehash_core::{
    blake2b, Base58Codec, Base58Config, Base58Error, Blake2b, Blake2bDigest, HashError,
    BASE58_DECODE_MAXLEN,
};
