//! Byte-level contracts for callers that manage their own buffers.
//!
//! Each function takes an output slice plus a declared size, reports
//! success as a `bool`, and writes sizes back through `&mut usize` the way
//! address and content-hash layers built on raw buffers expect. Failures are
//! logged at debug level; the typed error is available from the `try_`
//! variants.

use basehash_core::{terminated, Base58Codec, Base58Error, Blake2b, CoreError};

use crate::error::{Error, Result};

/// Base58-encode `data` into `b58`, NUL-terminated.
///
/// `b58sz` is the capacity on entry (clamped to `b58.len()`). On success it
/// becomes the number of bytes written, terminator included. When the
/// capacity is too small it becomes the exact capacity needed.
pub fn base58_encode(b58: &mut [u8], b58sz: &mut usize, data: &[u8]) -> bool {
    match try_base58_encode(b58, *b58sz, data) {
        Ok(written) => {
            *b58sz = written;
            true
        }
        Err(Error::Core(CoreError::Base58(Base58Error::BufferTooSmall { required }))) => {
            tracing::debug!(required, requested = *b58sz, "base58_encode: buffer too small");
            *b58sz = required;
            false
        }
        Err(err) => {
            tracing::debug!(%err, requested = *b58sz, input_len = data.len(), "base58_encode failed");
            false
        }
    }
}

/// Typed form of [`base58_encode`], returning the bytes written.
pub fn try_base58_encode(b58: &mut [u8], capacity: usize, data: &[u8]) -> Result<usize> {
    let capacity = capacity.min(b58.len());
    Ok(Base58Codec::new().encode_into(data, &mut b58[..capacity])?)
}

/// Base58-decode `b58` into `bin`.
///
/// `b58sz` is the text length, or 0 to read up to the first NUL. `binsz`
/// is the decode width on entry and the canonical decoded length on
/// success; the decoded bytes are then `bin[..*binsz]`.
pub fn base58_decode(bin: &mut [u8], binsz: &mut usize, b58: &[u8], b58sz: usize) -> bool {
    match try_base58_decode(bin, *binsz, b58, b58sz) {
        Ok(len) => {
            *binsz = len;
            true
        }
        Err(Error::Core(CoreError::Base58(Base58Error::InvalidCharacter { byte, position }))) => {
            tracing::debug!(position, byte, requested = *binsz, "base58_decode: invalid character");
            false
        }
        Err(err) => {
            tracing::debug!(%err, requested = *binsz, text_len = b58sz, "base58_decode failed");
            false
        }
    }
}

/// Typed form of [`base58_decode`], returning the canonical length.
pub fn try_base58_decode(bin: &mut [u8], width: usize, b58: &[u8], b58sz: usize) -> Result<usize> {
    let text = match b58sz {
        0 => terminated(b58),
        n => b58.get(..n).ok_or_else(|| {
            Error::InvalidArgument(format!("text length {} exceeds buffer of {}", n, b58.len()))
        })?,
    };
    let buf_len = bin.len();
    let out = bin.get_mut(..width).ok_or_else(|| {
        Error::InvalidArgument(format!("decode width {} exceeds buffer of {}", width, buf_len))
    })?;
    Ok(Base58Codec::new().decode_into(text, out)?)
}

/// One-shot BLAKE2b of `message` into `hash[..hash_size]`.
///
/// `key` may be empty. Returns false for out-of-range sizes or a `hash`
/// slice shorter than `hash_size`; `hash` is left untouched then.
pub fn blake2b(hash: &mut [u8], hash_size: usize, key: &[u8], message: &[u8]) -> bool {
    match try_blake2b(hash, hash_size, key, message) {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(%err, requested = hash_size, key_len = key.len(), "blake2b failed");
            false
        }
    }
}

/// Typed form of [`blake2b`], returning the bytes written.
pub fn try_blake2b(hash: &mut [u8], hash_size: usize, key: &[u8], message: &[u8]) -> Result<usize> {
    let mut ctx = Blake2b::with_key(hash_size, key)?;
    ctx.update(message);
    Ok(ctx.finalize_into(hash)?)
}
