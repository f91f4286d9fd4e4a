//! BLAKE2b digest value.

use std::fmt;

use crate::blake2b::MAX_DIGEST_BYTES;

/// A BLAKE2b digest of 1 to 64 bytes.
///
/// Only a zeroed fallback context produces an empty digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Blake2bDigest {
    bytes: [u8; MAX_DIGEST_BYTES],
    len: usize,
}

impl Blake2bDigest {
    /// Wrap the first `len` bytes of `bytes`; the rest must be zero.
    pub(crate) fn new(bytes: [u8; MAX_DIGEST_BYTES], len: usize) -> Self {
        Self { bytes, len }
    }

    /// Copy a digest out of a slice of 1 to 64 bytes.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.is_empty() || slice.len() > MAX_DIGEST_BYTES {
            return None;
        }
        let mut bytes = [0u8; MAX_DIGEST_BYTES];
        bytes[..slice.len()].copy_from_slice(slice);
        Some(Self::new(bytes, slice.len()))
    }

    /// Get the digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Digest length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True only for the output of a zeroed context.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        Self::from_slice(&bytes).ok_or(hex::FromHexError::InvalidStringLength)
    }
}

impl fmt::Debug for Blake2bDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.to_hex();
        write!(f, "Blake2b-{}({})", self.len * 8, &hex[..hex.len().min(16)])
    }
}

impl fmt::Display for Blake2bDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Blake2bDigest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
