//! Test fixtures and helpers.
//!
//! Byte patterns from the published BLAKE2b test vectors and a small hashing
//! fixture for chunked-update tests.

use basehash_core::{Base58Codec, Base58Error, Blake2b, Blake2bDigest, MAX_DIGEST_BYTES};

/// Bytes `0, 1, 2, ...` wrapping at 256.
///
/// The message and key pattern of the BLAKE2b reference test vectors.
pub fn sequential(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

/// The 64-byte key used by the keyed reference vectors.
pub fn reference_key() -> Vec<u8> {
    sequential(64)
}

/// A byte pattern that can be stored in a `static` vector table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Literal bytes.
    Literal(&'static [u8]),
    /// [`sequential`] bytes of the given length.
    Sequential(usize),
}

impl Pattern {
    /// Materialize the bytes.
    pub fn bytes(&self) -> Vec<u8> {
        match self {
            Pattern::Literal(bytes) => bytes.to_vec(),
            Pattern::Sequential(len) => sequential(*len),
        }
    }
}

/// Split `message` into consecutive pieces, cycling through `sizes`.
///
/// A zero size is treated as one byte.
pub fn split_cycling<'a>(message: &'a [u8], sizes: &[usize]) -> Vec<&'a [u8]> {
    let mut pieces = Vec::new();
    let mut rest = message;
    let mut sizes = sizes.iter().copied().map(|s| s.max(1)).cycle();
    while !rest.is_empty() {
        let take = sizes.next().unwrap_or(rest.len()).min(rest.len());
        let (piece, tail) = rest.split_at(take);
        pieces.push(piece);
        rest = tail;
    }
    pieces
}

/// A BLAKE2b configuration under test.
#[derive(Debug, Clone)]
pub struct HashFixture {
    pub digest_len: usize,
    pub key: Vec<u8>,
}

impl HashFixture {
    /// Unkeyed hashing with the given digest length.
    pub fn unkeyed(digest_len: usize) -> Self {
        Self {
            digest_len,
            key: Vec::new(),
        }
    }

    /// Keyed hashing with the given digest length.
    pub fn keyed(digest_len: usize, key: &[u8]) -> Self {
        Self {
            digest_len,
            key: key.to_vec(),
        }
    }

    /// 64-byte digests under [`reference_key`].
    pub fn reference_keyed() -> Self {
        Self::keyed(MAX_DIGEST_BYTES, &reference_key())
    }

    fn context(&self) -> Blake2b {
        Blake2b::with_key(self.digest_len, &self.key).expect("fixture parameters must be valid")
    }

    /// Hash `message` with a single update.
    pub fn one_shot(&self, message: &[u8]) -> Blake2bDigest {
        let mut ctx = self.context();
        ctx.update(message);
        ctx.finalize()
    }

    /// Hash `message` fed in pieces per [`split_cycling`].
    pub fn chunked(&self, message: &[u8], sizes: &[usize]) -> Blake2bDigest {
        let mut ctx = self.context();
        for piece in split_cycling(message, sizes) {
            ctx.update(piece);
        }
        ctx.finalize()
    }
}

impl Default for HashFixture {
    fn default() -> Self {
        Self::unkeyed(MAX_DIGEST_BYTES)
    }
}

/// Encode the way a buffer-managing caller does: start with `initial`
/// bytes of capacity and retry once with the size reported on
/// [`Base58Error::BufferTooSmall`].
///
/// Returns the NUL-terminated output and the number of attempts.
pub fn encode_with_retry(
    codec: &Base58Codec,
    data: &[u8],
    initial: usize,
) -> Result<(Vec<u8>, usize), Base58Error> {
    let mut out = vec![0u8; initial];
    match codec.encode_into(data, &mut out) {
        Ok(written) => {
            out.truncate(written);
            Ok((out, 1))
        }
        Err(Base58Error::BufferTooSmall { required }) => {
            out.resize(required, 0);
            let written = codec.encode_into(data, &mut out)?;
            out.truncate(written);
            Ok((out, 2))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_wraps() {
        let bytes = sequential(258);
        assert_eq!(bytes[0], 0);
        assert_eq!(bytes[255], 255);
        assert_eq!(bytes[256], 0);
        assert_eq!(bytes[257], 1);
    }

    #[test]
    fn test_split_cycling() {
        let message = sequential(10);
        let pieces = split_cycling(&message, &[3, 1]);
        let lens: Vec<_> = pieces.iter().map(|p| p.len()).collect();
        assert_eq!(lens, vec![3, 1, 3, 1, 2]);
        assert_eq!(pieces.concat(), message);

        assert_eq!(split_cycling(&message, &[0]).len(), 10);
        assert_eq!(split_cycling(&message, &[]).len(), 1);
        assert!(split_cycling(&[], &[4]).is_empty());
    }

    #[test]
    fn test_single_byte_updates_match() {
        let fixture = HashFixture::reference_keyed();
        let message = sequential(300);
        assert_eq!(fixture.chunked(&message, &[1]), fixture.one_shot(&message));
    }

    #[test]
    fn test_block_aligned_updates_match() {
        let fixture = HashFixture::default();
        for len in [127, 128, 129, 255, 256, 257, 384] {
            let message = sequential(len);
            let expected = fixture.one_shot(&message);
            assert_eq!(fixture.chunked(&message, &[128]), expected, "len {}", len);
            assert_eq!(fixture.chunked(&message, &[64, 64]), expected, "len {}", len);
            assert_eq!(fixture.chunked(&message, &[127, 1]), expected, "len {}", len);
        }
    }

    #[test]
    fn test_encode_with_retry() {
        let codec = Base58Codec::new();
        let data = [0x00, 0x00, 0x28, 0x7f, 0xb4, 0xcd];

        let (out, attempts) = encode_with_retry(&codec, &data, 1).unwrap();
        assert_eq!(attempts, 2);
        assert_eq!(out, b"11233QC4\0");

        let (out, attempts) = encode_with_retry(&codec, &data, 64).unwrap();
        assert_eq!(attempts, 1);
        assert_eq!(out, b"11233QC4\0");
    }
}
