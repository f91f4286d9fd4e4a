//! BLAKE2b (RFC 7693) over 128-byte blocks.
//!
//! A context is created for a fixed digest length, optionally keyed, fed any
//! number of messages, and consumed by [`Blake2b::finalize`]. Consuming the
//! context makes "no update after final" a compile-time guarantee.

use std::fmt;

use crate::digest::Blake2bDigest;
use crate::error::HashError;

/// Block size in bytes.
pub const BLOCK_BYTES: usize = 128;

/// Largest digest length in bytes.
pub const MAX_DIGEST_BYTES: usize = 64;

/// Largest key length in bytes.
pub const MAX_KEY_BYTES: usize = 64;

/// Compression rounds per block.
pub const ROUNDS: usize = 12;

const IV: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

/// Message word schedule, one row per round. Rows 10 and 11 repeat 0 and 1.
const SIGMA: [[usize; 16]; ROUNDS] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
];

/// Parameter block word 0 for fanout 1, depth 1, no salt or personalization.
const PARAM_FANOUT_DEPTH: u64 = 0x0101_0000;

/// The G quarter-round.
#[inline(always)]
fn mix(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(24);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(63);
}

/// Incremental BLAKE2b context.
#[derive(Clone)]
pub struct Blake2b {
    hash: [u64; 8],
    /// Bytes absorbed so far, as a 128-bit little-endian counter.
    offset: [u64; 2],
    input: [u8; BLOCK_BYTES],
    input_idx: usize,
    digest_len: usize,
}

impl Blake2b {
    /// Create an unkeyed context producing `digest_len` bytes.
    pub fn new(digest_len: usize) -> Result<Self, HashError> {
        Self::with_key(digest_len, &[])
    }

    /// Create a keyed context producing `digest_len` bytes.
    ///
    /// The key is padded to a full first block, which is compressed lazily
    /// by the next `update` or by `finalize`.
    pub fn with_key(digest_len: usize, key: &[u8]) -> Result<Self, HashError> {
        if digest_len == 0 || digest_len > MAX_DIGEST_BYTES || key.len() > MAX_KEY_BYTES {
            return Err(HashError::InvalidParameters {
                digest_len,
                key_len: key.len(),
            });
        }

        let mut hash = IV;
        hash[0] ^= PARAM_FANOUT_DEPTH ^ ((key.len() as u64) << 8) ^ digest_len as u64;

        let mut ctx = Self {
            hash,
            offset: [0; 2],
            input: [0; BLOCK_BYTES],
            input_idx: 0,
            digest_len,
        };
        if !key.is_empty() {
            ctx.update(key);
            ctx.input_idx = BLOCK_BYTES;
        }
        Ok(ctx)
    }

    /// Create a context, falling back to the inert zeroed state on invalid
    /// parameters.
    ///
    /// The zeroed context accepts updates and finalizes to an empty digest.
    /// Prefer [`Blake2b::with_key`], which reports the error.
    pub fn new_or_zeroed(digest_len: usize, key: &[u8]) -> Self {
        Self::with_key(digest_len, key).unwrap_or_else(|err| {
            tracing::warn!(%err, "using zeroed blake2b context");
            Self::zeroed()
        })
    }

    fn zeroed() -> Self {
        Self {
            hash: [0; 8],
            offset: [0; 2],
            input: [0; BLOCK_BYTES],
            input_idx: 0,
            digest_len: 0,
        }
    }

    /// True for the fallback context of [`Blake2b::new_or_zeroed`].
    pub fn is_zeroed(&self) -> bool {
        self.digest_len == 0
    }

    /// Digest length in bytes, 0 for a zeroed context.
    pub fn digest_len(&self) -> usize {
        self.digest_len
    }

    fn increment_offset(&mut self, n: usize) {
        let (low, carried) = self.offset[0].overflowing_add(n as u64);
        self.offset[0] = low;
        if carried {
            self.offset[1] = self.offset[1].wrapping_add(1);
        }
    }

    /// Absorb `message`.
    ///
    /// A full buffer is only compressed once more input arrives, so the last
    /// block is always left for `finalize`.
    pub fn update(&mut self, mut message: &[u8]) {
        while !message.is_empty() {
            if self.input_idx == BLOCK_BYTES {
                self.increment_offset(BLOCK_BYTES);
                self.compress(false);
                self.input = [0; BLOCK_BYTES];
                self.input_idx = 0;
            }

            let take = (BLOCK_BYTES - self.input_idx).min(message.len());
            self.input[self.input_idx..self.input_idx + take].copy_from_slice(&message[..take]);
            self.input_idx += take;
            message = &message[take..];
        }
    }

    /// Pad and compress the last block, then extract the digest.
    pub fn finalize(mut self) -> Blake2bDigest {
        self.increment_offset(self.input_idx);
        self.input[self.input_idx..].fill(0);
        self.compress(true);

        let mut bytes = [0u8; MAX_DIGEST_BYTES];
        for (chunk, word) in bytes.chunks_exact_mut(8).zip(self.hash) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        bytes[self.digest_len..].fill(0);
        Blake2bDigest::new(bytes, self.digest_len)
    }

    /// Finalize into `out`, returning the number of bytes written.
    pub fn finalize_into(self, out: &mut [u8]) -> Result<usize, HashError> {
        let required = self.digest_len;
        if out.len() < required {
            return Err(HashError::OutputTooSmall {
                required,
                got: out.len(),
            });
        }
        out[..required].copy_from_slice(self.finalize().as_bytes());
        Ok(required)
    }

    fn compress(&mut self, last: bool) {
        let mut m = [0u64; 16];
        for (word, chunk) in m.iter_mut().zip(self.input.chunks_exact(8)) {
            let mut le = [0u8; 8];
            le.copy_from_slice(chunk);
            *word = u64::from_le_bytes(le);
        }

        let mut v = [0u64; 16];
        v[..8].copy_from_slice(&self.hash);
        v[8..].copy_from_slice(&IV);
        v[12] ^= self.offset[0];
        v[13] ^= self.offset[1];
        if last {
            v[14] = !v[14];
        }

        for s in &SIGMA {
            mix(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
            mix(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
            mix(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
            mix(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);
            mix(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
            mix(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
            mix(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
            mix(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
        }

        for i in 0..8 {
            self.hash[i] ^= v[i] ^ v[i + 8];
        }
    }
}

impl fmt::Debug for Blake2b {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blake2b")
            .field("digest_len", &self.digest_len)
            .field("buffered", &self.input_idx)
            .finish_non_exhaustive()
    }
}

/// One-shot BLAKE2b: init, a single update, final.
pub fn blake2b(digest_len: usize, key: &[u8], message: &[u8]) -> Result<Blake2bDigest, HashError> {
    let mut ctx = Blake2b::with_key(digest_len, key)?;
    ctx.update(message);
    Ok(ctx.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EMPTY_512: &str = "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce";
    const ABC_512: &str = "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d17d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923";
    const ABC_256: &str = "bddd813c634239723171ef3fee98579b94964e3bb1cb3e427262c8c068d52319";
    const KEYED_000102: &str = "33d0825dddf7ada99b0e7e307104ad07ca9cfd9692214f1561356315e784f3e5a17e364ae9dbb14cb2036df932b77f4b292761365fb328de7afdc6d8998f5fc1";
    const KEYED_EMPTY: &str = "10ebb67700b1868efb4417987acf4690ae9d972fb7a590c2f02871799aaa4786b5e996e8f0f4eb981fc214b005f42d2ff4233499391653df7aefcbc13fc51568";

    fn sequential(len: usize) -> Vec<u8> {
        (0..len).map(|i| i as u8).collect()
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(blake2b(64, b"", b"").unwrap().to_hex(), EMPTY_512);
    }

    #[test]
    fn test_abc() {
        assert_eq!(blake2b(64, b"", b"abc").unwrap().to_hex(), ABC_512);
    }

    #[test]
    fn test_keyed_vectors() {
        let key = sequential(64);
        assert_eq!(blake2b(64, &key, b"").unwrap().to_hex(), KEYED_EMPTY);
        assert_eq!(blake2b(64, &key, &sequential(3)).unwrap().to_hex(), KEYED_000102);
    }

    #[test]
    fn test_digest_length_changes_output() {
        let short = blake2b(32, b"", b"abc").unwrap();
        let long = blake2b(64, b"", b"abc").unwrap();
        assert_eq!(short.to_hex(), ABC_256);
        assert_eq!(short.len(), 32);
        // The parameter block differs, so a 32-byte digest is not a prefix.
        assert_ne!(short.as_bytes(), &long.as_bytes()[..32]);
    }

    #[test]
    fn test_block_boundaries() {
        // Exactly one block stays buffered until finalize.
        let one_block = sequential(128);
        let mut ctx = Blake2b::new(64).unwrap();
        ctx.update(&one_block);
        assert_eq!(ctx.input_idx, BLOCK_BYTES);
        assert_eq!(ctx.offset, [0, 0]);
        assert_eq!(
            ctx.finalize().to_hex(),
            "2319e3789c47e2daa5fe807f61bec2a1a6537fa03f19ff32e87eecbfd64b7e0e8ccff439ac333b040f19b0c4ddd11a61e24ac1fe0f10a039806c5dcc0da3d115"
        );

        let mut ctx = Blake2b::new(64).unwrap();
        ctx.update(&sequential(129));
        assert_eq!(ctx.input_idx, 1);
        assert_eq!(ctx.offset, [128, 0]);
        assert_eq!(
            ctx.finalize().to_hex(),
            "f59711d44a031d5f97a9413c065d1e614c417ede998590325f49bad2fd444d3e4418be19aec4e11449ac1a57207898bc57d76a1bcf3566292c20c683a5c4648f"
        );
    }

    #[test]
    fn test_key_block_is_lazy() {
        let ctx = Blake2b::with_key(64, b"key").unwrap();
        assert_eq!(ctx.input_idx, BLOCK_BYTES);
        assert_eq!(ctx.offset, [0, 0]);
        assert_eq!(&ctx.input[..3], b"key");
        assert!(ctx.input[3..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_keyed_full_block_message() {
        let key = sequential(64);
        assert_eq!(
            blake2b(64, &key, &sequential(128)).unwrap().to_hex(),
            "72065ee4dd91c2d8509fa1fc28a37c7fc9fa7d5b3f8ad3d0d7a25626b57b1b44788d4caf806290425f9890a3a2a35a905ab4b37acfd0da6e4517b2525c9651e4"
        );
    }

    #[test]
    fn test_offset_carries_into_high_word() {
        let mut ctx = Blake2b::new(64).unwrap();
        ctx.offset = [u64::MAX - 63, 0];
        ctx.increment_offset(BLOCK_BYTES);
        assert_eq!(ctx.offset, [64, 1]);
    }

    #[test]
    fn test_invalid_parameters() {
        for (digest_len, key_len) in [(0, 0), (65, 0), (32, 65), (0, 65)] {
            let key = vec![0u8; key_len];
            assert_eq!(
                Blake2b::with_key(digest_len, &key).unwrap_err(),
                HashError::InvalidParameters {
                    digest_len,
                    key_len
                }
            );
        }
        assert!(Blake2b::with_key(1, &[0u8; 64]).is_ok());
        assert!(Blake2b::new(64).is_ok());
    }

    #[test]
    fn test_zeroed_fallback() {
        let mut ctx = Blake2b::new_or_zeroed(0, b"");
        assert!(ctx.is_zeroed());
        ctx.update(&sequential(300));
        let digest = ctx.finalize();
        assert!(digest.is_empty());

        let ctx = Blake2b::new_or_zeroed(64, b"");
        assert!(!ctx.is_zeroed());
        assert_eq!(ctx.finalize().to_hex(), EMPTY_512);
    }

    #[test]
    fn test_finalize_into() {
        let mut out = [0u8; 40];
        let mut ctx = Blake2b::new(32).unwrap();
        ctx.update(b"abc");
        assert_eq!(ctx.finalize_into(&mut out), Ok(32));
        assert_eq!(hex::encode(&out[..32]), ABC_256);
        assert_eq!(&out[32..], &[0u8; 8]);

        let mut short = [0u8; 31];
        assert_eq!(
            Blake2b::new(32).unwrap().finalize_into(&mut short),
            Err(HashError::OutputTooSmall {
                required: 32,
                got: 31
            })
        );
    }

    #[test]
    fn test_update_empty_is_noop() {
        let mut ctx = Blake2b::new(64).unwrap();
        ctx.update(b"");
        ctx.update(b"abc");
        ctx.update(b"");
        assert_eq!(ctx.finalize().to_hex(), ABC_512);
    }

    proptest! {
        #[test]
        fn prop_chunked_equals_one_shot(
            message in prop::collection::vec(any::<u8>(), 0..600),
            chunk in 1usize..200,
        ) {
            let expected = blake2b(64, b"", &message).unwrap();
            let mut ctx = Blake2b::new(64).unwrap();
            for piece in message.chunks(chunk) {
                ctx.update(piece);
            }
            prop_assert_eq!(ctx.finalize(), expected);
        }
    }
}
