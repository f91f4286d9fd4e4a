//! Proptest generators for property-based testing.

use proptest::prelude::*;

use basehash_core::{MAX_DIGEST_BYTES, MAX_KEY_BYTES};

use crate::fixtures::HashFixture;

/// Most significant bytes the default codec can encode.
pub const MAX_ENCODABLE_SIGNIFICANT: usize = 92;

/// Generate arbitrary bytes up to `max_len`.
pub fn bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate bytes the default codec can encode, with up to `max_zeros`
/// leading zero bytes in front.
pub fn encodable_bytes(max_zeros: usize) -> impl Strategy<Value = Vec<u8>> {
    (0..=max_zeros, bytes(MAX_ENCODABLE_SIGNIFICANT)).prop_map(|(zeros, tail)| {
        let mut data = vec![0u8; zeros];
        data.extend(tail);
        data
    })
}

/// Generate well-formed Base58 text.
pub fn base58_text() -> impl Strategy<Value = String> {
    "[1-9A-HJ-NP-Za-km-z]{0,40}".prop_map(String::from)
}

/// Generate a byte outside the Base58 alphabet that is easy to mistype
/// for one inside it.
pub fn ambiguous_char() -> impl Strategy<Value = u8> {
    prop_oneof![
        Just(b'0'),
        Just(b'O'),
        Just(b'I'),
        Just(b'l'),
        Just(b'+'),
        Just(b'/'),
        Just(b' '),
    ]
}

/// Generate a valid digest length.
pub fn digest_len() -> impl Strategy<Value = usize> {
    1..=MAX_DIGEST_BYTES
}

/// Generate a valid key (possibly empty).
pub fn key() -> impl Strategy<Value = Vec<u8>> {
    bytes(MAX_KEY_BYTES)
}

/// Parameters for one hashing run.
#[derive(Debug, Clone)]
pub struct HashParams {
    pub digest_len: usize,
    pub key: Vec<u8>,
    pub message: Vec<u8>,
    /// Update sizes, cycled over the message.
    pub chunks: Vec<usize>,
}

impl HashParams {
    /// The fixture these parameters describe.
    pub fn fixture(&self) -> HashFixture {
        HashFixture::keyed(self.digest_len, &self.key)
    }
}

impl Arbitrary for HashParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            digest_len(),
            key(),
            bytes(600),
            prop::collection::vec(1usize..=200, 1..4), // chunk sizes
        )
            .prop_map(|(digest_len, key, message, chunks)| HashParams {
                digest_len,
                key,
                message,
                chunks,
            })
            .boxed()
    }
}
