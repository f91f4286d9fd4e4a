//! Golden test vectors for bit-exact verification.
//!
//! BLAKE2b entries come from the reference implementation (RFC 7693 and the
//! published keyed test vectors); Base58 entries match the Bitcoin alphabet
//! encodings used across wallet implementations.

use basehash_core::{blake2b, Base58Codec};

use crate::fixtures::Pattern;

/// A Base58 golden vector.
#[derive(Debug, Clone, Copy)]
pub struct Base58Vector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Raw bytes (hex).
    pub bytes_hex: &'static str,
    /// Expected encoding.
    pub text: &'static str,
}

/// A BLAKE2b golden vector.
#[derive(Debug, Clone, Copy)]
pub struct Blake2bVector {
    pub name: &'static str,
    pub digest_len: usize,
    pub key: Pattern,
    pub message: Pattern,
    /// Expected digest (hex).
    pub expected: &'static str,
}

/// Get all Base58 golden vectors.
pub fn base58_vectors() -> Vec<Base58Vector> {
    vec![
        Base58Vector {
            name: "empty",
            bytes_hex: "",
            text: "",
        },
        Base58Vector {
            name: "single zero byte",
            bytes_hex: "00",
            text: "1",
        },
        Base58Vector {
            name: "three zero bytes",
            bytes_hex: "000000",
            text: "111",
        },
        Base58Vector {
            name: "ten zero bytes",
            bytes_hex: "00000000000000000000",
            text: "1111111111",
        },
        Base58Vector {
            name: "two zeros then one",
            bytes_hex: "000001",
            text: "112",
        },
        Base58Vector {
            name: "single byte a",
            bytes_hex: "61",
            text: "2g",
        },
        Base58Vector {
            name: "bbb",
            bytes_hex: "626262",
            text: "a3gV",
        },
        Base58Vector {
            name: "ccc",
            bytes_hex: "636363",
            text: "aPEr",
        },
        Base58Vector {
            name: "hello world",
            bytes_hex: "48656c6c6f20576f726c6421",
            text: "2NEpo7TZRRrLZSi2U",
        },
        Base58Vector {
            name: "simply a long string",
            bytes_hex: "73696d706c792061206c6f6e6720737472696e67",
            text: "2cFupjhnEsSn59qHXstmK2ffpLv2",
        },
        Base58Vector {
            name: "p2pkh address payload",
            bytes_hex: "00eb15231dfceb60925886b67d065299925915aeb172c06647",
            text: "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L",
        },
        Base58Vector {
            name: "p2pkh address with version zero",
            bytes_hex: "00010966776006953d5567439e5e39f86a0d273beed61967f6",
            text: "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM",
        },
        Base58Vector {
            name: "eight byte counter",
            bytes_hex: "0123456789abcdef",
            text: "C3CPq7c8PY",
        },
        Base58Vector {
            name: "leading zeros then value",
            bytes_hex: "000000287fb4cd",
            text: "111233QC4",
        },
        Base58Vector {
            name: "all ones word",
            bytes_hex: "ffffffff",
            text: "7YXq9G",
        },
        Base58Vector {
            name: "five bytes",
            bytes_hex: "516b6fcd0f",
            text: "ABnLTmg",
        },
        Base58Vector {
            name: "nine bytes with inner zero",
            bytes_hex: "bf4f89001e670274dd",
            text: "3SEo3LWLoPntC",
        },
        Base58Vector {
            name: "ten bytes",
            bytes_hex: "ecac89cad93923c02321",
            text: "EJDM8drfXA6uyA",
        },
        Base58Vector {
            name: "four bytes small",
            bytes_hex: "10c8511e",
            text: "Rt5zm",
        },
    ]
}

/// Get all BLAKE2b golden vectors.
pub fn blake2b_vectors() -> Vec<Blake2bVector> {
    vec![
        Blake2bVector {
            name: "empty message",
            digest_len: 64,
            key: Pattern::Literal(b""),
            message: Pattern::Literal(b""),
            expected: "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce",
        },
        Blake2bVector {
            name: "abc",
            digest_len: 64,
            key: Pattern::Literal(b""),
            message: Pattern::Literal(b"abc"),
            expected: "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d17d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923",
        },
        Blake2bVector {
            name: "abc 256-bit",
            digest_len: 32,
            key: Pattern::Literal(b""),
            message: Pattern::Literal(b"abc"),
            expected: "bddd813c634239723171ef3fee98579b94964e3bb1cb3e427262c8c068d52319",
        },
        Blake2bVector {
            name: "abc 160-bit",
            digest_len: 20,
            key: Pattern::Literal(b""),
            message: Pattern::Literal(b"abc"),
            expected: "384264f676f39536840523f284921cdc68b6846b",
        },
        Blake2bVector {
            name: "abc 8-bit",
            digest_len: 1,
            key: Pattern::Literal(b""),
            message: Pattern::Literal(b"abc"),
            expected: "6b",
        },
        Blake2bVector {
            name: "empty message 256-bit",
            digest_len: 32,
            key: Pattern::Literal(b""),
            message: Pattern::Literal(b""),
            expected: "0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8",
        },
        Blake2bVector {
            name: "quick brown fox",
            digest_len: 64,
            key: Pattern::Literal(b""),
            message: Pattern::Literal(b"The quick brown fox jumps over the lazy dog"),
            expected: "a8add4bdddfd93e4877d2746e62817b116364a1fa7bc148d95090bc7333b3673f82401cf7aa2e4cb1ecd90296e3f14cb5413f8ed77be73045b13914cdcd6a918",
        },
        Blake2bVector {
            name: "one full block",
            digest_len: 64,
            key: Pattern::Literal(b""),
            message: Pattern::Sequential(128),
            expected: "2319e3789c47e2daa5fe807f61bec2a1a6537fa03f19ff32e87eecbfd64b7e0e8ccff439ac333b040f19b0c4ddd11a61e24ac1fe0f10a039806c5dcc0da3d115",
        },
        Blake2bVector {
            name: "one block plus one byte",
            digest_len: 64,
            key: Pattern::Literal(b""),
            message: Pattern::Sequential(129),
            expected: "f59711d44a031d5f97a9413c065d1e614c417ede998590325f49bad2fd444d3e4418be19aec4e11449ac1a57207898bc57d76a1bcf3566292c20c683a5c4648f",
        },
        Blake2bVector {
            name: "keyed empty message",
            digest_len: 64,
            key: Pattern::Sequential(64),
            message: Pattern::Literal(b""),
            expected: "10ebb67700b1868efb4417987acf4690ae9d972fb7a590c2f02871799aaa4786b5e996e8f0f4eb981fc214b005f42d2ff4233499391653df7aefcbc13fc51568",
        },
        Blake2bVector {
            name: "keyed three bytes",
            digest_len: 64,
            key: Pattern::Sequential(64),
            message: Pattern::Sequential(3),
            expected: "33d0825dddf7ada99b0e7e307104ad07ca9cfd9692214f1561356315e784f3e5a17e364ae9dbb14cb2036df932b77f4b292761365fb328de7afdc6d8998f5fc1",
        },
        Blake2bVector {
            name: "keyed one full block",
            digest_len: 64,
            key: Pattern::Sequential(64),
            message: Pattern::Sequential(128),
            expected: "72065ee4dd91c2d8509fa1fc28a37c7fc9fa7d5b3f8ad3d0d7a25626b57b1b44788d4caf806290425f9890a3a2a35a905ab4b37acfd0da6e4517b2525c9651e4",
        },
        Blake2bVector {
            name: "keyed two full blocks",
            digest_len: 64,
            key: Pattern::Sequential(64),
            message: Pattern::Sequential(256),
            expected: "b72071e096277edebb8ee5134dd3714996307ba3a55aa4733d412abbe28e909e10e57e6fbfb4ef53b3b960518294ff889a90829254412e2a60b85add07a3674f",
        },
        Blake2bVector {
            name: "short key 256-bit",
            digest_len: 32,
            key: Pattern::Literal(b"secret"),
            message: Pattern::Literal(b"hello"),
            expected: "1953751cc7004cc8f7965529b26562b4382f59382f6ed7367c68c2b98922b426",
        },
    ]
}

/// Verify every golden vector against the core primitives.
///
/// Returns `(name, matches, got)` per vector, BLAKE2b digests as hex and
/// Base58 results as text.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let codec = Base58Codec::new();

    let base58 = base58_vectors().into_iter().map(|v| {
        let got = hex::decode(v.bytes_hex)
            .map_err(|e| e.to_string())
            .and_then(|bytes| codec.encode(&bytes).map_err(|e| e.to_string()));
        match got {
            Ok(text) => (v.name.to_string(), text == v.text, text),
            Err(e) => (v.name.to_string(), false, e),
        }
    });

    let hashes = blake2b_vectors().into_iter().map(|v| {
        match blake2b(v.digest_len, &v.key.bytes(), &v.message.bytes()) {
            Ok(digest) => {
                let hex = digest.to_hex();
                (v.name.to_string(), hex == v.expected, hex)
            }
            Err(e) => (v.name.to_string(), false, e.to_string()),
        }
    });

    base58.chain(hashes).collect()
}
