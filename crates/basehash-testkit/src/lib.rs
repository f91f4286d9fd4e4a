//! # basehash testkit
//!
//! Testing utilities for basehash.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with expected outputs for bit-exact verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Byte patterns and a hashing fixture for chunked-update tests
//!
//! ## Golden Vectors
//!
//! ```rust
//! use basehash_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, got) in verify_all_vectors() {
//!     assert!(matches, "{}: {}", name, got);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use basehash_testkit::generators::HashParams;
//!
//! proptest! {
//!     #[test]
//!     fn chunking_is_invisible(params: HashParams) {
//!         let fixture = params.fixture();
//!         prop_assert_eq!(
//!             fixture.chunked(&params.message, &params.chunks),
//!             fixture.one_shot(&params.message)
//!         );
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use basehash_testkit::fixtures::{sequential, HashFixture};
//!
//! let fixture = HashFixture::reference_keyed();
//! let message = sequential(256);
//! assert_eq!(fixture.chunked(&message, &[1, 127]), fixture.one_shot(&message));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{sequential, HashFixture, Pattern};
pub use generators::HashParams;
pub use vectors::{base58_vectors, blake2b_vectors, verify_all_vectors, Base58Vector, Blake2bVector};
