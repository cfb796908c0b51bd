//! # H416 Core Algorithm
//!
//! A Merkle-Damgard message digest with a 13-word (416-bit) chaining state
//! and a 240-round, three-phase compression function.
//!
//! **H416 is not a vetted cryptographic primitive.** It makes no claim of
//! collision or preimage resistance. Its one guarantee is bit-exact
//! reproducibility: the same input always yields the same digest.
//!
//! ## Algorithm
//!
//! - Initial state: 13 words `floor(x * 2^32) mod 2^32` for pi, e, sqrt 2,
//!   sqrt 3, sqrt 5, ln 2, ln 3, ln 5, the golden ratio, and Gamma at
//!   0.5, 1.5, 2.5, 3.5
//! - Padding: `0x80`, zeros to 56 mod 64, 64-bit big-endian bit length
//! - Schedule: 16 big-endian words per block stretched to 240
//! - Compression: 3 phases x 80 rounds (choose, parity, majority) with a
//!   round constant that grows by one every round
//! - Output: the final state as 104 lowercase hex characters
//!
//! Only state words 0..5 are mixed with message data. Words 5..13 pass
//! through the rounds untouched and simply double on every block.
//!
//! ## Example
//!
//! ```rust
//! use h416_core::{H416, digest, hash};
//!
//! // Single-shot hashing
//! let hex = digest(b"Hello, World!");
//! assert_eq!(hex.len(), 104);
//!
//! // Streaming hasher (any chunking gives the same result)
//! let mut hasher = H416::new();
//! hasher.update(b"Hello, ");
//! hasher.update(b"World!");
//! assert_eq!(hasher.finalize(), hash(b"Hello, World!"));
//! ```
//!
//! ## no_std Support
//!
//! This crate supports `no_std` environments with the `alloc` crate:
//!
//! ```toml
//! [dependencies]
//! h416-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod compress;
mod constants;
mod digest;
mod error;
mod hasher;
mod padding;
mod params;
mod primitives;
mod schedule;

#[cfg(feature = "std")]
mod ffi;

pub use compress::{WorkingVector, compress, compress_block};
#[cfg(feature = "std")]
pub use constants::derive_initial_state;
pub use constants::{INITIAL_STATE, NAMED_CONSTANTS, initial_state};
pub use digest::Digest;
pub use error::{Error, Result};
pub use hasher::{H416, digest, digest_many, hash, try_digest};
pub use padding::{checked_bit_length, length_field, pad, padded_len};
pub use params::*;
pub use primitives::{Phase, mix, round_constant};
pub use schedule::expand;

#[cfg(test)]
mod tests;
