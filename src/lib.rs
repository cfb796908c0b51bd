//! H416 Library
//!
//! A 416-bit Merkle-Damgard message digest, plus the pieces the `h416`
//! command-line tool is built from.
//!
//! # Overview
//!
//! H416 maps any byte sequence to 104 lowercase hex characters. It is
//! reproducible bit-for-bit and makes no cryptographic security claims.
//!
//! # Example
//!
//! ```rust
//! use h416::algorithm::{digest, H416};
//!
//! let hex = digest(b"Hello, World!");
//!
//! let mut hasher = H416::new();
//! hasher.update(b"Hello, World!");
//! assert_eq!(hasher.finalize().to_hex(), hex);
//! ```

// Re-export the core algorithm
pub use h416_core as algorithm;

pub mod check;
pub mod config;
pub mod source;

// Convenience re-exports
pub use algorithm::{digest, hash, Digest, H416};
