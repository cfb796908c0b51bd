//! Error type shared by the strict entry points.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The message bit-length does not fit in the 64-bit length field.
    #[error("input of {len} bytes is too large: bit length exceeds 64 bits")]
    InputTooLarge { len: u64 },

    /// A digest string was not 104 hex characters.
    #[error("invalid digest: {0}")]
    InvalidDigest(String),
}
