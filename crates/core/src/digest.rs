//! Digest value and its hex rendering

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};
use crate::params::{DIGEST_HEX_LEN, DIGEST_SIZE, STATE_WORDS};

/// A finished H416 digest: the final 13-word chaining state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u32; STATE_WORDS]);

impl Digest {
    /// Wrap a final state.
    pub const fn from_words(words: [u32; STATE_WORDS]) -> Self {
        Self(words)
    }

    /// State words `H[0]..H[12]`.
    pub const fn words(&self) -> &[u32; STATE_WORDS] {
        &self.0
    }

    /// 52 bytes, each word big-endian in index order.
    pub fn to_bytes(&self) -> [u8; DIGEST_SIZE] {
        let mut out = [0u8; DIGEST_SIZE];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.0) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// Rebuild a digest from its 52-byte form.
    pub fn from_bytes(bytes: &[u8; DIGEST_SIZE]) -> Self {
        let mut words = [0u32; STATE_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self(words)
    }

    /// 104 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parse a 104-character hex digest (either case).
    pub fn from_hex(s: &str) -> Result<Self> {
        if s.len() != DIGEST_HEX_LEN {
            return Err(Error::InvalidDigest(format!(
                "expected {} hex characters, got {}",
                DIGEST_HEX_LEN,
                s.len()
            )));
        }

        let decoded: Vec<u8> = hex::decode(s).map_err(|e| Error::InvalidDigest(format!("{}", e)))?;

        let mut bytes = [0u8; DIGEST_SIZE];
        bytes.copy_from_slice(&decoded);
        Ok(Self::from_bytes(&bytes))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.0 {
            write!(f, "{:08x}", word)?;
        }
        Ok(())
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<Digest> for [u32; STATE_WORDS] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}
