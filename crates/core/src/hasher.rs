//! H416 hasher
//!
//! Merkle-Damgard driver around the compression function. The chaining
//! state starts at [`INITIAL_STATE`], absorbs each 64-byte block in order,
//! and is rendered as the digest once the padded tail has been absorbed.
//!
//! Blocks of one message are strictly serial (block `i + 1` needs the state
//! left by block `i`); independent messages share nothing and can be hashed
//! in parallel with [`digest_many`].

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::compress::compress_block;
use crate::constants::INITIAL_STATE;
use crate::digest::Digest;
use crate::error::Result;
use crate::padding::{checked_bit_length, pad_tail};
use crate::params::{BLOCK_SIZE, STATE_WORDS};

/// Streaming H416 hasher
///
/// Feeding a message through any sequence of [`update`](H416::update) calls
/// gives the same digest as hashing it in one piece.
#[derive(Debug, Clone)]
pub struct H416 {
    /// Chaining state `H`
    state: [u32; STATE_WORDS],
    /// Bytes not yet forming a whole block
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    /// Total message length in bytes
    total_len: u64,
    /// Whole blocks compressed so far
    blocks: u64,
}

impl H416 {
    /// Create a hasher at the initial state.
    pub fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            total_len: 0,
            blocks: 0,
        }
    }

    /// Absorb more message bytes.
    pub fn update(&mut self, mut input: &[u8]) {
        self.total_len = self.total_len.wrapping_add(input.len() as u64);

        // Top up a partially filled buffer first
        if self.buffer_len > 0 {
            let take = (BLOCK_SIZE - self.buffer_len).min(input.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&input[..take]);
            self.buffer_len += take;
            input = &input[take..];

            if self.buffer_len < BLOCK_SIZE {
                return;
            }

            let block = self.buffer;
            self.absorb(&block);
            self.buffer_len = 0;
        }

        let mut blocks = input.chunks_exact(BLOCK_SIZE);
        for block in &mut blocks {
            // chunks_exact guarantees BLOCK_SIZE bytes
            let block: &[u8; BLOCK_SIZE] = block.try_into().expect("exact chunk");
            self.absorb(block);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    /// Message bytes absorbed so far.
    pub fn len(&self) -> u64 {
        self.total_len
    }

    /// `true` if nothing has been absorbed yet.
    pub fn is_empty(&self) -> bool {
        self.total_len == 0
    }

    /// Whole blocks compressed so far (padding blocks not included).
    pub fn blocks_processed(&self) -> u64 {
        self.blocks
    }

    /// Current chaining state.
    pub fn state(&self) -> &[u32; STATE_WORDS] {
        &self.state
    }

    /// Pad, absorb the tail, and return the digest.
    pub fn finalize(mut self) -> Digest {
        self.finish()
    }

    /// Like [`finalize`](H416::finalize), but fails with `InputTooLarge`
    /// instead of wrapping the length field.
    pub fn try_finalize(mut self) -> Result<Digest> {
        checked_bit_length(self.total_len)?;
        Ok(self.finish())
    }

    /// Return the digest and reset the hasher for reuse.
    pub fn finalize_reset(&mut self) -> Digest {
        let digest = self.finish();
        self.reset();
        digest
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn finish(&mut self) -> Digest {
        let (tail, tail_len) = pad_tail(&self.buffer[..self.buffer_len], self.total_len);
        for block in tail[..tail_len].chunks_exact(BLOCK_SIZE) {
            let block: &[u8; BLOCK_SIZE] = block.try_into().expect("exact chunk");
            compress_block(&mut self.state, block);
        }
        log::trace!(
            "h416: finalized {} bytes in {} blocks",
            self.total_len,
            self.blocks + (tail_len / BLOCK_SIZE) as u64
        );
        Digest::from_words(self.state)
    }

    #[inline(always)]
    fn absorb(&mut self, block: &[u8; BLOCK_SIZE]) {
        compress_block(&mut self.state, block);
        self.blocks += 1;
    }
}

impl Default for H416 {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash a whole message.
pub fn hash(message: &[u8]) -> Digest {
    let mut hasher = H416::new();
    hasher.update(message);
    hasher.finalize()
}

/// Hash a whole message and render it as 104 lowercase hex characters.
pub fn digest(message: &[u8]) -> String {
    hash(message).to_hex()
}

/// Like [`digest`], but rejects messages whose bit-length does not fit in
/// 64 bits instead of wrapping the length field.
pub fn try_digest(message: &[u8]) -> Result<String> {
    checked_bit_length(message.len() as u64)?;
    Ok(digest(message))
}

/// Hash independent messages, in parallel when the `parallel` feature is on.
#[cfg(feature = "parallel")]
pub fn digest_many<M>(messages: &[M]) -> Vec<Digest>
where
    M: AsRef<[u8]> + Sync,
{
    messages.par_iter().map(|m| hash(m.as_ref())).collect()
}

/// Hash independent messages (sequential fallback).
#[cfg(not(feature = "parallel"))]
pub fn digest_many<M>(messages: &[M]) -> Vec<Digest>
where
    M: AsRef<[u8]>,
{
    messages.iter().map(|m| hash(m.as_ref())).collect()
}
