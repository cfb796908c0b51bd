//! Merkle-Damgard padding
//!
//! `message || 0x80 || 0x00* || bitlen_be64`, where the zero run brings the
//! length to 56 mod 64 so the 8-byte length field closes the final block.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::params::{BLOCK_SIZE, LENGTH_FIELD_SIZE, LENGTH_OFFSET, PAD_MARKER};

/// Length in bytes of the padded form of a `len`-byte message.
#[inline(always)]
pub const fn padded_len(len: usize) -> usize {
    // marker + length field, rounded up to a whole block
    (len + 1 + LENGTH_FIELD_SIZE).div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}

/// Bit-length field for a `len_bytes`-byte message.
///
/// Wraps silently when the bit count does not fit in 64 bits
/// (messages of 2^61 bytes or more).
#[inline(always)]
pub const fn length_field(len_bytes: u64) -> u64 {
    len_bytes.wrapping_mul(8)
}

/// Bit-length of a `len_bytes`-byte message, or `InputTooLarge` when it
/// would not fit in the length field.
pub fn checked_bit_length(len_bytes: u64) -> Result<u64> {
    len_bytes
        .checked_mul(8)
        .ok_or(Error::InputTooLarge { len: len_bytes })
}

/// Pad a whole message.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let mut padded = Vec::with_capacity(padded_len(message.len()));
    padded.extend_from_slice(message);
    padded.push(PAD_MARKER);
    while padded.len() % BLOCK_SIZE != LENGTH_OFFSET {
        padded.push(0x00);
    }
    padded.extend_from_slice(&length_field(message.len() as u64).to_be_bytes());
    padded
}

/// Pad the final partial block of a streamed message.
///
/// `tail` holds the `total_len mod 64` bytes left over after all whole
/// blocks were compressed. Returns the padded tail and its length, which is
/// one block when the tail is at most 55 bytes and two blocks otherwise.
pub fn pad_tail(tail: &[u8], total_len: u64) -> ([u8; 2 * BLOCK_SIZE], usize) {
    debug_assert!(tail.len() < BLOCK_SIZE);

    let mut out = [0u8; 2 * BLOCK_SIZE];
    out[..tail.len()].copy_from_slice(tail);
    out[tail.len()] = PAD_MARKER;

    let len = if tail.len() < LENGTH_OFFSET {
        BLOCK_SIZE
    } else {
        2 * BLOCK_SIZE
    };
    out[len - LENGTH_FIELD_SIZE..len].copy_from_slice(&length_field(total_len).to_be_bytes());

    (out, len)
}
