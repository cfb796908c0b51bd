//! Message schedule expansion
//!
//! Each 64-byte block is loaded as 16 big-endian words and stretched to one
//! word per round with
//! `W[j] = mix(W[j-3] ^ W[j-8] ^ W[j-14] ^ W[j-16], 1, 3)`.

use crate::params::{BLOCK_SIZE, SCHEDULE_LEN, WORDS_PER_BLOCK};
use crate::primitives::mix;

/// Expand one block into the 240-word schedule.
#[inline(always)]
pub fn expand(block: &[u8; BLOCK_SIZE]) -> [u32; SCHEDULE_LEN] {
    let mut w = [0u32; SCHEDULE_LEN];

    for (word, bytes) in w[..WORDS_PER_BLOCK]
        .iter_mut()
        .zip(block.chunks_exact(4))
    {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    for j in WORDS_PER_BLOCK..SCHEDULE_LEN {
        w[j] = mix(w[j - 3] ^ w[j - 8] ^ w[j - 14] ^ w[j - 16], 1, 3);
    }

    w
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding::pad;

    #[test]
    fn test_loads_big_endian_words() {
        let mut block = [0u8; 64];
        block[..4].copy_from_slice(&[0x01, 0x02, 0x03, 0x04]);
        block[60..].copy_from_slice(&[0xAA, 0xBB, 0xCC, 0xDD]);

        let w = expand(&block);
        assert_eq!(w[0], 0x0102_0304);
        assert_eq!(w[15], 0xAABB_CCDD);
    }

    #[test]
    fn test_empty_message_schedule() {
        let padded = pad(b"");
        let block: [u8; 64] = padded[..].try_into().unwrap();
        let w = expand(&block);

        assert_eq!(w[0], 0x8000_0000);
        // W[16] = mix(W[13] ^ W[8] ^ W[2] ^ W[0], 1, 3)
        assert_eq!(w[16], 0x1000_0001);
        assert_eq!(w[17], 0);
        assert_eq!(w[18], 0);
        assert_eq!(w[19], 0xa200_000a);
        assert_eq!(w[239], 0x4fff_ffff);
    }

    #[test]
    fn test_zero_block_stays_zero() {
        let w = expand(&[0u8; 64]);
        assert!(w.iter().all(|&x| x == 0));
    }

    #[test]
    fn test_recurrence_holds_everywhere() {
        let block: [u8; 64] = core::array::from_fn(|i| (i as u8).wrapping_mul(37));
        let w = expand(&block);
        for j in 16..240 {
            assert_eq!(w[j], mix(w[j - 3] ^ w[j - 8] ^ w[j - 14] ^ w[j - 16], 1, 3));
        }
    }
}
