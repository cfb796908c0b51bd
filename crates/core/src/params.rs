//! H416 Algorithm Parameters
//!
//! Fixed sizes and counts of the digest. None of these are tunable: changing
//! any of them changes every digest.

/// Block size in bytes
pub const BLOCK_SIZE: usize = 64;

/// Big-endian 32-bit words loaded from each block
pub const WORDS_PER_BLOCK: usize = BLOCK_SIZE / 4;

/// Number of compression rounds per block
pub const ROUNDS: usize = 240;

/// Expanded message schedule length (one word per round)
pub const SCHEDULE_LEN: usize = ROUNDS;

/// Number of boolean-function phases
pub const PHASES: usize = 3;

/// Rounds spent in each phase
pub const ROUNDS_PER_PHASE: usize = ROUNDS / PHASES;

/// Chaining state size in 32-bit words
pub const STATE_WORDS: usize = 13;

/// Working-vector words rewritten by the round body (`a..e`)
pub const MIXED_WORDS: usize = 5;

/// Digest size in bytes (416 bits)
pub const DIGEST_SIZE: usize = STATE_WORDS * 4;

/// Digest length in hex characters
pub const DIGEST_HEX_LEN: usize = DIGEST_SIZE * 2;

/// Size of the trailing big-endian bit-length field
pub const LENGTH_FIELD_SIZE: usize = 8;

/// Offset inside the final block where the length field starts
pub const LENGTH_OFFSET: usize = BLOCK_SIZE - LENGTH_FIELD_SIZE;

/// First padding byte
pub const PAD_MARKER: u8 = 0x80;

/// Algorithm version
pub const VERSION: u8 = 1;
