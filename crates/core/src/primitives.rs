//! Word-level building blocks of the H416 round
//!
//! The shift-mixing operator, the three per-phase boolean functions, and the
//! per-round additive constant.

use crate::params::ROUNDS_PER_PHASE;

/// Shift-mixing operator: the OR of four shifted copies of `n`.
///
/// `(n << b) | (n >> (32 - b)) | (n >> c) | (n << c)`, masked to 32 bits.
/// The first two terms form a left rotation by `b`; the last two are plain
/// shifts with no complementary partner, so the result is not a rotation
/// and is not invertible.
///
/// The shifts run in a 64-bit scratch word so that no term loses bits before
/// the final mask. Valid for `1 <= b <= 31` and `c <= 31`.
#[inline(always)]
pub fn mix(n: u32, b: u32, c: u32) -> u32 {
    let n = n as u64;
    let wide = (n << b) | (n >> (32 - b)) | (n >> c) | (n << c);
    wide as u32
}

/// Phase 1 constant base
pub const K_CHOOSE: u32 = 0x5A827999;
/// Phase 2 constant base
pub const K_PARITY: u32 = 0x6ED9EBA1;
/// Phase 3 constant base
pub const K_MAJORITY: u32 = 0x8F1BBCDC;

/// One of the three 80-round segments of the compression pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Rounds 0-79: `(b & c) | (!b & d)`
    Choose,
    /// Rounds 80-159: `b ^ c ^ d`
    Parity,
    /// Rounds 160-239: `(b & c) | (b & d) | (c & d)`
    Majority,
}

impl Phase {
    /// Phase of round `j` (`0 <= j < 240`).
    #[inline(always)]
    pub fn for_round(j: usize) -> Self {
        match j / ROUNDS_PER_PHASE {
            0 => Phase::Choose,
            1 => Phase::Parity,
            _ => Phase::Majority,
        }
    }

    /// Additive constant base of this phase.
    #[inline(always)]
    pub fn base_constant(self) -> u32 {
        match self {
            Phase::Choose => K_CHOOSE,
            Phase::Parity => K_PARITY,
            Phase::Majority => K_MAJORITY,
        }
    }

    /// Evaluate the phase's boolean function on `b`, `c`, `d`.
    #[inline(always)]
    pub fn apply(self, b: u32, c: u32, d: u32) -> u32 {
        match self {
            Phase::Choose => (b & c) | (!b & d),
            Phase::Parity => b ^ c ^ d,
            Phase::Majority => (b & c) | (b & d) | (c & d),
        }
    }
}

/// Additive constant of round `j`: the phase base plus `j`.
///
/// The constant grows by one every round, including across phase
/// boundaries (`k_80 = K_PARITY + 80`).
#[inline(always)]
pub fn round_constant(j: usize) -> u32 {
    Phase::for_round(j).base_constant().wrapping_add(j as u32)
}
