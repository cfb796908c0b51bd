//! H416 compression function
//!
//! 240 rounds over a 13-word working vector copied from the chaining state,
//! followed by a word-wise feed-forward add.
//!
//! Only `a..e` are rewritten by the round body. `f`, `g` and `h0..h5` keep
//! the values copied from `H[5..13]`, so the feed-forward doubles those
//! eight state words on every block regardless of the message.

use crate::params::{BLOCK_SIZE, MIXED_WORDS, ROUNDS, SCHEDULE_LEN, STATE_WORDS};
use crate::primitives::{Phase, mix, round_constant};
use crate::schedule::expand;

/// Per-block copy of the chaining state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingVector {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub e: u32,
    /// `f, g, h0..h5`: read-only during the rounds
    pub rest: [u32; STATE_WORDS - MIXED_WORDS],
}

impl WorkingVector {
    /// Load the working vector from the chaining state.
    #[inline(always)]
    pub fn load(state: &[u32; STATE_WORDS]) -> Self {
        let mut rest = [0u32; STATE_WORDS - MIXED_WORDS];
        rest.copy_from_slice(&state[MIXED_WORDS..]);
        Self {
            a: state[0],
            b: state[1],
            c: state[2],
            d: state[3],
            e: state[4],
            rest,
        }
    }

    /// Run round `j` with schedule word `w`.
    #[inline(always)]
    pub fn round(&mut self, j: usize, w: u32) {
        let fun = Phase::for_round(j).apply(self.b, self.c, self.d);
        let temp = mix(self.a, 5, 7)
            .wrapping_add(fun)
            .wrapping_add(self.e)
            .wrapping_add(round_constant(j))
            .wrapping_add(w);

        self.e = self.d;
        self.d = self.c;
        self.c = mix(self.b, 30, 2);
        self.b = self.a;
        self.a = temp;
    }

    /// The 13 words in state order.
    #[inline(always)]
    pub fn words(&self) -> [u32; STATE_WORDS] {
        let mut out = [0u32; STATE_WORDS];
        out[..MIXED_WORDS].copy_from_slice(&[self.a, self.b, self.c, self.d, self.e]);
        out[MIXED_WORDS..].copy_from_slice(&self.rest);
        out
    }
}

/// Run all 240 rounds against an expanded schedule and fold the result into
/// `state`.
#[inline(always)]
pub fn compress(state: &mut [u32; STATE_WORDS], schedule: &[u32; SCHEDULE_LEN]) {
    let mut v = WorkingVector::load(state);

    for (j, &w) in schedule.iter().enumerate().take(ROUNDS) {
        v.round(j, w);
    }

    for (h, x) in state.iter_mut().zip(v.words()) {
        *h = h.wrapping_add(x);
    }
}

/// Expand `block` and compress it into `state`.
#[inline(always)]
pub fn compress_block(state: &mut [u32; STATE_WORDS], block: &[u8; BLOCK_SIZE]) {
    let schedule = expand(block);
    compress(state, &schedule);
}
