//! Initial chaining state
//!
//! Each of the 13 words is `floor(x * 2^32) mod 2^32` for a named real
//! constant `x`, evaluated in IEEE-754 double precision. The literal table is
//! what the hasher uses; [`derive_initial_state`] recomputes it so the
//! derivation stays checkable.

use crate::params::STATE_WORDS;

/// The initial state, in word order.
pub const INITIAL_STATE: [u32; STATE_WORDS] = [
    0x243f6a88, // pi
    0xb7e15162, // e
    0x6a09e667, // sqrt(2)
    0xbb67ae85, // sqrt(3)
    0x3c6ef372, // sqrt(5)
    0xb17217f7, // ln(2)
    0x193ea7aa, // ln(3)
    0x9c041f7e, // ln(5)
    0x9e3779b9, // golden ratio
    0xc5bf891b, // gamma(1/2)
    0xe2dfc48d, // gamma(3/2)
    0x544fa6d4, // gamma(5/2)
    0x52c72113, // gamma(7/2)
];

/// Source of each initial-state word, in word order.
pub const NAMED_CONSTANTS: [&str; STATE_WORDS] = [
    "pi",
    "e",
    "sqrt(2)",
    "sqrt(3)",
    "sqrt(5)",
    "ln(2)",
    "ln(3)",
    "ln(5)",
    "phi",
    "gamma(0.5)",
    "gamma(1.5)",
    "gamma(2.5)",
    "gamma(3.5)",
];

/// The frozen initial state.
#[inline(always)]
pub const fn initial_state() -> [u32; STATE_WORDS] {
    INITIAL_STATE
}

/// Scale a positive constant by 2^32 and keep the low 32 bits of the
/// truncated integer part.
#[cfg(any(feature = "std", test))]
#[inline(always)]
pub fn fixed_point_word(x: f64) -> u32 {
    // every source is below 4, so the product fits in u64
    (x * 4_294_967_296.0) as u64 as u32
}

/// Recompute the initial state from double-precision arithmetic.
///
/// Uses the `core::f64::consts` values where they exist, correctly rounded
/// `sqrt`, the platform `ln`, and the exact closed forms of the Gamma
/// function at half-integers: `G(1/2) = sqrt(pi)`, `G(3/2) = sqrt(pi)/2`,
/// `G(5/2) = 3 sqrt(pi)/4`, `G(7/2) = 15 sqrt(pi)/8`.
#[cfg(feature = "std")]
pub fn derive_initial_state() -> [u32; STATE_WORDS] {
    use core::f64::consts::{E, LN_2, PI, SQRT_2};

    let sqrt5 = 5f64.sqrt();
    let sqrt_pi = PI.sqrt();

    let sources = [
        PI,
        E,
        SQRT_2,
        3f64.sqrt(),
        sqrt5,
        LN_2,
        3f64.ln(),
        5f64.ln(),
        (1.0 + sqrt5) / 2.0,
        sqrt_pi,
        sqrt_pi / 2.0,
        3.0 * sqrt_pi / 4.0,
        15.0 * sqrt_pi / 8.0,
    ];

    let mut state = [0u32; STATE_WORDS];
    for (word, x) in state.iter_mut().zip(sources) {
        *word = fixed_point_word(x);
    }
    state
}
