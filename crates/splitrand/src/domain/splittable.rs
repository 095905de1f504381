//! Splittable random number generator
//!
//! SplitMix: a 64-bit Weyl sequence (`state += gamma`) whose words are run
//! through a [`Mixer`]. `split` derives a child generator from two draws of the
//! parent. Output must be bit-identical to `java.util.SplittableRandom` when
//! the [`Jdk8`] mixer is used.

use crate::constants::{DOUBLE_SHIFT, DOUBLE_UNIT, GOLDEN_GAMMA};
use crate::domain::mix::{Jdk8, Mixer};
use std::marker::PhantomData;

/// Splittable random number generator
///
/// Not cryptographically secure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplittableRng<M: Mixer = Jdk8> {
    /// Current position in the Weyl sequence
    state: u64,
    /// Step added to `state` per draw (always odd)
    gamma: u64,
    _mixer: PhantomData<M>,
}

impl<M: Mixer> SplittableRng<M> {
    /// Create a root generator from a seed
    pub fn new(seed: u64) -> Self {
        Self::with_gamma(seed, GOLDEN_GAMMA)
    }

    /// Create a root generator from a signed seed (two's complement, as Java's `long`)
    pub fn from_signed_seed(seed: i64) -> Self {
        Self::new(seed as u64)
    }

    /// Only called with gammas that are already odd.
    fn with_gamma(state: u64, gamma: u64) -> Self {
        debug_assert_eq!(gamma & 1, 1, "gamma must be odd");
        Self {
            state,
            gamma,
            _mixer: PhantomData,
        }
    }

    /// Current state word
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Gamma of this generator
    pub fn gamma(&self) -> u64 {
        self.gamma
    }

    /// Step the Weyl sequence and return the new raw state
    #[inline]
    fn advance(&mut self) -> u64 {
        self.state = self.state.wrapping_add(self.gamma);
        self.state
    }

    /// Generate a 64-bit random number
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        M::mix64(self.advance())
    }

    /// Generate a 32-bit random number
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        M::mix32(self.advance())
    }

    /// Signed view of [`next_u64`](Self::next_u64) (Java `nextLong`)
    #[inline]
    pub fn next_i64(&mut self) -> i64 {
        self.next_u64() as i64
    }

    /// Signed view of [`next_u32`](Self::next_u32) (Java `nextInt`)
    #[inline]
    pub fn next_i32(&mut self) -> i32 {
        self.next_u32() as i32
    }

    /// Generate a double in [0, 1) with 53 bits of precision
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> DOUBLE_SHIFT) as f64 * DOUBLE_UNIT
    }

    /// Split off a new generator
    ///
    /// Consumes two steps of this generator: the first, mixed, becomes the
    /// child's state; the second, raw, is turned into the child's gamma.
    pub fn split(&mut self) -> Self {
        let state = self.next_u64();
        let gamma = M::mix_gamma(self.advance());
        Self::with_gamma(state, gamma)
    }

    /// Infinite stream of [`next_i64`](Self::next_i64) values
    pub fn iter_i64(&mut self) -> impl Iterator<Item = i64> + '_ {
        std::iter::repeat_with(move || self.next_i64())
    }

    /// Infinite stream of [`next_i32`](Self::next_i32) values
    pub fn iter_i32(&mut self) -> impl Iterator<Item = i32> + '_ {
        std::iter::repeat_with(move || self.next_i32())
    }

    /// Infinite stream of [`next_f64`](Self::next_f64) values
    pub fn iter_f64(&mut self) -> impl Iterator<Item = f64> + '_ {
        std::iter::repeat_with(move || self.next_f64())
    }
}
