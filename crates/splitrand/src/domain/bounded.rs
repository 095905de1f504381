//! Bounded draws
//!
//! Integer draws use the JDK's rejection scheme: power-of-two widths are
//! masked, other widths take `u % n` of a halved draw and reject the
//! over-represented tail detected by signed overflow of `u + m - r`.
//! Widths that do not fit the signed type redraw until in range.

use crate::domain::mix::Mixer;
use crate::domain::splittable::SplittableRng;
use thiserror::Error;

/// Invalid arguments to a bounded draw
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BoundsError {
    #[error("bound must be positive")]
    NonPositiveBound,
    #[error("bound must be greater than origin")]
    EmptyRange,
}

impl<M: Mixer> SplittableRng<M> {
    /// Uniform i32 in [0, bound) (Java `nextInt(bound)`)
    pub fn next_i32_below(&mut self, bound: i32) -> Result<i32, BoundsError> {
        if bound <= 0 {
            return Err(BoundsError::NonPositiveBound);
        }
        let r = self.next_i32();
        let m = bound - 1;
        if bound & m == 0 {
            return Ok(r & m);
        }
        Ok(self.reject_i32(r, bound))
    }

    /// Uniform i32 in [origin, bound) (Java `nextInt(origin, bound)`)
    pub fn next_i32_in(&mut self, origin: i32, bound: i32) -> Result<i32, BoundsError> {
        if origin >= bound {
            return Err(BoundsError::EmptyRange);
        }
        let mut r = self.next_i32();
        let n = bound.wrapping_sub(origin);
        let m = n.wrapping_sub(1);
        if n & m == 0 {
            return Ok((r & m).wrapping_add(origin));
        }
        if n > 0 {
            return Ok(self.reject_i32(r, n).wrapping_add(origin));
        }
        // Width exceeds i32::MAX
        while r < origin || r >= bound {
            r = self.next_i32();
        }
        Ok(r)
    }

    /// Uniform i64 in [0, bound) (Java `nextLong(bound)`)
    pub fn next_i64_below(&mut self, bound: i64) -> Result<i64, BoundsError> {
        if bound <= 0 {
            return Err(BoundsError::NonPositiveBound);
        }
        let r = self.next_i64();
        let m = bound - 1;
        if bound & m == 0 {
            return Ok(r & m);
        }
        Ok(self.reject_i64(r, bound))
    }

    /// Uniform i64 in [origin, bound) (Java `nextLong(origin, bound)`)
    pub fn next_i64_in(&mut self, origin: i64, bound: i64) -> Result<i64, BoundsError> {
        if origin >= bound {
            return Err(BoundsError::EmptyRange);
        }
        let mut r = self.next_i64();
        let n = bound.wrapping_sub(origin);
        let m = n.wrapping_sub(1);
        if n & m == 0 {
            return Ok((r & m).wrapping_add(origin));
        }
        if n > 0 {
            return Ok(self.reject_i64(r, n).wrapping_add(origin));
        }
        while r < origin || r >= bound {
            r = self.next_i64();
        }
        Ok(r)
    }

    /// Uniform f64 in [0, bound) (Java `nextDouble(bound)`)
    pub fn next_f64_below(&mut self, bound: f64) -> Result<f64, BoundsError> {
        if !(bound > 0.0 && bound < f64::INFINITY) {
            return Err(BoundsError::NonPositiveBound);
        }
        let r = self.next_f64() * bound;
        Ok(if r < bound { r } else { next_down(bound) })
    }

    /// Uniform f64 in [origin, bound) (Java `nextDouble(origin, bound)`)
    pub fn next_f64_in(&mut self, origin: f64, bound: f64) -> Result<f64, BoundsError> {
        if !(origin < bound && bound - origin < f64::INFINITY) {
            return Err(BoundsError::EmptyRange);
        }
        let r = self.next_f64() * (bound - origin) + origin;
        Ok(if r < bound { r } else { next_down(bound) })
    }

    /// Fair coin (Java `nextBoolean`)
    pub fn next_bool(&mut self) -> bool {
        self.next_i32() < 0
    }

    /// `n` is positive and not a power of two
    fn reject_i32(&mut self, r: i32, n: i32) -> i32 {
        let m = n - 1;
        let mut u = ((r as u32) >> 1) as i32;
        loop {
            let r = u % n;
            if u.wrapping_add(m).wrapping_sub(r) >= 0 {
                return r;
            }
            u = (self.next_u32() >> 1) as i32;
        }
    }

    /// `n` is positive and not a power of two
    fn reject_i64(&mut self, r: i64, n: i64) -> i64 {
        let m = n - 1;
        let mut u = ((r as u64) >> 1) as i64;
        loop {
            let r = u % n;
            if u.wrapping_add(m).wrapping_sub(r) >= 0 {
                return r;
            }
            u = (self.next_u64() >> 1) as i64;
        }
    }
}

/// Largest double below a finite `x`
fn next_down(x: f64) -> f64 {
    if x == 0.0 {
        return -f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits - 1)
    } else {
        f64::from_bits(bits + 1)
    }
}
