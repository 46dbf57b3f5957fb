//! Deterministic session RNG.
//!
//! # Determinism strategy
//!
//! The chamber has a single logical thread of execution, so one `SmallRng`
//! seeded from `ChamberConfig::seed` covers every random draw (crack
//! layouts, dust positions, particle sizes).  The same seed and the same
//! event order always reproduce the same session — which is what makes the
//! transition logic testable without stubbing randomness.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Session-level deterministic RNG.
///
/// Owned by the state store; all draws funnel through it in event order.
pub struct ChamberRng(SmallRng);

impl ChamberRng {
    pub fn new(seed: u64) -> Self {
        ChamberRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
