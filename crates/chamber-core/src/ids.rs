//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  IDs are allocated from monotonic
//! per-kind counters owned by the state store — never derived from the wall
//! clock, so two entities created in the same millisecond cannot collide.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Identifier of a dust particle.  u32 comfortably outlasts the 500-unit
    /// capacity even with continuous churn.
    pub struct DustId(u32);
}

typed_id! {
    /// Identifier of a crack awaiting repair.
    pub struct CrackId(u32);
}

typed_id! {
    /// Identifier of a moss cluster (at most four per session).
    pub struct MossId(u32);
}

// ── IdCounter ─────────────────────────────────────────────────────────────────

/// A monotonic u32 allocator for one ID kind.
///
/// Wrapping is not handled: the session would need 2^32 allocations of one
/// kind to wrap, which at the simulation's tick rates is unreachable.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdCounter(u32);

impl IdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A counter that resumes allocation at `next` (for stores rebuilt over
    /// an existing state).
    pub fn starting_at(next: u32) -> Self {
        Self(next)
    }

    /// Allocate the next raw ID value.
    #[inline]
    pub fn next(&mut self) -> u32 {
        let id = self.0;
        self.0 += 1;
        id
    }
}
