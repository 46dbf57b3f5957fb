//! Session time model.
//!
//! # Design
//!
//! Time is a monotonically increasing millisecond count from session start,
//! wrapped in [`Millis`].  The simulation core never reads a wall clock:
//! every operation takes an explicit `now: Millis` supplied by whichever
//! scheduler is driving the session.  Using an integer instant as the
//! canonical unit means all idle/patience arithmetic is exact (no
//! floating-point drift) and "restart the timer" is just storing a new mark.
//!
//! The two tick cadences (dust and patience) are expressed as millisecond
//! periods in `ChamberConfig`; this module is agnostic to them.

use std::fmt;

// ── Millis ────────────────────────────────────────────────────────────────────

/// An absolute session instant, in milliseconds since session start.
///
/// Stored as `u64`: at millisecond resolution a u64 lasts ~585 million
/// years, far longer than any ambient session.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// Return the instant `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: u64) -> Millis {
        Millis(self.0 + ms)
    }

    /// Milliseconds elapsed from `earlier` to `self`.
    ///
    /// Saturates to 0 if `earlier > self`, so a stale mark can never
    /// produce a bogus huge duration.
    #[inline]
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Whole seconds elapsed from `earlier` to `self` (truncating).
    #[inline]
    pub fn secs_since(self, earlier: Millis) -> u64 {
        self.since(earlier) / 1_000
    }
}

impl std::ops::Add<u64> for Millis {
    type Output = Millis;
    #[inline]
    fn add(self, rhs: u64) -> Millis {
        Millis(self.0 + rhs)
    }
}

impl std::ops::Sub for Millis {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Millis) -> u64 {
        self.0.saturating_sub(rhs.0)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0;
        let mins = total / 60_000;
        let secs = (total % 60_000) / 1_000;
        let ms = total % 1_000;
        write!(f, "{mins:02}:{secs:02}.{ms:03}")
    }
}
