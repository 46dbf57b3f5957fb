//! Last-interaction tracking.
//!
//! The tracker owns exactly one instant: when the user last did something
//! (dial move, clean gesture, crack repair).  The dust process reads the
//! derived idle duration to decide whether the chamber is being neglected.
//! Promoting this from an ambient module-level ref to an explicit field of
//! the store keeps the whole simulation constructible in tests.

use chamber_core::Millis;

/// Records the instant of the last user interaction.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityTracker {
    last_activity: Millis,
}

impl ActivityTracker {
    /// A tracker that counts session start as the first "interaction", so a
    /// freshly opened chamber doesn't instantly start gathering dust.
    pub fn new(start: Millis) -> Self {
        Self { last_activity: start }
    }

    /// Record an interaction at `now`.
    #[inline]
    pub fn touch(&mut self, now: Millis) {
        self.last_activity = now;
    }

    /// Milliseconds of idleness as of `now`.
    #[inline]
    pub fn idle_ms(&self, now: Millis) -> u64 {
        now.since(self.last_activity)
    }

    /// The raw last-interaction instant.
    #[inline]
    pub fn last_activity(&self) -> Millis {
        self.last_activity
    }
}
