//! Chamber policy configuration.
//!
//! Every threshold, period, and cap the simulation uses lives here as an
//! explicit field with the shipped default.  These are fixed policy values,
//! not user-facing knobs — the defaults *are* the product — but making them
//! fields (rather than scattered consts) lets tests compress time: a test
//! can set `patience_threshold_secs = 3` instead of waiting five minutes.

use crate::error::{ChamberError, ChamberResult};

/// All policy constants for one chamber session.
///
/// Construct with [`ChamberConfig::default()`] and override fields as
/// needed, then [`validate`][Self::validate] before driving a session.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChamberConfig {
    /// Master RNG seed.  The same seed always produces identical crack and
    /// dust layouts for the same event order.
    pub seed: u64,

    /// Fast-tick period: how often the dust-spawn process is advanced.
    pub dust_tick_ms: u64,

    /// Slow-tick period: how often patience/moss are advanced.
    pub patience_tick_ms: u64,

    /// Idle time that must elapse before dust starts to accumulate.
    pub idle_spawn_ms: u64,

    /// Spawn-rate ramp: one extra particle per tick for every full
    /// `spawn_ramp_ms` of idleness, capped at `max_spawn_per_tick`.
    pub spawn_ramp_ms: u64,

    /// Hard cap on particles spawned in a single dust tick.
    pub max_spawn_per_tick: u32,

    /// Hard cap on the dust collection ("MAX_DUST").
    pub max_dust: usize,

    /// Frequency at or above which the chamber overloads.
    pub overload_threshold: f32,

    /// Inclusive bounds of the steady mid-range that counts as patient.
    pub steady_min: f32,
    pub steady_max: f32,

    /// Dust level below which the chamber counts as clean for patience.
    pub clean_dust_level: f32,

    /// Consecutive patient seconds required before moss sprouts.
    pub patience_threshold_secs: u64,

    /// Growth added to every moss cluster per patience tick (clamped to 1).
    pub moss_growth_step: f32,

    /// Cracks generated on an overload rising edge: uniform in
    /// `min_cracks..=max_cracks`.
    pub min_cracks: u32,
    pub max_cracks: u32,

    /// Crack positions are kept `crack_margin` units away from the plane
    /// edges (plane is [0,100]²).
    pub crack_margin: f32,

    /// Frequency the dial snaps back to when the last crack is repaired.
    pub neutral_frequency: f32,

    /// Observer snapshot cadence.  0 disables snapshots.
    pub snapshot_interval_ms: u64,
}

impl Default for ChamberConfig {
    fn default() -> Self {
        Self {
            seed:                   0,
            dust_tick_ms:           200,
            patience_tick_ms:       1_000,
            idle_spawn_ms:          2_000,
            spawn_ramp_ms:          3_000,
            max_spawn_per_tick:     3,
            max_dust:               500,
            overload_threshold:     0.95,
            steady_min:             0.3,
            steady_max:             0.7,
            clean_dust_level:       0.1,
            patience_threshold_secs: 300,
            moss_growth_step:       0.01,
            min_cracks:             3,
            max_cracks:             6,
            crack_margin:           10.0,
            neutral_frequency:      0.5,
            snapshot_interval_ms:   1_000,
        }
    }
}

impl ChamberConfig {
    /// Check internal consistency.  Invalid *runtime inputs* are clamped, but
    /// an inconsistent configuration is a programming error worth surfacing.
    pub fn validate(&self) -> ChamberResult<()> {
        if self.dust_tick_ms == 0 || self.patience_tick_ms == 0 {
            return Err(ChamberError::Config(
                "tick periods must be non-zero".into(),
            ));
        }
        if self.max_dust == 0 {
            return Err(ChamberError::Config("max_dust must be non-zero".into()));
        }
        if self.spawn_ramp_ms == 0 {
            return Err(ChamberError::Config(
                "spawn_ramp_ms must be non-zero".into(),
            ));
        }
        if self.steady_min > self.steady_max {
            return Err(ChamberError::Config(format!(
                "steady range inverted: [{}, {}]",
                self.steady_min, self.steady_max
            )));
        }
        if self.min_cracks == 0 || self.min_cracks > self.max_cracks {
            return Err(ChamberError::Config(format!(
                "crack count range invalid: [{}, {}]",
                self.min_cracks, self.max_cracks
            )));
        }
        Ok(())
    }

    /// Is `freq` inside the steady mid-range (inclusive)?
    #[inline]
    pub fn is_steady(&self, freq: f32) -> bool {
        freq >= self.steady_min && freq <= self.steady_max
    }
}
