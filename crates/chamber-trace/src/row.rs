//! Plain data row types written by trace backends.

/// One snapshot-cadence dump of the chamber state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotRow {
    /// Session instant in milliseconds.
    pub time_ms:       u64,
    pub frequency:     f32,
    pub dust_count:    usize,
    /// Derived level in [0, 1] at snapshot time.
    pub dust_level:    f32,
    pub overloaded:    bool,
    pub crack_count:   usize,
    /// Mean growth across clusters; 0 before moss sprouts.
    pub moss_growth:   f32,
    pub patience_secs: u64,
}

/// One discrete chamber event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    /// Session instant in milliseconds.
    pub time_ms: u64,
    /// The event's display form, e.g. `cracks-spawned(4)`.
    pub event:   String,
}
