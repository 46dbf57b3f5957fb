//! `chamber-state` — the entropy-chamber state store and transition rules.
//!
//! This crate is the simulation core: a single state-owning object
//! ([`ChamberStore`]) whose public operations are synchronous, deterministic
//! transformations of current state + input → next state.  No hidden I/O,
//! no wall clock, no internal concurrency — every operation takes an
//! explicit `now: Millis` and returns the discrete [`ChamberEvent`]s that
//! fired, for audio/presentation layers to react to.
//!
//! # The processes
//!
//! | Process   | Driven by              | Effect                                  |
//! |-----------|------------------------|-----------------------------------------|
//! | Dust      | fast tick + idleness   | particles accumulate; at capacity the explosion flag fires once |
//! | Overload  | frequency rising edge  | 3–6 cracks spawn; only repairing the last one calms the chamber |
//! | Patience  | slow tick              | 300 steady, clean, calm seconds sprout moss in the four corners |
//! | Quote     | cleaning the last mote | one-shot reveal flag for the presentation layer |
//!
//! # Discipline
//!
//! Consumers receive read-only snapshots ([`ChamberStore::state`]); all
//! mutation funnels through the store's operations.  Out-of-range inputs are
//! clamped, never rejected — the chamber must always remain advanceable.

pub mod activity;
pub mod entities;
pub mod events;
pub mod store;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use activity::ActivityTracker;
pub use entities::{Corner, Crack, DustParticle, MossCluster};
pub use events::ChamberEvent;
pub use store::{ChamberState, ChamberStore};
