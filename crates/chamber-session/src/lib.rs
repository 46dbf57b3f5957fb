//! `chamber-session` — the cooperative scheduler driving a chamber.
//!
//! # Event loop
//!
//! ```text
//! loop:
//!   ① Inputs  — presentation forwards gestures as ChamberInput; each is
//!               applied to the store at the session's current instant.
//!   ② Ticks   — step(dt) advances the clock, firing every due cadence in
//!               due-time order (dust tick before patience tick before
//!               snapshot on a shared instant — fixed, never reordered).
//!   ③ Fan-out — events and snapshots go to the ChamberObserver; the
//!               observer reads state, never mutates it.
//! ```
//!
//! One logical thread: inputs and ticks are admitted one at a time, each
//! producing the next state before the next is processed.  `finish` stops
//! both cadences and fires `on_session_end` exactly once.

pub mod builder;
pub mod error;
pub mod input;
pub mod observer;
pub mod session;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SessionBuilder;
pub use error::{SessionError, SessionResult};
pub use input::ChamberInput;
pub use observer::{ChamberObserver, NoopObserver};
pub use session::Session;
