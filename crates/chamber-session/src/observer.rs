//! Session observer trait for rendering, audio, and data collection.

use chamber_core::Millis;
use chamber_state::{ChamberEvent, ChamberState};

/// Callbacks invoked by [`Session`][crate::Session] as the event loop runs.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  State references are read-only
/// snapshots; all mutation funnels through the store's operations.
///
/// # Example — sound-effect trigger
///
/// ```rust,ignore
/// struct SfxTrigger { mixer: Mixer }
///
/// impl ChamberObserver for SfxTrigger {
///     fn on_event(&mut self, _now: Millis, event: &ChamberEvent) {
///         match event {
///             ChamberEvent::DustCleaned { .. } => self.mixer.whoosh(),
///             ChamberEvent::ExplosionTriggered => self.mixer.boom(),
///             _ => {}
///         }
///     }
/// }
/// ```
pub trait ChamberObserver {
    /// Called once per discrete event, in the order the store emitted them.
    fn on_event(&mut self, _now: Millis, _event: &ChamberEvent) {}

    /// Called at the configured snapshot cadence with the full current state.
    fn on_snapshot(&mut self, _now: Millis, _state: &ChamberState) {}

    /// Called exactly once when the session is torn down.
    fn on_session_end(&mut self, _now: Millis, _state: &ChamberState) {}
}

/// A [`ChamberObserver`] that does nothing.  Use when driving a session that
/// needs no callbacks.
pub struct NoopObserver;

impl ChamberObserver for NoopObserver {}
