//! The `Session` struct and its event loop.

use chamber_core::Millis;
use chamber_state::{ChamberEvent, ChamberState, ChamberStore};

use crate::input::ChamberInput;
use crate::observer::ChamberObserver;

// ── Cadences ──────────────────────────────────────────────────────────────────

/// The periodic processes a session multiplexes onto one clock.
///
/// Tie-break order on a shared instant is the variant order here: dust,
/// then patience, then snapshot.  Fixed so replays are bit-identical.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Cadence {
    Dust,
    Patience,
    Snapshot,
}

// ── Session ───────────────────────────────────────────────────────────────────

/// A running chamber: the store plus the clock and tick cadences.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].  Drive it by
/// alternating [`apply`][Self::apply] (user gestures, at the current
/// instant) and [`step`][Self::step] (advance simulated time).  Events are
/// admitted strictly in that call order — once admitted, never reordered.
pub struct Session {
    store: ChamberStore,

    /// Current session instant.  `step` moves it forward; `apply` acts at it.
    now: Millis,

    /// Next due instant for each cadence.  The first tick of each lands one
    /// full period after session start, like any interval timer.
    next_dust: Millis,
    next_patience: Millis,
    next_snapshot: Option<Millis>,

    finished: bool,
}

impl Session {
    pub(crate) fn new(store: ChamberStore, start: Millis) -> Self {
        let config = store.config();
        let next_dust = start.offset(config.dust_tick_ms);
        let next_patience = start.offset(config.patience_tick_ms);
        let next_snapshot = (config.snapshot_interval_ms > 0)
            .then(|| start.offset(config.snapshot_interval_ms));
        Self {
            store,
            now: start,
            next_dust,
            next_patience,
            next_snapshot,
            finished: false,
        }
    }

    /// The session's current instant.
    #[inline]
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Read-only snapshot of the chamber state.
    #[inline]
    pub fn state(&self) -> &ChamberState {
        self.store.state()
    }

    /// The underlying store, read-only (for derived values such as
    /// [`dust_level`][ChamberStore::dust_level]).
    #[inline]
    pub fn store(&self) -> &ChamberStore {
        &self.store
    }

    /// Has [`finish`][Self::finish] been called?
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Apply one user gesture at the current instant.
    ///
    /// Events are forwarded to `observer` and also returned, so a caller
    /// that is itself the presentation layer can react inline.  A finished
    /// session ignores inputs.
    pub fn apply<O: ChamberObserver>(
        &mut self,
        input: ChamberInput,
        observer: &mut O,
    ) -> Vec<ChamberEvent> {
        if self.finished {
            return Vec::new();
        }
        let events = match input {
            ChamberInput::SetFrequency(freq) => self.store.set_frequency(freq, self.now),
            ChamberInput::CleanDust { x, y, radius } => {
                self.store.clean_dust(x, y, radius, self.now)
            }
            ChamberInput::RepairCrack(id) => self.store.repair_crack(id, self.now),
            ChamberInput::AcknowledgeQuote => {
                self.store.acknowledge_quote();
                Vec::new()
            }
            ChamberInput::AcknowledgeExplosion => {
                self.store.acknowledge_explosion();
                Vec::new()
            }
        };
        for event in &events {
            observer.on_event(self.now, event);
        }
        events
    }

    /// Advance simulated time by `dt_ms`, firing every due cadence in
    /// due-time order.  A finished session does not tick.
    pub fn step<O: ChamberObserver>(&mut self, dt_ms: u64, observer: &mut O) {
        if self.finished {
            return;
        }
        let target = self.now.offset(dt_ms);

        loop {
            let (when, which) = self.next_due();
            if when > target {
                break;
            }
            self.now = when;
            match which {
                Cadence::Dust => {
                    let events = self.store.advance_dust_tick(when);
                    for event in &events {
                        observer.on_event(when, event);
                    }
                    self.next_dust = when.offset(self.store.config().dust_tick_ms);
                }
                Cadence::Patience => {
                    let events = self.store.advance_patience_tick(when);
                    for event in &events {
                        observer.on_event(when, event);
                    }
                    self.next_patience = when.offset(self.store.config().patience_tick_ms);
                }
                Cadence::Snapshot => {
                    observer.on_snapshot(when, self.store.state());
                    self.next_snapshot =
                        Some(when.offset(self.store.config().snapshot_interval_ms));
                }
            }
        }

        self.now = target;
    }

    /// Tear the session down: both cadences stop, further inputs are
    /// ignored, and `on_session_end` fires exactly once.
    pub fn finish<O: ChamberObserver>(&mut self, observer: &mut O) {
        if self.finished {
            return;
        }
        self.finished = true;
        observer.on_session_end(self.now, self.store.state());
    }

    /// The earliest due cadence.  Strict `<` comparisons preserve the fixed
    /// dust → patience → snapshot order on shared instants.
    fn next_due(&self) -> (Millis, Cadence) {
        let mut when = self.next_dust;
        let mut which = Cadence::Dust;
        if self.next_patience < when {
            when = self.next_patience;
            which = Cadence::Patience;
        }
        if let Some(snap) = self.next_snapshot {
            if snap < when {
                when = snap;
                which = Cadence::Snapshot;
            }
        }
        (when, which)
    }
}
