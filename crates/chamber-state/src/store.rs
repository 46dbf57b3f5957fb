//! The `ChamberStore` and its transition operations.
//!
//! # Overload state machine
//!
//! ```text
//! CALM ──(set_frequency ≥ 0.95, rising edge)──► OVERLOADED
//!   ▲                                               │
//!   └────────(last crack repaired; freq := 0.5)─────┘
//! ```
//!
//! Once triggered, overload is cracks-driven: dropping the dial below the
//! threshold while cracks remain does NOT calm the chamber.  The store's
//! `overloaded` field is the single authoritative definition — presentation
//! and audio must derive from it, never recompute it from frequency.
//!
//! # One-shot flags
//!
//! `quote_pending` and `explosion_pending` are edge-triggered notifications.
//! The store sets them on a genuine edge; the presentation layer consumes
//! and clears them through the `acknowledge_*` operations.  Neither flag
//! gates anything — dust can be cleaned, and spawning resumes below
//! capacity, regardless of an unacknowledged explosion.

use chamber_core::{ChamberConfig, ChamberRng, CrackId, DustId, IdCounter, Millis, MossId};

use crate::activity::ActivityTracker;
use crate::entities::{Corner, Crack, DustParticle, MossCluster};
use crate::events::ChamberEvent;

// ── ChamberState ──────────────────────────────────────────────────────────────

/// The single source-of-truth state snapshot.
///
/// Everything derived (`dust_level`, `patience_secs`) is recomputed from the
/// owning collections on demand, never stored alongside them — there is no
/// second copy to fall out of sync.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChamberState {
    /// Dial position in [0, 1].
    pub frequency: f32,

    /// Accumulated idle decay, capacity-bounded by `config.max_dust`.
    pub dust: Vec<DustParticle>,

    /// Authoritative overload flag (see module docs).
    pub overloaded: bool,

    /// Outstanding overload artifacts.  Non-empty iff `overloaded`, once at
    /// least one overload cycle has occurred.
    pub cracks: Vec<Crack>,

    /// The patience reward.  Empty until the threshold fires, then exactly
    /// four clusters for the rest of the session.
    pub moss: Vec<MossCluster>,

    /// Start-mark of the current patient stretch.  `None` means conditions
    /// do not currently hold; the timer is derived, never stored.
    pub patience_started: Option<Millis>,

    /// One-shot: the dust field was cleaned down to empty.
    pub quote_pending: bool,

    /// One-shot: dust reached capacity unattended.
    pub explosion_pending: bool,
}

impl ChamberState {
    /// A fresh chamber: neutral dial, nothing spawned, no flags.
    pub fn new(neutral_frequency: f32) -> Self {
        Self {
            frequency:         neutral_frequency,
            dust:              Vec::new(),
            overloaded:        false,
            cracks:            Vec::new(),
            moss:              Vec::new(),
            patience_started:  None,
            quote_pending:     false,
            explosion_pending: false,
        }
    }

    /// Dust level in [0, 1]: `particle count / max_dust`.
    #[inline]
    pub fn dust_level(&self, max_dust: usize) -> f32 {
        self.dust.len() as f32 / max_dust as f32
    }

    /// Whole seconds of the current patient stretch (0 without a start-mark).
    #[inline]
    pub fn patience_secs(&self, now: Millis) -> u64 {
        match self.patience_started {
            Some(mark) => now.secs_since(mark),
            None => 0,
        }
    }
}

// ── ChamberStore ──────────────────────────────────────────────────────────────

/// The state-owning simulation core.
///
/// All mutation funnels through the operations below; consumers read the
/// snapshot via [`state`][Self::state].  Every operation is total over its
/// documented domain: out-of-range numeric inputs are clamped to the nearest
/// legal value and an unknown crack id is a silent no-op, so nothing here
/// can fail mid-session.
pub struct ChamberStore {
    config:    ChamberConfig,
    state:     ChamberState,
    activity:  ActivityTracker,
    rng:       ChamberRng,
    dust_ids:  IdCounter,
    crack_ids: IdCounter,
    moss_ids:  IdCounter,
}

impl ChamberStore {
    /// Build a store for a session starting at `start`.
    ///
    /// Callers should run `config.validate()` first (the session builder
    /// does); the store itself assumes a consistent config.
    pub fn new(config: ChamberConfig, start: Millis) -> Self {
        let rng = ChamberRng::new(config.seed);
        let state = ChamberState::new(config.neutral_frequency);
        Self {
            config,
            state,
            activity:  ActivityTracker::new(start),
            rng,
            dust_ids:  IdCounter::new(),
            crack_ids: IdCounter::new(),
            moss_ids:  IdCounter::new(),
        }
    }

    /// Build a store over a pre-constructed state — lets tests (and a
    /// checkpoint layer) start mid-session.  ID counters resume past the
    /// highest id present so allocation stays collision-free.
    pub fn with_state(config: ChamberConfig, state: ChamberState, start: Millis) -> Self {
        let next = |ids: &mut dyn Iterator<Item = u32>| ids.max().map_or(0, |m| m + 1);
        let dust_ids = IdCounter::starting_at(next(&mut state.dust.iter().map(|p| p.id.0)));
        let crack_ids = IdCounter::starting_at(next(&mut state.cracks.iter().map(|c| c.id.0)));
        let moss_ids = IdCounter::starting_at(next(&mut state.moss.iter().map(|m| m.id.0)));
        let rng = ChamberRng::new(config.seed);
        Self {
            config,
            state,
            activity: ActivityTracker::new(start),
            rng,
            dust_ids,
            crack_ids,
            moss_ids,
        }
    }

    /// Read-only snapshot of the current state.
    #[inline]
    pub fn state(&self) -> &ChamberState {
        &self.state
    }

    /// The policy configuration this store runs under.
    #[inline]
    pub fn config(&self) -> &ChamberConfig {
        &self.config
    }

    /// Last-interaction tracking, read-only.
    #[inline]
    pub fn activity(&self) -> &ActivityTracker {
        &self.activity
    }

    /// Dust level derived from the particle collection.
    #[inline]
    pub fn dust_level(&self) -> f32 {
        self.state.dust_level(self.config.max_dust)
    }

    // ── User operations ───────────────────────────────────────────────────

    /// Move the dial.  Records activity; clamps to [0, 1].
    ///
    /// On the overload rising edge a batch of 3–6 cracks is generated in the
    /// same transition, so `overloaded` and non-empty `cracks` are never
    /// observable apart.  Leaving the steady mid-range (or overloading)
    /// interrupts patience accrual immediately, not on the next slow tick.
    pub fn set_frequency(&mut self, freq: f32, now: Millis) -> Vec<ChamberEvent> {
        let freq = freq.clamp(0.0, 1.0);
        self.activity.touch(now);

        let mut events = Vec::new();
        if freq >= self.config.overload_threshold && !self.state.overloaded {
            let count = self.spawn_cracks();
            self.state.overloaded = true;
            events.push(ChamberEvent::CracksSpawned { count });
        }
        self.state.frequency = freq;

        if !self.config.is_steady(freq) || self.state.overloaded {
            self.state.patience_started = None;
        }
        events
    }

    /// Drag-clean at `(x, y)`: removes every particle within `radius`.
    ///
    /// Records activity; clamps the point to the plane and the radius to
    /// non-negative.  Cleaning the field down to empty sets the one-shot
    /// quote flag — only on the genuine became-empty edge.
    pub fn clean_dust(&mut self, x: f32, y: f32, radius: f32, now: Millis) -> Vec<ChamberEvent> {
        let x = x.clamp(0.0, 100.0);
        let y = y.clamp(0.0, 100.0);
        let radius = radius.max(0.0);
        self.activity.touch(now);

        let before = self.state.dust.len();
        self.state.dust.retain(|p| p.distance_to(x, y) > radius);
        let removed = before - self.state.dust.len();

        let mut events = Vec::new();
        if removed > 0 {
            events.push(ChamberEvent::DustCleaned { removed });
        }
        if before > 0 && self.state.dust.is_empty() {
            self.state.quote_pending = true;
            events.push(ChamberEvent::QuoteRevealed);
        }
        events
    }

    /// Repair one crack.  Unknown or already-repaired ids are a silent
    /// no-op (idempotent), though activity is still recorded — the user did
    /// interact.
    ///
    /// Repairing the last crack calms the chamber: `overloaded` clears and
    /// the frequency snaps back to neutral.  This is the only way out of
    /// overload.
    pub fn repair_crack(&mut self, id: CrackId, now: Millis) -> Vec<ChamberEvent> {
        self.activity.touch(now);

        let before = self.state.cracks.len();
        self.state.cracks.retain(|c| c.id != id);
        if self.state.cracks.len() == before {
            return Vec::new();
        }

        let mut events = vec![ChamberEvent::CrackRepaired { id }];
        self.state.overloaded = !self.state.cracks.is_empty();
        if !self.state.overloaded {
            self.state.frequency = self.config.neutral_frequency;
            events.push(ChamberEvent::OverloadCleared);
        }
        events
    }

    /// Consume the one-shot quote flag.
    pub fn acknowledge_quote(&mut self) {
        self.state.quote_pending = false;
    }

    /// Consume the one-shot explosion flag.  Purely a notification hand-back:
    /// dust spawning and cleaning were never gated on it.
    pub fn acknowledge_explosion(&mut self) {
        self.state.explosion_pending = false;
    }

    // ── Tick operations ───────────────────────────────────────────────────

    /// Fast tick: advance the dust process.
    ///
    /// No-op until idleness exceeds the spawn threshold, at capacity, and
    /// while overloaded.  Otherwise 1–3 particles spawn, ramping up with
    /// idle duration — decay accelerates with neglect.  The spawn that
    /// reaches capacity sets the explosion flag once; it cannot fire again
    /// until the flag is acknowledged and dust has dropped below capacity.
    pub fn advance_dust_tick(&mut self, now: Millis) -> Vec<ChamberEvent> {
        let idle = self.activity.idle_ms(now);
        if idle <= self.config.idle_spawn_ms {
            return Vec::new();
        }

        // Spawning is the only path to capacity, so the explosion edge is
        // detected below, at the moment a spawn reaches the cap.  A chamber
        // already saturated (or overloaded) just sits.
        if self.state.dust.len() >= self.config.max_dust || self.state.overloaded {
            return Vec::new();
        }

        // rate = min(cap, idle / ramp + 1): 1 just past the threshold,
        // climbing to the cap as neglect lengthens.
        let rate = (idle / self.config.spawn_ramp_ms + 1)
            .min(u64::from(self.config.max_spawn_per_tick)) as usize;
        let room = self.config.max_dust - self.state.dust.len();
        let count = rate.min(room);

        for _ in 0..count {
            let id = DustId(self.dust_ids.next());
            let particle = DustParticle {
                id,
                x:       self.rng.gen_range(0.0..100.0),
                y:       self.rng.gen_range(0.0..100.0),
                size:    self.rng.gen_range(2.0..6.0),
                opacity: self.rng.gen_range(0.3..0.7),
            };
            self.state.dust.push(particle);
        }

        let mut events = vec![ChamberEvent::DustSpawned { count }];
        if self.state.dust.len() >= self.config.max_dust && !self.state.explosion_pending {
            self.state.explosion_pending = true;
            events.push(ChamberEvent::ExplosionTriggered);
        }
        events
    }

    /// Slow tick: advance patience and moss.
    ///
    /// Patient ⇔ steady mid-range ∧ dust level below the clean bound ∧ not
    /// overloaded.  The timer is derived from the start-mark; failing the
    /// conditions clears the mark rather than counting down.  Moss growth is
    /// monotonic and, once sprouted, independent of patience.
    pub fn advance_patience_tick(&mut self, now: Millis) -> Vec<ChamberEvent> {
        let patient = self.config.is_steady(self.state.frequency)
            && self.dust_level() < self.config.clean_dust_level
            && !self.state.overloaded;

        if patient {
            let mark = *self.state.patience_started.get_or_insert(now);
            let mut events = Vec::new();

            if now.secs_since(mark) >= self.config.patience_threshold_secs
                && self.state.moss.is_empty()
            {
                for corner in Corner::ALL {
                    let id = MossId(self.moss_ids.next());
                    self.state.moss.push(MossCluster { id, corner, growth: 0.0 });
                }
                events.push(ChamberEvent::MossSprouted);
            }

            // Freshly sprouted clusters grow on the same tick, so growth is
            // already positive when the reward first renders.
            for cluster in &mut self.state.moss {
                cluster.growth = (cluster.growth + self.config.moss_growth_step).min(1.0);
            }
            events
        } else {
            self.state.patience_started = None;
            // Moss keeps growing even through impatient stretches.
            for cluster in &mut self.state.moss {
                cluster.growth = (cluster.growth + self.config.moss_growth_step).min(1.0);
            }
            Vec::new()
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Generate the overload crack batch: uniform count in
    /// `min_cracks..=max_cracks`, positions inside the margin, random
    /// rotation and scale.  Returns how many were spawned.
    fn spawn_cracks(&mut self) -> usize {
        let count = self.rng.gen_range(self.config.min_cracks..=self.config.max_cracks) as usize;
        let lo = self.config.crack_margin;
        let hi = 100.0 - self.config.crack_margin;
        for _ in 0..count {
            let id = CrackId(self.crack_ids.next());
            let crack = Crack {
                id,
                x:        self.rng.gen_range(lo..hi),
                y:        self.rng.gen_range(lo..hi),
                rotation: self.rng.gen_range(0.0..360.0),
                scale:    self.rng.gen_range(0.5..1.0),
            };
            self.state.cracks.push(crack);
        }
        count
    }
}
