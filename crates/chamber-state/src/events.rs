//! Discrete events emitted by store operations.
//!
//! Events fire only on genuine edges — a second capacity-reached tick emits
//! no second `ExplosionTriggered`, cleaning an already-empty field emits no
//! `QuoteRevealed`.  The audio layer keys sound effects off these; the
//! presentation layer can ignore them and diff snapshots instead.

use std::fmt;

use chamber_core::CrackId;

/// A discrete occurrence produced by one store operation or tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChamberEvent {
    /// Overload rising edge: a batch of cracks appeared.
    CracksSpawned { count: usize },

    /// One crack was repaired (fires only when the id actually matched).
    CrackRepaired { id: CrackId },

    /// The last crack was repaired; the chamber calmed and the frequency
    /// snapped back to neutral.
    OverloadCleared,

    /// A clean gesture removed `removed` particles (`removed > 0`).
    DustCleaned { removed: usize },

    /// A dust tick spawned `count` particles (`count > 0`).
    DustSpawned { count: usize },

    /// Dust reached capacity unattended — the explosion flag was set.
    ExplosionTriggered,

    /// The dust field became empty through cleaning — the hidden quote
    /// flag was set.
    QuoteRevealed,

    /// The patience threshold was reached and the four moss clusters
    /// sprouted.
    MossSprouted,
}

impl fmt::Display for ChamberEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChamberEvent::CracksSpawned { count } => write!(f, "cracks-spawned({count})"),
            ChamberEvent::CrackRepaired { id }    => write!(f, "crack-repaired({id})"),
            ChamberEvent::OverloadCleared         => write!(f, "overload-cleared"),
            ChamberEvent::DustCleaned { removed } => write!(f, "dust-cleaned({removed})"),
            ChamberEvent::DustSpawned { count }   => write!(f, "dust-spawned({count})"),
            ChamberEvent::ExplosionTriggered      => write!(f, "explosion-triggered"),
            ChamberEvent::QuoteRevealed           => write!(f, "quote-revealed"),
            ChamberEvent::MossSprouted            => write!(f, "moss-sprouted"),
        }
    }
}
