//! Plain-data entity types owned by the state store.
//!
//! All geometry lives on the normalized [0,100]×[0,100] plane; the
//! presentation layer maps it to whatever surface it renders on.

use std::fmt;

use chamber_core::{CrackId, DustId, MossId};

// ── Dust ──────────────────────────────────────────────────────────────────────

/// One unit of accumulated idle decay.
///
/// Size and opacity are decorative — spawned once, never mutated — but they
/// live here so a render layer gets a stable look per particle instead of
/// re-rolling visuals every frame.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DustParticle {
    pub id:      DustId,
    pub x:       f32,
    pub y:       f32,
    /// Render diameter hint, uniform in [2, 6).
    pub size:    f32,
    /// Render opacity hint, uniform in [0.3, 0.7).
    pub opacity: f32,
}

impl DustParticle {
    /// Euclidean distance from this particle to `(x, y)`.
    #[inline]
    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        let dx = self.x - x;
        let dy = self.y - y;
        (dx * dx + dy * dy).sqrt()
    }
}

// ── Cracks ────────────────────────────────────────────────────────────────────

/// An overload artifact that must be explicitly repaired.
///
/// Positions are kept away from the plane edges (margin from config) so a
/// crack glyph is always fully visible and clickable.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crack {
    pub id:       CrackId,
    pub x:        f32,
    pub y:        f32,
    /// Degrees in [0, 360).
    pub rotation: f32,
    /// Render scale in [0.5, 1.0).
    pub scale:    f32,
}

// ── Moss ──────────────────────────────────────────────────────────────────────

/// One of the four screen corners a moss cluster anchors to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All four corners in sprout order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Corner::TopLeft     => "top-left",
            Corner::TopRight    => "top-right",
            Corner::BottomLeft  => "bottom-left",
            Corner::BottomRight => "bottom-right",
        };
        write!(f, "{s}")
    }
}

/// The patience reward: sprouts at growth 0, grows monotonically toward 1,
/// and is never destroyed within a session.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MossCluster {
    pub id:     MossId,
    pub corner: Corner,
    pub growth: f32,
}
