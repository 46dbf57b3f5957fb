//! User gestures, normalized by the presentation layer.

use chamber_core::CrackId;

/// One user-originated operation, ready for the store.
///
/// The presentation layer translates raw input — dial angle, pointer drag,
/// click on a crack glyph — into these before handing them to
/// [`Session::apply`][crate::Session::apply].  Out-of-range values are fine;
/// the store clamps.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ChamberInput {
    /// Dial moved to a normalized frequency in [0, 1].
    SetFrequency(f32),

    /// Drag-clean gesture: centre point and radius on the [0,100]² plane.
    CleanDust { x: f32, y: f32, radius: f32 },

    /// Click on a crack glyph.
    RepairCrack(CrackId),

    /// Presentation has shown the hidden quote.
    AcknowledgeQuote,

    /// Presentation has played out the explosion.
    AcknowledgeExplosion,
}
