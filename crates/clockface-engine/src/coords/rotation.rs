use super::Vec2;

/// Clockwise rotation about a pivot point, in degrees.
///
/// Shapes carry an absolute rotation instead of sharing a mutable canvas
/// transform, so each command is self-contained.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rotation {
    pub pivot: Vec2,
    pub degrees: f32,
}

impl Rotation {
    #[inline]
    pub const fn new(pivot: Vec2, degrees: f32) -> Self {
        Self { pivot, degrees }
    }

    /// Maps a point through this rotation.
    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        p.rotated_about(self.pivot, self.degrees)
    }
}
