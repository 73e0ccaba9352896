/// Pixel dimensions of a drawing surface, as delivered by host layout.
///
/// A size that is zero, negative, or non-finite (e.g. before the first layout
/// pass) is not drawable; consumers must treat it as "paint nothing".
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BoundingSize {
    pub width: f32,
    pub height: f32,
}

impl BoundingSize {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}
