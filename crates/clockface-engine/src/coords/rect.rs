use super::{BoundingSize, Vec2};

/// Axis-aligned rectangle in logical pixels; `origin` is the top-left corner.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rect of `size` centred on `center`.
    #[inline]
    pub fn centered_at(center: Vec2, size: Vec2) -> Self {
        Self::from_origin_size(center - size / 2.0, size)
    }

    /// Bottom-right corner.
    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size / 2.0
    }

    #[inline]
    pub fn bounding_size(self) -> BoundingSize {
        BoundingSize::new(self.size.x, self.size.y)
    }

    /// Shrinks the rect by `by` on every side. The size never goes negative.
    #[must_use]
    pub fn inset(self, by: f32) -> Self {
        let size = Vec2::new(
            (self.size.x - 2.0 * by).max(0.0),
            (self.size.y - 2.0 * by).max(0.0),
        );
        Self::from_origin_size(self.origin + Vec2::new(by, by), size)
    }
}
