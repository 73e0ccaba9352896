use clockface_engine::coords::Vec2;

/// Size bounds a parent offers a child during measure.
///
/// An axis with an infinite `max` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// `size` clamped into `[min, max]` on each axis.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.clamp(self.min.x, self.max.x.max(self.min.x)),
            size.y.clamp(self.min.y, self.max.y.max(self.min.y)),
        )
    }

    /// The largest bounded size: `max`, or `min` on unbounded axes.
    #[inline]
    #[must_use]
    pub fn biggest(self) -> Vec2 {
        let axis = |min: f32, max: f32| if max.is_finite() { max } else { min };
        Vec2::new(axis(self.min.x, self.max.x), axis(self.min.y, self.max.y))
    }
}
