use core::ops::{Add, Div, Sub};

/// 2D vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Rotates `self` about `pivot` by `degrees` (clockwise on screen).
    #[inline]
    #[must_use]
    pub fn rotated_about(self, pivot: Vec2, degrees: f32) -> Vec2 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let d = self - pivot;
        Vec2::new(
            pivot.x + d.x * cos - d.y * sin,
            pivot.y + d.x * sin + d.y * cos,
        )
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn quarter_turn_moves_up_to_right() {
        let pivot = Vec2::new(10.0, 10.0);
        let up = Vec2::new(10.0, 0.0);
        assert!(close(up.rotated_about(pivot, 90.0), Vec2::new(20.0, 10.0)));
    }

    #[test]
    fn full_turn_is_identity() {
        let pivot = Vec2::new(3.0, -2.0);
        let p = Vec2::new(7.5, 4.0);
        assert!(close(p.rotated_about(pivot, 360.0), p));
    }

    #[test]
    fn rotation_preserves_distance_to_pivot() {
        let pivot = Vec2::new(50.0, 50.0);
        let p = Vec2::new(80.0, 10.0);
        let r = p.rotated_about(pivot, 37.0);
        assert!(((r - pivot).length() - (p - pivot).length()).abs() < 1e-3);
    }
}
