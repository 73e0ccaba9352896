use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is expected in [0, 1] in typical usage, but is not strictly enforced.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Radial gradient in logical pixel space.
///
/// `t = 0` sits at `center`, `t = 1` at distance `radius`; beyond that the
/// edge stop is held.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(center: Vec2, radius: f32, stops: Vec<ColorStop>) -> Self {
        Self {
            center,
            radius,
            stops,
        }
    }

    /// Two-stop gradient from `inner` at the center to `outer` at `radius`.
    pub fn two_stop(center: Vec2, radius: f32, inner: Color, outer: Color) -> Self {
        let stops = vec![ColorStop::new(0.0, inner), ColorStop::new(1.0, outer)];
        Self::new(center, radius, stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_stop_runs_from_center_to_rim() {
        let g = RadialGradient::two_stop(Vec2::new(5.0, 5.0), 15.0, Color::white(), Color::black());
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.stops[0], ColorStop::new(0.0, Color::white()));
        assert_eq!(g.stops[1], ColorStop::new(1.0, Color::black()));
    }
}
