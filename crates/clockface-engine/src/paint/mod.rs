//! Fill sources for recorded shapes: flat colors and the radial gradient used
//! for the hand pivot.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, RadialGradient};

/// How a shape's interior is filled.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    RadialGradient(RadialGradient),
}

impl From<Color> for Paint {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<RadialGradient> for Paint {
    #[inline]
    fn from(gradient: RadialGradient) -> Self {
        Paint::RadialGradient(gradient)
    }
}
