//! Coordinate and geometry types shared by the draw stream and the UI.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Positive rotation angles turn clockwise on screen (a consequence of +Y down).

mod bounding_size;
mod rect;
mod rotation;
mod vec2;

pub use bounding_size::BoundingSize;
pub use rect::Rect;
pub use rotation::Rotation;
pub use vec2::Vec2;
