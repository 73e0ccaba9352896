//! Font loading and text measurement.
//!
//! Glyph rasterisation is the host's concern; the UI only needs pixel-accurate
//! extents to centre labels.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
