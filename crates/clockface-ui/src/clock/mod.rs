//! Clock domain: time sampling, face geometry, palettes, and date labels.
//!
//! Everything here except [`sampler`] is pure and synchronous.

pub mod date;
pub mod geometry;
pub mod sampler;
pub mod state;
pub mod theme;

pub use date::format_date;
pub use geometry::{FaceGeometry, HandKind, Numeral, TickMark};
pub use sampler::{ClockHandle, TimeSampler, TICK_PERIOD};
pub use state::{is_day, ClockState};
pub use theme::FacePalette;
