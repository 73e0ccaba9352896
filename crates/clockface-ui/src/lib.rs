//! Clockface UI: an analog clock widget on top of `clockface-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use clockface_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let font = scene.load_font(include_bytes!("my_font.ttf"))?;
//!
//! // Mounting starts the 100 ms sampler on the host's runtime.
//! let clock: Element = AnalogClock::mount(runtime.handle(), font, 24.0).into();
//!
//! // On every redraw:
//! let draw_list = scene.frame_ref(&clock, viewport);
//! // Hand draw_list to the host's rasteriser.
//! ```
//!
//! Dropping the clock unmounts it and stops the sampler.

pub mod clock;
pub mod constraints;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything needed to host the clock. Import this in application code.
pub mod prelude {
    pub use crate::clock::{ClockHandle, ClockState, FaceGeometry, TimeSampler};
    pub use crate::constraints::Constraints;
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        analog_clock::{AnalogClock, Placement},
        date_badge::DateBadge,
    };

    // Re-export the engine primitives everyone needs.
    pub use clockface_engine::coords::{BoundingSize, Rect, Vec2};
    pub use clockface_engine::paint::{Color, Paint};
    pub use clockface_engine::text::FontId;
    pub use clockface_engine::time::{SystemWallClock, WallClock};
}
