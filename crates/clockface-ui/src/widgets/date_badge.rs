use std::cell::RefCell;
use std::sync::Arc;

use chrono::Locale;
use clockface_engine::coords::{Rect, Vec2};
use clockface_engine::text::FontId;
use clockface_engine::time::{host_locale, WallClock};
use tokio::sync::watch;

use crate::clock::{format_date, ClockState, FacePalette};
use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Widget;

/// Space between the label text and the badge edge.
pub const BADGE_PADDING: f32 = 12.0;
pub const BADGE_CORNER_RADIUS: f32 = 16.0;

/// Today's date on a rounded plate, centred in the rect it is given.
///
/// The date is re-read on every paint. As a standalone widget the theme
/// follows the clock state it is subscribed to; a clock face hosting the
/// badge passes its own snapshot through [`paint_themed`](Self::paint_themed).
///
/// # Example
/// ```rust,ignore
/// DateBadge::new(clock, handle.subscribe(), font, 24.0).locale(Locale::de_DE)
/// ```
pub struct DateBadge {
    clock: Arc<dyn WallClock>,
    state: watch::Receiver<ClockState>,
    locale: Locale,
    font: FontId,
    text_size: f32,
    /// Last successfully formatted label, reused when the clock cannot be read.
    last_label: RefCell<Option<String>>,
}

impl DateBadge {
    pub fn new(
        clock: Arc<dyn WallClock>,
        state: watch::Receiver<ClockState>,
        font: FontId,
        text_size: f32,
    ) -> Self {
        Self {
            clock,
            state,
            locale: host_locale(),
            font,
            text_size,
            last_label: RefCell::new(None),
        }
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn text_size(mut self, v: f32) -> Self {
        self.text_size = v;
        self
    }

    /// Formats the current date, or the last good label if the clock fails.
    pub fn label(&self) -> Option<String> {
        match self.clock.now() {
            Ok(now) => {
                let label = format_date(&now, self.locale);
                *self.last_label.borrow_mut() = Some(label.clone());
                Some(label)
            }
            Err(err) => {
                log::warn!("date badge keeps last label: {err}");
                self.last_label.borrow().clone()
            }
        }
    }

    /// Plate rect for a label of `text_size`, centred in `bounds`.
    pub fn plate_rect(bounds: Rect, text_size: Vec2) -> Rect {
        let size = text_size + Vec2::new(2.0 * BADGE_PADDING, 2.0 * BADGE_PADDING);
        Rect::centered_at(bounds.center(), size)
    }

    /// Paints the badge in the day or night palette regardless of the
    /// subscribed state.
    pub fn paint_themed(&self, painter: &mut Painter, rect: Rect, is_day: bool) {
        if !rect.bounding_size().is_valid() {
            return;
        }
        let Some(label) = self.label() else {
            return;
        };

        let palette = FacePalette::for_day(is_day);
        let text_size = painter.measure_text(&label, self.font, self.text_size);
        let plate = Self::plate_rect(rect, text_size);
        let origin = plate.inset(BADGE_PADDING).origin;

        painter.fill_rounded_rect(plate, BADGE_CORNER_RADIUS, palette.badge_background);
        painter.text(label, self.font, self.text_size, palette.badge_text, origin);
    }
}

impl Widget for DateBadge {
    /// The badge positions itself inside whatever it is given, so it asks for
    /// all available space.
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain(constraints.biggest())
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let is_day = self.state.borrow().is_day;
        self.paint_themed(painter, rect, is_day);
    }
}
