use clockface_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::painter::Painter;

/// Something that can size itself and record draw commands.
///
/// The clock face and its date badge are widgets; so is anything passed to
/// [`AnalogClock::content`](crate::widgets::analog_clock::AnalogClock::content).
///
/// ```rust,ignore
/// struct Dot { color: Color }
///
/// impl Widget for Dot {
///     fn measure(&self, c: Constraints) -> Vec2 {
///         c.constrain(Vec2::new(8.0, 8.0))
///     }
///     fn paint(&self, painter: &mut Painter, rect: Rect) {
///         painter.fill_circle(rect.center(), 4.0, self.color);
///     }
/// }
///
/// AnalogClock::mount(handle, font, 24.0).content(Dot { color: Color::rgb(0xFF, 0, 0) })
/// ```
pub trait Widget: 'static {
    /// Preferred size within `constraints`. Same inputs, same answer.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Records this widget into `painter`, inside the `rect` its parent chose.
    fn paint(&self, painter: &mut Painter, rect: Rect);
}

/// An owned, type-erased widget.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(widget: W) -> Self {
        Self(Box::new(widget))
    }

    #[inline]
    pub fn measure(&self, constraints: Constraints) -> Vec2 {
        self.0.measure(constraints)
    }

    #[inline]
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(widget: W) -> Self {
        Self::new(widget)
    }
}
