//! Pure face geometry.
//!
//! All lengths scale with the surface width (`span`). [`hand_endpoint`] uses
//! the trigonometric convention in screen space: 0° at 3 o'clock, growing
//! clockwise. Points are placed at `center - endpoint`, which moves 0° to
//! 9 o'clock; [`FaceGeometry::hand_tip`] then adds a +90° clockwise
//! presentation offset so a hand at 0° points at 12 o'clock.

use clockface_engine::coords::{BoundingSize, Rect, Rotation, Vec2};

pub const NUMERAL_COUNT: usize = 12;
pub const HOUR_TICK_COUNT: usize = 12;
pub const MINUTE_TICK_COUNT: usize = 36;

const NUMERAL_STEP_DEG: f64 = 30.0;
const HOUR_TICK_STEP_DEG: f32 = 30.0;
const MINUTE_TICK_STEP_DEG: f32 = 10.0;

/// Numerals sit at `span / NUMERAL_DIVISOR` from the center.
const NUMERAL_DIVISOR: f32 = 2.5;
/// Presentation rotation applied to hands, clockwise.
const HAND_OFFSET_DEG: f32 = 90.0;

// Tick rects are fixed pixel sizes, inset from the bezel edge.
const TICK_INSET: f32 = 30.0;
const TICK_OFFSET_X: f32 = 5.0;
const MINUTE_TICK_SIZE: Vec2 = Vec2::new(7.0, 27.0);
const HOUR_TICK_SIZE: Vec2 = Vec2::new(20.0, 20.0);

/// Bezel radius is `span / BEZEL_DIVISOR`, face radius `span / FACE_DIVISOR`.
const BEZEL_DIVISOR: f32 = 2.0;
const FACE_DIVISOR: f32 = 2.1;

/// The three clock hands.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    /// Hand length is `span / divisor`.
    pub const fn length_divisor(self) -> f32 {
        match self {
            HandKind::Hour => 4.0,
            HandKind::Minute => 2.5,
            HandKind::Second => 2.2,
        }
    }

    pub const fn stroke_width(self) -> f32 {
        match self {
            HandKind::Hour => 25.0,
            HandKind::Minute => 20.0,
            HandKind::Second => 10.0,
        }
    }
}

/// A dial numeral and the point its text should be centred on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Numeral {
    pub index: usize,
    pub label: u32,
    pub center: Vec2,
}

/// One decoration mark: an upright rect at 12 o'clock plus its absolute
/// clockwise rotation about the face center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TickMark {
    pub rect: Rect,
    pub rotation: Rotation,
}

/// Label shown at numeral slot `index`.
///
/// Slot 0 lies on the left (9 o'clock) and slots advance clockwise, so the
/// label is offset by nine hours: 0 → 9, 3 → 12, 4 → 1.
#[inline]
pub fn numeral_label(index: usize) -> u32 {
    match (index + 9) % 12 {
        0 => 12,
        n => n as u32,
    }
}

/// Minute marks that coincide with an hour mark are not drawn.
#[inline]
pub fn is_minute_tick_suppressed(index: usize) -> bool {
    (index * 10) % 30 == 0
}

/// Endpoint of a hand of `length` at `angle_deg`, relative to the center.
#[inline]
pub fn hand_endpoint(angle_deg: f64, length: f32) -> Vec2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let length = f64::from(length);
    Vec2::new((length * cos) as f32, (length * sin) as f32)
}

/// Layout of a clock face inside a rect.
///
/// A face built from an undrawable size has `span == 0`: it yields no ticks or
/// numerals and every hand collapses onto the center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceGeometry {
    center: Vec2,
    span: f32,
}

impl FaceGeometry {
    /// Face filling a surface of `size`, anchored at the origin.
    pub fn new(size: BoundingSize) -> Self {
        Self::from_rect(Rect::new(0.0, 0.0, size.width, size.height))
    }

    /// Face filling `rect`.
    pub fn from_rect(rect: Rect) -> Self {
        if rect.bounding_size().is_valid() && rect.origin.is_finite() {
            Self {
                center: rect.center(),
                span: rect.size.x,
            }
        } else {
            Self {
                center: Vec2::zero(),
                span: 0.0,
            }
        }
    }

    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.span > 0.0
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn bezel_radius(&self) -> f32 {
        self.span / BEZEL_DIVISOR
    }

    #[inline]
    pub fn face_radius(&self) -> f32 {
        self.span / FACE_DIVISOR
    }

    // ── numerals ──────────────────────────────────────────────────────────

    pub fn numeral(&self, index: usize) -> Option<Numeral> {
        if !self.is_drawable() || index >= NUMERAL_COUNT {
            return None;
        }
        let angle = index as f64 * NUMERAL_STEP_DEG;
        let offset = hand_endpoint(angle, self.span / NUMERAL_DIVISOR);
        Some(Numeral {
            index,
            label: numeral_label(index),
            center: self.center - offset,
        })
    }

    pub fn numerals(&self) -> Vec<Numeral> {
        (0..NUMERAL_COUNT).filter_map(|i| self.numeral(i)).collect()
    }

    // ── ticks ─────────────────────────────────────────────────────────────

    /// The 24 minute marks left after hour positions are removed.
    pub fn minute_ticks(&self) -> Vec<TickMark> {
        (0..MINUTE_TICK_COUNT)
            .filter(|&i| !is_minute_tick_suppressed(i))
            .filter_map(|i| {
                let degrees = i as f32 * MINUTE_TICK_STEP_DEG;
                self.tick(MINUTE_TICK_SIZE, degrees)
            })
            .collect()
    }

    pub fn hour_ticks(&self) -> Vec<TickMark> {
        (0..HOUR_TICK_COUNT)
            .filter_map(|i| self.tick(HOUR_TICK_SIZE, i as f32 * HOUR_TICK_STEP_DEG))
            .collect()
    }

    fn tick(&self, size: Vec2, degrees: f32) -> Option<TickMark> {
        if !self.is_drawable() {
            return None;
        }
        let origin = Vec2::new(
            self.center.x - TICK_OFFSET_X,
            self.center.y - self.span / 2.0 + TICK_INSET,
        );
        Some(TickMark {
            rect: Rect::from_origin_size(origin, size),
            rotation: Rotation::new(self.center, degrees),
        })
    }

    // ── hands ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn hand_length(&self, kind: HandKind) -> f32 {
        self.span / kind.length_divisor()
    }

    /// Screen position of the tip of `kind` at `angle_deg` from 12 o'clock.
    pub fn hand_tip(&self, kind: HandKind, angle_deg: f64) -> Vec2 {
        let end = self.center - hand_endpoint(angle_deg, self.hand_length(kind));
        end.rotated_about(self.center, HAND_OFFSET_DEG)
    }
}
