use std::sync::Arc;

use clockface_engine::coords::{Rect, Vec2};
use clockface_engine::paint::RadialGradient;
use clockface_engine::text::FontId;
use clockface_engine::time::{SystemWallClock, WallClock};
use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::clock::{ClockHandle, ClockState, FaceGeometry, FacePalette, HandKind, TimeSampler};
use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::{Element, Widget};
use crate::widgets::date_badge::DateBadge;

/// Radius of the gradient disc covering the hand roots.
pub const PIVOT_RADIUS: f32 = 15.0;

/// How the clock sizes itself inside its parent.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum Placement {
    /// Take the whole rect the parent offers.
    #[default]
    Fill,
    /// A fixed size, centred in the parent rect and shrunk to fit it.
    Fixed(Vec2),
}

impl Placement {
    /// The rect the face occupies inside `parent`.
    pub fn resolve(self, parent: Rect) -> Rect {
        match self {
            Placement::Fill => parent,
            Placement::Fixed(size) => {
                let size = Vec2::new(size.x.min(parent.size.x), size.y.min(parent.size.y));
                Rect::centered_at(parent.center(), size)
            }
        }
    }
}

// ── content layer ─────────────────────────────────────────────────────────

/// What is drawn between the dial and the hands.
enum Content {
    Badge(DateBadge),
    Custom(Element),
    Empty,
}

impl Content {
    /// The badge is themed from `state`, the snapshot the face was drawn with.
    fn paint(&self, painter: &mut Painter, rect: Rect, state: ClockState) {
        match self {
            Content::Badge(badge) => badge.paint_themed(painter, rect, state.is_day),
            Content::Custom(element) => element.paint(painter, rect),
            Content::Empty => {}
        }
    }
}

// ── AnalogClock ───────────────────────────────────────────────────────────

/// An analog clock face with a day/night theme and a date badge.
///
/// Mounting starts a [`TimeSampler`] on the host's runtime; the widget paints
/// whatever snapshot is current when the host frames it. Dropping the widget
/// (or calling [`unmount`](Self::unmount)) stops the sampler.
///
/// # Example
/// ```rust,ignore
/// let clock = AnalogClock::mount(runtime.handle(), font, 24.0)
///     .placement(Placement::Fixed(Vec2::new(480.0, 480.0)));
/// let mut changes = clock.subscribe();
/// let root: Element = clock.into();
///
/// while changes.changed().await.is_ok() {
///     rasterise(scene.frame_ref(&root, viewport));
/// }
/// ```
pub struct AnalogClock {
    handle: ClockHandle,
    renderer: FaceRenderer,
    placement: Placement,
    content: Content,
}

impl AnalogClock {
    /// Mounts a clock driven by the system clock.
    pub fn mount(runtime: &Handle, font: FontId, text_size: f32) -> Self {
        Self::with_wall_clock(runtime, Arc::new(SystemWallClock), font, text_size)
    }

    /// Mounts a clock driven by `clock`. The default date badge reads the
    /// same clock.
    pub fn with_wall_clock(
        runtime: &Handle,
        clock: Arc<dyn WallClock>,
        font: FontId,
        text_size: f32,
    ) -> Self {
        let handle = TimeSampler::new(clock.clone()).spawn(runtime);
        let badge = DateBadge::new(clock, handle.subscribe(), font, text_size);
        Self {
            handle,
            renderer: FaceRenderer { font, text_size },
            placement: Placement::Fill,
            content: Content::Badge(badge),
        }
    }

    /// Text size of the numerals and of the default date badge.
    pub fn text_size(mut self, v: f32) -> Self {
        self.renderer.text_size = v;
        if let Content::Badge(badge) = self.content {
            self.content = Content::Badge(badge.text_size(v));
        }
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Replaces the date badge with another widget, painted over the face rect.
    pub fn content(mut self, content: impl Into<Element>) -> Self {
        self.content = Content::Custom(content.into());
        self
    }

    pub fn without_content(mut self) -> Self {
        self.content = Content::Empty;
        self
    }

    /// The snapshot the next paint will use.
    #[inline]
    pub fn state(&self) -> ClockState {
        self.handle.state()
    }

    /// A receiver that wakes whenever the hands move; hosts redraw on it.
    pub fn subscribe(&self) -> watch::Receiver<ClockState> {
        self.handle.subscribe()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.handle.is_running()
    }

    /// Stops the sampler. Equivalent to dropping the clock.
    pub fn unmount(self) {
        drop(self);
    }

    pub fn face_rect(&self, parent: Rect) -> Rect {
        self.placement.resolve(parent)
    }
}

impl Widget for AnalogClock {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        match self.placement {
            Placement::Fill => constraints.constrain(constraints.biggest()),
            Placement::Fixed(size) => constraints.constrain(size),
        }
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let state = self.handle.state();
        let face = self.face_rect(rect);
        self.renderer.paint(painter, face, state, |painter, face| {
            self.content.paint(painter, face, state)
        });
    }
}

// ── FaceRenderer ──────────────────────────────────────────────────────────

/// Paints one frame of a clock face for a given snapshot.
///
/// Pure apart from the painter: the same rect and state always record the
/// same commands.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceRenderer {
    pub font: FontId,
    pub text_size: f32,
}

impl FaceRenderer {
    /// Records bezel, face, ticks, numerals, content, hands and pivot, in
    /// that order. `content` is called with the face rect. An undrawable
    /// rect records nothing.
    pub fn paint<F>(&self, painter: &mut Painter, rect: Rect, state: ClockState, content: F)
    where
        F: FnOnce(&mut Painter, Rect),
    {
        let geometry = FaceGeometry::from_rect(rect);
        if !geometry.is_drawable() {
            return;
        }
        let palette = FacePalette::for_day(state.is_day);
        let center = geometry.center();

        painter.fill_circle(center, geometry.bezel_radius(), palette.bezel);
        painter.fill_circle(center, geometry.face_radius(), palette.face);

        for tick in geometry.minute_ticks() {
            painter.fill_rotated_rect(tick.rect, tick.rotation, palette.minute_tick);
        }
        for tick in geometry.hour_ticks() {
            painter.fill_rotated_rect(tick.rect, tick.rotation, palette.hour_tick);
        }

        for numeral in geometry.numerals() {
            let label = numeral.label.to_string();
            let size = painter.measure_text(&label, self.font, self.text_size);
            let origin = numeral.center - size / 2.0;
            painter.text(label, self.font, self.text_size, palette.numeral, origin);
        }

        content(painter, rect);

        let hands = [
            (HandKind::Hour, state.hour_angle, palette.hand),
            (HandKind::Minute, state.minute_angle, palette.hand),
            (HandKind::Second, state.second_angle, palette.second_hand),
        ];
        for (kind, angle, color) in hands {
            let tip = geometry.hand_tip(kind, angle);
            painter.stroke_line(center, tip, kind.stroke_width(), color);
        }

        let pivot = RadialGradient::two_stop(
            center,
            PIVOT_RADIUS,
            palette.pivot_inner,
            palette.pivot_outer,
        );
        painter.fill_circle(center, PIVOT_RADIUS, pivot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use clockface_engine::paint::{Color, Paint};
    use clockface_engine::scene::{DrawCmd, DrawList, LineCmd, TextCmd};
    use clockface_engine::text::FontSystem;
    use clockface_engine::time::FixedWallClock;

    use crate::scene::UiScene;

    fn renderer() -> FaceRenderer {
        FaceRenderer {
            font: FontId::default(),
            text_size: 20.0,
        }
    }

    fn three_oclock(is_day: bool) -> ClockState {
        ClockState {
            hour_angle: 90.0,
            minute_angle: 0.0,
            second_angle: 0.0,
            is_day,
        }
    }

    fn render(rect: Rect, state: ClockState) -> DrawList {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        renderer().paint(&mut Painter::new(&mut list, &fonts), rect, state, |_, _| {});
        list
    }

    fn lines(list: &DrawList) -> Vec<&LineCmd> {
        list.items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Line(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    // ── renderer ──────────────────────────────────────────────────────────

    #[test]
    fn full_face_records_every_layer_in_order() {
        let list = render(Rect::new(0.0, 0.0, 200.0, 200.0), three_oclock(true));
        // bezel + face + 24 minute ticks + 12 hour ticks + 12 numerals + 3 hands + pivot
        assert_eq!(list.len(), 54);

        let kinds: Vec<&str> = list.items().iter().map(|i| i.cmd.kind()).collect();
        assert_eq!(&kinds[..2], &["circle", "circle"]);
        assert!(kinds[2..38].iter().all(|k| *k == "rect"));
        assert!(kinds[38..50].iter().all(|k| *k == "text"));
        assert!(kinds[50..53].iter().all(|k| *k == "line"));
        assert_eq!(kinds[53], "circle");
    }

    #[test]
    fn hands_point_at_the_time() {
        let list = render(Rect::new(0.0, 0.0, 200.0, 200.0), three_oclock(true));
        let hands = lines(&list);

        assert!(close(hands[0].start, Vec2::new(100.0, 100.0)));
        assert!(close(hands[0].end, Vec2::new(150.0, 100.0)));
        assert!(close(hands[1].end, Vec2::new(100.0, 20.0)));
        assert!(close(hands[2].end, Vec2::new(100.0, 100.0 - 200.0 / 2.2)));
        assert_eq!(hands[0].width, 25.0);
        assert_eq!(hands[2].color, Color::rgb(0xFF, 0, 0));
    }

    #[test]
    fn night_palette_applies() {
        let list = render(Rect::new(0.0, 0.0, 200.0, 200.0), three_oclock(false));

        let DrawCmd::Circle(face) = &list.items()[1].cmd else {
            panic!("expected face")
        };
        assert_eq!(face.paint, Paint::Solid(Color::gray(0x44)));
        let DrawCmd::Rect(hour_tick) = &list.items()[37].cmd else {
            panic!("expected tick")
        };
        assert_eq!(hour_tick.paint, Paint::Solid(Color::white()));
        assert_eq!(lines(&list)[0].color, Color::white());
    }

    #[test]
    fn pivot_is_a_gradient_over_the_center() {
        let list = render(Rect::new(0.0, 0.0, 200.0, 200.0), three_oclock(true));
        let DrawCmd::Circle(pivot) = &list.items()[53].cmd else {
            panic!("expected pivot")
        };
        assert_eq!(pivot.radius, PIVOT_RADIUS);
        let Paint::RadialGradient(gradient) = &pivot.paint else {
            panic!("expected gradient")
        };
        assert_eq!(gradient.center, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn numerals_are_centred_on_their_slot() {
        // No font loaded: labels measure 0 × 24.
        let list = render(Rect::new(0.0, 0.0, 200.0, 200.0), three_oclock(true));
        let DrawCmd::Text(nine) = &list.items()[38].cmd else {
            panic!("expected numeral")
        };
        assert_eq!(nine.text, "9");
        assert!(close(nine.origin, Vec2::new(20.0, 88.0)));
    }

    #[test]
    fn content_sits_between_numerals_and_hands() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        renderer().paint(
            &mut Painter::new(&mut list, &fonts),
            Rect::new(0.0, 0.0, 200.0, 200.0),
            three_oclock(true),
            |painter, rect| painter.fill_rect(rect, Color::rgba(0, 0, 0, 0)),
        );
        assert_eq!(list.len(), 55);
        assert_eq!(list.items()[50].cmd.kind(), "rect");
        assert_eq!(list.items()[51].cmd.kind(), "line");
    }

    #[test]
    fn zero_size_paints_nothing() {
        for rect in [
            Rect::new(0.0, 0.0, 0.0, 0.0),
            Rect::new(0.0, 0.0, f32::NAN, 10.0),
        ] {
            assert!(render(rect, three_oclock(true)).is_empty());
        }
    }

    // ── placement ─────────────────────────────────────────────────────────

    #[test]
    fn fixed_placement_is_centred_and_clamped() {
        let parent = Rect::new(0.0, 0.0, 400.0, 300.0);
        assert_eq!(Placement::Fill.resolve(parent), parent);
        assert_eq!(
            Placement::Fixed(Vec2::new(200.0, 200.0)).resolve(parent),
            Rect::new(100.0, 50.0, 200.0, 200.0)
        );
        assert_eq!(
            Placement::Fixed(Vec2::new(500.0, 500.0)).resolve(parent).size,
            Vec2::new(400.0, 300.0)
        );
    }

    // ── mounted widget ────────────────────────────────────────────────────

    fn fixed_clock() -> Arc<FixedWallClock> {
        let at = Local.with_ymd_and_hms(2024, 3, 15, 15, 0, 0).single().unwrap();
        Arc::new(FixedWallClock(at))
    }

    fn mount_fixed() -> AnalogClock {
        AnalogClock::with_wall_clock(&Handle::current(), fixed_clock(), FontId::default(), 20.0)
    }

    fn texts(list: &DrawList) -> Vec<&TextCmd> {
        list.items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Text(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn mounted_clock_frames_with_date_badge() {
        let clock = mount_fixed();
        let mut changes = clock.subscribe();
        changes.changed().await.unwrap();
        assert_eq!(clock.state().hour_angle, 90.0);

        let root: Element = clock.into();
        let mut scene = UiScene::new();
        let list = scene.frame_ref(&root, Vec2::new(200.0, 200.0));

        assert_eq!(list.len(), 56);
        assert_eq!(list.items()[50].cmd.kind(), "rounded_rect");
        let DrawCmd::Text(date) = &list.items()[51].cmd else {
            panic!("expected date")
        };
        assert!(date.text.ends_with("15.03.2024"));
    }

    #[tokio::test(start_paused = true)]
    async fn text_size_reaches_numerals_and_badge() {
        let clock = mount_fixed().text_size(30.0);
        clock.subscribe().changed().await.unwrap();

        let mut scene = UiScene::new();
        let list = scene.frame(clock.into(), Vec2::new(200.0, 200.0));
        let texts = texts(list);

        // 12 numerals and the date label.
        assert_eq!(texts.len(), 13);
        assert!(texts.iter().all(|text| text.size == 30.0));
    }

    #[tokio::test(start_paused = true)]
    async fn badge_is_themed_from_the_face_snapshot() {
        // The badge's own receiver still holds the mount-time day state.
        let clock = mount_fixed();
        let night = three_oclock(false);

        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let rect = Rect::new(0.0, 0.0, 200.0, 200.0);
        clock.content.paint(&mut Painter::new(&mut list, &fonts), rect, night);

        let DrawCmd::RoundedRect(plate) = &list.items()[0].cmd else {
            panic!("expected plate")
        };
        assert_eq!(plate.paint, Paint::Solid(Color::black()));
        assert_eq!(texts(&list)[0].color, Color::white());
    }

    #[tokio::test(start_paused = true)]
    async fn without_content_skips_the_badge() {
        let clock = mount_fixed()
            .without_content()
            .placement(Placement::Fixed(Vec2::new(200.0, 200.0)));
        clock.subscribe().changed().await.unwrap();

        let mut scene = UiScene::new();
        let list = scene.frame(clock.into(), Vec2::new(600.0, 400.0));
        assert_eq!(list.len(), 54);
        let DrawCmd::Circle(bezel) = &list.items()[0].cmd else {
            panic!("expected bezel")
        };
        assert_eq!(bezel.center, Vec2::new(300.0, 200.0));
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_stops_the_sampler() {
        let clock = mount_fixed();
        let mut changes = clock.subscribe();
        assert!(clock.is_running());

        clock.unmount();
        changes.borrow_and_update();
        assert!(changes.changed().await.is_err());
    }
}
