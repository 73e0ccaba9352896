use clockface_engine::coords::{Rect, Rotation, Vec2};
use clockface_engine::paint::{Color, Paint};
use clockface_engine::scene::{DrawList, TextCmd, ZIndex};
use clockface_engine::text::{FontId, FontSystem};

/// Recording surface handed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Each call records one command on the next layer up, so whatever is painted
/// later covers what was painted before.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    fonts: &'a FontSystem,
    z: ZIndex,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(draw_list: &'a mut DrawList, fonts: &'a FontSystem) -> Self {
        Self {
            draw_list,
            fonts,
            z: ZIndex::default(),
        }
    }

    /// Single-line extent of `text`, for centring labels.
    #[inline]
    pub fn measure_text(&self, text: &str, font: FontId, size: f32) -> Vec2 {
        self.fonts.measure_text(text, font, size)
    }

    // ── shapes ────────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.draw_list.push_rect(z, rect, paint);
    }

    /// `rect` turned clockwise about `rotation.pivot`.
    pub fn fill_rotated_rect(&mut self, rect: Rect, rotation: Rotation, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.draw_list.push_rotated_rect(z, rect, rotation, paint);
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.draw_list.push_rounded_rect(z, rect, radius, paint);
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.draw_list.push_circle(z, center, radius, paint);
    }

    pub fn stroke_line(&mut self, start: Vec2, end: Vec2, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_line(z, start, end, width, color);
    }

    /// One line of text with its top-left at `origin`.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        let z = self.next_z();
        let cmd = TextCmd::new(text, font, size, color, origin);
        self.draw_list.push_text(z, cmd);
    }

    fn next_z(&mut self) -> ZIndex {
        let z = self.z;
        self.z = z.above();
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clockface_engine::scene::DrawCmd;

    #[test]
    fn later_calls_land_on_higher_layers() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        {
            let mut painter = Painter::new(&mut list, &fonts);
            painter.fill_circle(Vec2::zero(), 5.0, Color::black());
            painter.stroke_line(Vec2::zero(), Vec2::new(1.0, 0.0), 2.0, Color::white());
            painter.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::white());
        }

        let layers: Vec<i32> = list.items().iter().map(|i| i.key.z.0).collect();
        assert_eq!(layers, vec![0, 1, 2]);
        assert!(matches!(list.items()[1].cmd, DrawCmd::Line(_)));
    }

    #[test]
    fn rotated_rect_keeps_its_rotation() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let rotation = Rotation::new(Vec2::new(5.0, 5.0), 30.0);
        let rect = Rect::new(0.0, 0.0, 2.0, 2.0);
        Painter::new(&mut list, &fonts).fill_rotated_rect(rect, rotation, Color::black());

        let DrawCmd::Rect(cmd) = &list.items()[0].cmd else {
            panic!("expected rect")
        };
        assert_eq!(cmd.rotation, Some(rotation));
    }

    #[test]
    fn text_is_recorded_at_origin() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let origin = Vec2::new(3.0, 4.0);
        Painter::new(&mut list, &fonts).text("12", FontId::default(), 24.0, Color::black(), origin);

        let DrawCmd::Text(cmd) = &list.items()[0].cmd else {
            panic!("expected text")
        };
        assert_eq!(cmd.text, "12");
        assert_eq!(cmd.origin, Vec2::new(3.0, 4.0));
    }
}
