use clockface_engine::coords::{Rect, Vec2};
use clockface_engine::scene::DrawList;
use clockface_engine::text::{FontId, FontLoadError, FontSystem};

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Element;

/// Per-window state a host keeps between frames: loaded fonts and the draw
/// list that each frame overwrites.
///
/// ```rust,ignore
/// let mut scene = UiScene::new();
/// let font = scene.load_font(&std::fs::read(path)?)?;
/// let clock: Element = AnalogClock::mount(runtime.handle(), font, 24.0).into();
///
/// // On every snapshot change or resize:
/// rasterise(scene.frame_ref(&clock, viewport));
/// ```
#[derive(Default)]
pub struct UiScene {
    /// Public so a rasteriser can borrow glyph data next to `draw_list`.
    pub font_system: FontSystem,
    /// Commands recorded by the latest frame.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Records `root` over the whole `viewport`, replacing the previous frame.
    pub fn frame_ref(&mut self, root: &Element, viewport: Vec2) -> &mut DrawList {
        self.draw_list.clear();

        // The root is given the whole viewport whatever it asks for; measuring
        // still runs so widgets see consistent constraints.
        let _ = root.measure(Constraints::tight(viewport));

        let mut painter = Painter::new(&mut self.draw_list, &self.font_system);
        root.paint(&mut painter, Rect::new(0.0, 0.0, viewport.x, viewport.y));

        &mut self.draw_list
    }

    /// [`frame_ref`](Self::frame_ref) for a root built just for this frame.
    pub fn frame(&mut self, root: Element, viewport: Vec2) -> &mut DrawList {
        self.frame_ref(&root, viewport)
    }
}
