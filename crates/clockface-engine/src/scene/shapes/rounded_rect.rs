use crate::coords::Rect;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Rectangle with the same corner radius on all four corners.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radius: f32,
    pub paint: Paint,
}

impl DrawList {
    #[inline]
    pub fn push_rounded_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        radius: f32,
        paint: impl Into<Paint>,
    ) {
        let cmd = RoundedRectCmd {
            rect,
            radius,
            paint: paint.into(),
        };
        self.push(z, DrawCmd::RoundedRect(cmd));
    }
}
