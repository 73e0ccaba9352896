use crate::coords::{Rect, Rotation, Vec2};
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Rectangle draw payload.
///
/// `rotation`, when present, turns the rectangle about its pivot before
/// rasterisation; `rect` is the unrotated placement.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
    pub rotation: Option<Rotation>,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, paint: Paint, rotation: Option<Rotation>) -> Self {
        Self {
            rect,
            paint,
            rotation,
        }
    }

    /// Corners after rotation, clockwise from the unrotated top-left.
    pub fn corners(&self) -> [Vec2; 4] {
        let min = self.rect.origin;
        let max = self.rect.max();
        let raw = [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)];
        match self.rotation {
            Some(rot) => raw.map(|p| rot.apply(p)),
            None => raw,
        }
    }
}

impl DrawList {
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, paint: impl Into<Paint>) {
        self.push(z, DrawCmd::Rect(RectCmd::new(rect, paint.into(), None)));
    }

    /// Records `rect` turned about `rotation.pivot`.
    #[inline]
    pub fn push_rotated_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        rotation: Rotation,
        paint: impl Into<Paint>,
    ) {
        let cmd = RectCmd::new(rect, paint.into(), Some(rotation));
        self.push(z, DrawCmd::Rect(cmd));
    }
}
