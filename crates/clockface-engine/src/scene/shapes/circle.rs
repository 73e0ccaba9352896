use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled disc.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub paint: Paint,
}

impl DrawList {
    #[inline]
    pub fn push_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, paint: impl Into<Paint>) {
        self.push(
            z,
            DrawCmd::Circle(CircleCmd {
                center,
                radius,
                paint: paint.into(),
            }),
        );
    }
}
