//! Recorded draw stream.
//!
//! Widgets push renderer-agnostic commands into a [`DrawList`]; the host's
//! rasteriser replays them in paint order (layer, then recording order).
//! Each shape keeps its payload and push helper in its own file under
//! [`shapes`].

mod cmd;
mod list;
mod order;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use order::{SortKey, ZIndex};
pub use shapes::{CircleCmd, LineCmd, RectCmd, RoundedRectCmd, TextCmd};
