mod circle;
mod line;
mod rect;
mod rounded_rect;
mod text;

pub use circle::CircleCmd;
pub use line::LineCmd;
pub use rect::RectCmd;
pub use rounded_rect::RoundedRectCmd;
pub use text::TextCmd;
