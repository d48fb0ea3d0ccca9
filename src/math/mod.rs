mod color;
mod line;
mod point;

pub use color::Color;
pub use line::{Line, LINE_WIDTH};
pub use point::Point;
