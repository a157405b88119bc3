pub mod rect;
pub mod vector;

pub use rect::{PixelRect, Rect};
pub use vector::Vector2;
