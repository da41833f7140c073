pub mod color;
pub mod frame;
pub mod matrix;
pub mod point;
pub mod region;

pub use color::{Color, color_match};
pub use frame::{Frame, PixelBuffer};
pub use matrix::BitMatrix;
pub use point::Point;
pub use region::Region;
