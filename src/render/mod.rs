//! Visualization of detected regions
//!
//! - Random per-region recoloring of a frame copy
//! - Brush-stroke accumulation on a transparent canvas

/// Random per-region recoloring
pub mod recolor;
/// Brush-stroke canvas
pub mod painting;

pub use painting::Painting;
pub use recolor::{paint, recolor};
