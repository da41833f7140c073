//! Color region detection
//!
//! - Flood-fill sweep partitioning target-colored pixels into 8-connected regions
//! - Minimum-size filtering of candidates
//! - Largest-region selection

/// Row-major flood-fill sweep with size filtering
pub mod connected_components;
/// Largest-region selection with earliest-wins tie-break
pub mod largest;

pub use connected_components::{SweepStats, find_regions, find_regions_with_stats};
pub use largest::largest_region;
