//! region_finder - color region detection for webcam painting
//!
//! Finds 8-connected regions of pixels close to a target color, keeps the ones
//! above a minimum size, picks the largest and renders a recolored view.
//! A detection cycle is a single synchronous sweep; nothing but the resulting
//! region list survives it.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Detection thresholds and environment overrides
pub mod config;
/// Flood-fill region detection and largest-region selection
pub mod detector;
/// Error type for fallible boundaries
pub mod error;
/// Core data structures (Color, Frame, Point, Region, BitMatrix)
pub mod models;
/// Region visualization (recoloring, painting)
pub mod render;
/// Image I/O and batch helpers used by the CLI and benches
pub mod tools;

pub use config::RegionParams;
pub use detector::{SweepStats, find_regions, find_regions_with_stats, largest_region};
pub use error::RegionError;
pub use models::{Color, Frame, PixelBuffer, Point, Region, color_match};
pub use render::{Painting, recolor};

use rand::Rng;

/// Detect regions in an RGB image
///
/// # Arguments
/// * `image` - Raw RGB bytes (3 bytes per pixel)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `target` - Color the regions should resemble
///
/// # Returns
/// Regions in seed scan order, using the default thresholds
pub fn detect(
    image: &[u8],
    width: usize,
    height: usize,
    target: Color,
) -> Result<Vec<Region>, RegionError> {
    let frame = Frame::from_rgb(image.to_vec(), width, height)?;
    Ok(find_regions(&frame, target, &RegionParams::default()))
}

/// Region finder holding a target color and the regions of the last cycle
///
/// # Example
/// ```
/// use region_finder::{Color, Frame, RegionFinder};
///
/// let frame = Frame::filled(10, 10, Color::new(200, 0, 0));
/// let mut finder = RegionFinder::new();
/// finder.set_target(Color::new(200, 0, 0));
/// finder.find_regions(&frame).unwrap();
/// assert_eq!(finder.largest_region().map(|r| r.len()), Some(100));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegionFinder {
    params: RegionParams,
    target: Option<Color>,
    regions: Vec<Region>,
}

impl RegionFinder {
    /// Create a finder with default thresholds and no target color
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a finder with explicit thresholds
    pub fn with_params(params: RegionParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Create a finder with thresholds taken from the environment
    pub fn from_env() -> Self {
        Self::with_params(RegionParams::from_env())
    }

    /// Thresholds in use
    pub fn params(&self) -> &RegionParams {
        &self.params
    }

    /// Set the color to track from the next cycle on
    pub fn set_target(&mut self, target: Color) {
        self.target = Some(target);
    }

    /// Current target color, if any
    pub fn target(&self) -> Option<Color> {
        self.target
    }

    /// Run a detection cycle on `image`, replacing the previous regions
    ///
    /// Fails with [`RegionError::NoTargetColor`] if no target was set; the
    /// previous regions are left as they were in that case.
    pub fn find_regions<I>(&mut self, image: &I) -> Result<&[Region], RegionError>
    where
        I: PixelBuffer + ?Sized,
    {
        let target = self.target.ok_or(RegionError::NoTargetColor)?;
        self.regions = find_regions(image, target, &self.params);
        Ok(&self.regions)
    }

    /// Regions from the last cycle
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Largest region from the last cycle, earliest on ties
    pub fn largest_region(&self) -> Option<&Region> {
        largest_region(&self.regions)
    }

    /// Copy of `image` with each region of the last cycle in a random color
    pub fn recolor<I, R>(&self, image: &I, rng: &mut R) -> I
    where
        I: PixelBuffer + Clone,
        R: Rng + ?Sized,
    {
        recolor(image, &self.regions, rng)
    }
}
