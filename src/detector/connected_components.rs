/// Color-region discovery by 8-connected flood fill
///
/// Scans the image row-major and grows one region from every unvisited pixel
/// that matches the target color. Candidates at or below the minimum size are
/// dropped, but their pixels stay visited for the rest of the sweep.
use crate::config::RegionParams;
use crate::models::{BitMatrix, Color, PixelBuffer, Point, Region};

/// Counters from one sweep, kept and discarded candidates alike
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Pixels assigned to any candidate (equals the number of matching pixels)
    pub visited_pixels: usize,
    /// Candidate regions grown
    pub candidates: usize,
    /// Candidates dropped by the size filter
    pub discarded: usize,
}

/// Find all regions of `target`-like pixels larger than `params.min_region_size`
///
/// Regions come back in the order their seed pixel appears in a row-major scan.
pub fn find_regions<I>(image: &I, target: Color, params: &RegionParams) -> Vec<Region>
where
    I: PixelBuffer + ?Sized,
{
    find_regions_with_stats(image, target, params).0
}

/// Same as [`find_regions`], also returning sweep counters
pub fn find_regions_with_stats<I>(
    image: &I,
    target: Color,
    params: &RegionParams,
) -> (Vec<Region>, SweepStats)
where
    I: PixelBuffer + ?Sized,
{
    let width = image.width();
    let height = image.height();
    assert!(
        width > 0 && height > 0,
        "cannot sweep a {width}x{height} image"
    );

    let mut visited = BitMatrix::new(width, height);
    let mut to_visit: Vec<Point> = Vec::new();
    let mut regions = Vec::new();
    let mut stats = SweepStats::default();

    for y in 0..height {
        for x in 0..width {
            if visited.get(x, y) || !image.pixel(x, y).matches(&target, params.max_color_diff) {
                continue;
            }

            let region = grow_region(
                image,
                target,
                params.max_color_diff,
                Point::new(x, y),
                &mut visited,
                &mut to_visit,
            );
            stats.candidates += 1;
            stats.visited_pixels += region.len();

            if region.len() > params.min_region_size {
                regions.push(region);
            } else {
                log::trace!(
                    "discarding {}-pixel candidate seeded at ({}, {})",
                    region.len(),
                    x,
                    y
                );
                stats.discarded += 1;
            }
        }
    }

    log::debug!(
        "region sweep {}x{} target={}: {} candidates, {} kept, {} discarded, {} pixels visited",
        width,
        height,
        target,
        stats.candidates,
        regions.len(),
        stats.discarded,
        stats.visited_pixels
    );

    (regions, stats)
}

/// Flood fill from `seed`, marking every reached pixel in `visited`.
///
/// `to_visit` is a LIFO work list shared across calls to reuse its allocation;
/// it is always empty on return. Duplicates may be pushed; the visited check on
/// pop drops them.
fn grow_region<I>(
    image: &I,
    target: Color,
    max_diff: u8,
    seed: Point,
    visited: &mut BitMatrix,
    to_visit: &mut Vec<Point>,
) -> Region
where
    I: PixelBuffer + ?Sized,
{
    let width = image.width();
    let height = image.height();
    let mut region = Region::new();

    to_visit.push(seed);
    while let Some(point) = to_visit.pop() {
        if visited.get(point.x, point.y) {
            continue;
        }
        visited.set(point.x, point.y, true);
        region.push(point);

        for n in point.neighbors(width, height) {
            if !visited.get(n.x, n.y) && image.pixel(n.x, n.y).matches(&target, max_diff) {
                to_visit.push(n);
            }
        }
    }

    region
}
