/// Integer pixel coordinate inside an image buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    /// Column, `0 <= x < width`
    pub x: usize,
    /// Row, `0 <= y < height`
    pub y: usize,
}

impl Point {
    /// Create a new point
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The 8-connected neighbors of this point, clipped to a `width` x `height` grid.
    ///
    /// Neighbors are produced row-major over the 3x3 block, the point itself excluded.
    pub fn neighbors(self, width: usize, height: usize) -> impl Iterator<Item = Point> {
        let y_lo = self.y.saturating_sub(1);
        let y_hi = (self.y + 2).min(height);
        let x_lo = self.x.saturating_sub(1);
        let x_hi = (self.x + 2).min(width);
        (y_lo..y_hi)
            .flat_map(move |y| (x_lo..x_hi).map(move |x| Point::new(x, y)))
            .filter(move |p| *p != self)
    }
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_has_eight_neighbors() {
        let n: Vec<Point> = Point::new(1, 1).neighbors(3, 3).collect();
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&Point::new(1, 1)));
        assert!(n.contains(&Point::new(0, 0)));
        assert!(n.contains(&Point::new(2, 2)));
    }

    #[test]
    fn test_corner_is_clipped() {
        let n: Vec<Point> = Point::new(0, 0).neighbors(5, 5).collect();
        assert_eq!(
            n,
            vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]
        );

        let n: Vec<Point> = Point::new(4, 4).neighbors(5, 5).collect();
        assert_eq!(n.len(), 3);
    }

    #[test]
    fn test_single_pixel_grid_has_no_neighbors() {
        assert_eq!(Point::new(0, 0).neighbors(1, 1).count(), 0);
    }
}
