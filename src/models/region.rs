use super::Point;

/// Pixels discovered together by one flood-fill expansion
///
/// Points are kept in traversal order; the order is reproducible for a given
/// image but carries no further meaning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Region {
    points: Vec<Point>,
}

impl Region {
    /// Create an empty region
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of pixels in the region
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True for a region without pixels
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in traversal order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate points in traversal order
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Linear membership test
    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// The first pixel visited (the seed of the expansion)
    pub fn seed(&self) -> Option<Point> {
        self.points.first().copied()
    }
}

impl From<Vec<Point>> for Region {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_basics() {
        let mut region = Region::new();
        assert!(region.is_empty());
        assert_eq!(region.seed(), None);

        region.push(Point::new(2, 1));
        region.push(Point::new(3, 1));
        assert_eq!(region.len(), 2);
        assert_eq!(region.seed(), Some(Point::new(2, 1)));
        assert!(region.contains(Point::new(3, 1)));
        assert!(!region.contains(Point::new(1, 1)));
        assert_eq!((&region).into_iter().count(), 2);
    }
}
