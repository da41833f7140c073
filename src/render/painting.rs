use crate::models::{Color, Frame, PixelBuffer, Region};

/// Default brush color
pub const DEFAULT_BRUSH: Color = Color::new(0, 0, 255);

/// Transparent RGBA canvas that accumulates brush strokes across frames
#[derive(Debug, Clone)]
pub struct Painting {
    canvas: Frame,
    brush: Color,
}

impl Painting {
    /// Blank canvas with the default (blue) brush
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_brush(width, height, DEFAULT_BRUSH)
    }

    /// Blank canvas with a custom brush color
    pub fn with_brush(width: usize, height: usize, brush: Color) -> Self {
        Self {
            canvas: Frame::transparent(width, height),
            brush,
        }
    }

    /// Current brush color
    pub fn brush(&self) -> Color {
        self.brush
    }

    /// Change the brush color for subsequent strokes
    pub fn set_brush(&mut self, brush: Color) {
        self.brush = brush;
    }

    /// Stamp the brush, fully opaque, on every pixel of `region`
    pub fn paint_region(&mut self, region: &Region) {
        for p in region {
            self.canvas.set_rgba(p.x, p.y, self.brush, u8::MAX);
        }
    }

    /// Reset to a fully transparent canvas
    pub fn clear(&mut self) {
        let (width, height) = (self.canvas.width(), self.canvas.height());
        self.canvas = Frame::transparent(width, height);
    }

    /// The accumulated canvas
    pub fn canvas(&self) -> &Frame {
        &self.canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    #[test]
    fn test_paint_accumulates_and_clears() {
        let mut painting = Painting::new(3, 3);
        assert_eq!(painting.canvas().alpha(1, 1), 0);

        painting.paint_region(&Region::from(vec![Point::new(1, 1)]));
        painting.set_brush(Color::new(255, 0, 0));
        painting.paint_region(&Region::from(vec![Point::new(2, 2)]));

        let canvas = painting.canvas();
        assert_eq!(canvas.pixel(1, 1), DEFAULT_BRUSH);
        assert_eq!(canvas.alpha(1, 1), 255);
        assert_eq!(canvas.pixel(2, 2), Color::new(255, 0, 0));
        assert_eq!(canvas.alpha(0, 0), 0);

        painting.clear();
        assert_eq!(painting.canvas().alpha(1, 1), 0);
        assert_eq!(painting.canvas().width(), 3);
    }
}
