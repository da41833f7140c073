use rand::Rng;

/// RGB color triplet (alpha is never part of a `Color`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Draw a color with each channel uniform over 0..=255
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }

    /// True when every channel differs from `other` by strictly less than `max_diff`
    pub fn matches(&self, other: &Color, max_diff: u8) -> bool {
        self.r.abs_diff(other.r) < max_diff
            && self.g.abs_diff(other.g) < max_diff
            && self.b.abs_diff(other.b) < max_diff
    }

    /// Channels as an array in RGB order
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(px: image::Rgb<u8>) -> Self {
        Self::from(px.0)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Color similarity predicate used by the region sweep.
///
/// Symmetric; all three channels must be within range (conjunction).
pub fn color_match(a: Color, b: Color, max_diff: u8) -> bool {
    a.matches(&b, max_diff)
}
