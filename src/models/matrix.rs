/// Compact bit matrix, one bit per pixel
///
/// Used as the visited-marker grid during a detection sweep.
#[derive(Debug, Clone)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new all-false bit matrix with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    fn bit(&self, x: usize, y: usize) -> (usize, usize) {
        assert!(
            x < self.width && y < self.height,
            "bit ({x}, {y}) outside {}x{} matrix",
            self.width,
            self.height
        );
        let index = y * self.width + x;
        (index / 8, index % 8)
    }

    /// Get bit at (x, y)
    pub fn get(&self, x: usize, y: usize) -> bool {
        let (byte_index, bit_index) = self.bit(x, y);
        (self.data[byte_index] >> bit_index) & 1 == 1
    }

    /// Set bit at (x, y)
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        let (byte_index, bit_index) = self.bit(x, y);
        if value {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_matrix() {
        let mut matrix = BitMatrix::new(8, 8);
        matrix.set(3, 4, true);
        assert!(matrix.get(3, 4));
        assert!(!matrix.get(3, 3));

        matrix.set(3, 4, false);
        assert!(!matrix.get(3, 4));
    }

    #[test]
    fn test_non_byte_aligned_size() {
        let mut matrix = BitMatrix::new(3, 3);
        matrix.set(2, 2, true);
        assert!(matrix.get(2, 2));
        assert!((0..3).all(|y| (0..3).all(|x| matrix.get(x, y) == (x == 2 && y == 2))));
    }

    #[test]
    #[should_panic(expected = "outside 8x8 matrix")]
    fn test_out_of_bounds_panics() {
        let matrix = BitMatrix::new(8, 8);
        matrix.get(10, 10);
    }
}
