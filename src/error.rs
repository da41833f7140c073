/// Errors returned at the crate's recoverable boundaries (buffer construction,
/// file I/O, user input). Out-of-range pixel access inside the sweep panics instead.
#[derive(thiserror::Error, Debug)]
pub enum RegionError {
    /// A buffer was built with a zero dimension
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidGeometry {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// Raw byte length does not match width x height x channels
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize {
        /// Bytes the geometry requires
        expected: usize,
        /// Bytes supplied
        actual: usize,
    },
    /// Raw buffers must be RGB (3) or RGBA (4)
    #[error("unsupported channel count {0} (expected 3 or 4)")]
    UnsupportedChannels(usize),
    /// A user-supplied coordinate falls outside the image
    #[error("point ({x}, {y}) outside {width}x{height} image")]
    OutOfBounds {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
        /// Image width
        width: usize,
        /// Image height
        height: usize,
    },
    /// Detection was requested before a target color was chosen
    #[error("no target color set before region detection")]
    NoTargetColor,
    /// Text that is not an `r,g,b` triplet of 0-255 values
    #[error("invalid color {0:?} (expected r,g,b)")]
    InvalidColor(String),
    /// Text that is not an `x,y` pair of unsigned integers
    #[error("invalid point {0:?} (expected x,y)")]
    InvalidPoint(String),
    /// Image decode or encode failure
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = RegionError::InvalidGeometry {
            width: 0,
            height: 4,
        };
        assert_eq!(err.to_string(), "image dimensions must be positive, got 0x4");

        let err = RegionError::OutOfBounds {
            x: 9,
            y: 1,
            width: 8,
            height: 8,
        };
        assert_eq!(err.to_string(), "point (9, 1) outside 8x8 image");

        assert_eq!(
            RegionError::InvalidPoint("3;4".to_string()).to_string(),
            "invalid point \"3;4\" (expected x,y)"
        );
        assert_eq!(
            RegionError::UnsupportedChannels(2).to_string(),
            "unsupported channel count 2 (expected 3 or 4)"
        );
    }
}
