//! Image buffers the region sweep reads from and the renderer writes to.
//!
//! `PixelBuffer` is the seam: anything exposing width, height and per-pixel
//! RGB access can be swept. `Frame` is the crate's own owned raster; the
//! `image` crate's 8-bit RGB and RGBA buffers are supported directly.

use super::Color;
use crate::error::RegionError;

/// 2D grid of RGB pixels addressed by `(x, y)`
///
/// Out-of-range coordinates are a caller bug and panic.
pub trait PixelBuffer {
    /// Width in pixels
    fn width(&self) -> usize;

    /// Height in pixels
    fn height(&self) -> usize;

    /// Color at (x, y); alpha, if stored, is not part of the result
    fn pixel(&self, x: usize, y: usize) -> Color;

    /// Overwrite the RGB channels at (x, y); alpha, if stored, is preserved
    fn set_pixel(&mut self, x: usize, y: usize, color: Color);
}

/// Owned, bounds-checked raster with 3 (RGB) or 4 (RGBA) interleaved channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl Frame {
    /// Create a black RGB frame
    ///
    /// Panics on a zero dimension; use [`Frame::from_rgb`] for untrusted sizes.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Color::default())
    }

    /// Create an RGB frame with every pixel set to `color`
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        assert!(
            width > 0 && height > 0,
            "frame dimensions must be positive, got {width}x{height}"
        );
        let data = color.to_array().repeat(width * height);
        Self {
            width,
            height,
            channels: 3,
            data,
        }
    }

    /// Create a fully transparent RGBA frame
    pub fn transparent(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "frame dimensions must be positive, got {width}x{height}"
        );
        Self {
            width,
            height,
            channels: 4,
            data: vec![0; width * height * 4],
        }
    }

    /// Wrap raw RGB bytes (3 bytes per pixel, row-major)
    pub fn from_rgb(data: Vec<u8>, width: usize, height: usize) -> Result<Self, RegionError> {
        Self::from_raw(data, width, height, 3)
    }

    /// Wrap raw RGBA bytes (4 bytes per pixel, row-major)
    pub fn from_rgba(data: Vec<u8>, width: usize, height: usize) -> Result<Self, RegionError> {
        Self::from_raw(data, width, height, 4)
    }

    /// Wrap raw interleaved bytes with the given channel count (3 or 4)
    pub fn from_raw(
        data: Vec<u8>,
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<Self, RegionError> {
        if width == 0 || height == 0 {
            return Err(RegionError::InvalidGeometry { width, height });
        }
        if channels != 3 && channels != 4 {
            return Err(RegionError::UnsupportedChannels(channels));
        }
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(RegionError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Bytes per pixel (3 or 4)
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// True when the frame stores an alpha channel
    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    /// Alpha at (x, y); 255 for RGB frames
    pub fn alpha(&self, x: usize, y: usize) -> u8 {
        let offset = self.offset(x, y);
        if self.has_alpha() {
            self.data[offset + 3]
        } else {
            u8::MAX
        }
    }

    /// Write color and alpha at (x, y); alpha is dropped on RGB frames
    pub fn set_rgba(&mut self, x: usize, y: usize, color: Color, alpha: u8) {
        self.set_pixel(x, y, color);
        if self.has_alpha() {
            let offset = self.offset(x, y);
            self.data[offset + 3] = alpha;
        }
    }

    /// Raw interleaved bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the frame, returning its raw bytes
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} frame",
            self.width,
            self.height
        );
        (y * self.width + x) * self.channels
    }
}

impl PixelBuffer for Frame {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixel(&self, x: usize, y: usize) -> Color {
        let offset = self.offset(x, y);
        Color::new(
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        )
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        let offset = self.offset(x, y);
        self.data[offset..offset + 3].copy_from_slice(&color.to_array());
    }
}

impl From<image::RgbImage> for Frame {
    fn from(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width: width as usize,
            height: height as usize,
            channels: 3,
            data: img.into_raw(),
        }
    }
}

impl From<image::RgbaImage> for Frame {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width: width as usize,
            height: height as usize,
            channels: 4,
            data: img.into_raw(),
        }
    }
}

impl PixelBuffer for image::RgbImage {
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    fn pixel(&self, x: usize, y: usize) -> Color {
        Color::from(*self.get_pixel(x as u32, y as u32))
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        self.put_pixel(x as u32, y as u32, image::Rgb(color.to_array()));
    }
}

impl PixelBuffer for image::RgbaImage {
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    fn pixel(&self, x: usize, y: usize) -> Color {
        let [r, g, b, _] = self.get_pixel(x as u32, y as u32).0;
        Color::new(r, g, b)
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        let px = self.get_pixel_mut(x as u32, y as u32);
        px.0[..3].copy_from_slice(&color.to_array());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_frame() {
        let frame = Frame::filled(4, 3, Color::new(1, 2, 3));
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 3);
        assert_eq!(frame.channels(), 3);
        assert_eq!(frame.pixel(3, 2), Color::new(1, 2, 3));
        assert_eq!(frame.as_bytes().len(), 36);
    }

    #[test]
    fn test_from_raw_validates_geometry() {
        assert!(matches!(
            Frame::from_rgb(Vec::new(), 0, 5),
            Err(RegionError::InvalidGeometry {
                width: 0,
                height: 5
            })
        ));
        assert!(matches!(
            Frame::from_rgb(vec![0; 10], 2, 2),
            Err(RegionError::BufferSize {
                expected: 12,
                actual: 10
            })
        ));
        assert!(matches!(
            Frame::from_raw(vec![0; 8], 2, 2, 2),
            Err(RegionError::UnsupportedChannels(2))
        ));
        assert!(Frame::from_rgba(vec![0; 16], 2, 2).is_ok());
    }

    #[test]
    fn test_set_pixel_preserves_alpha() {
        let data = vec![10, 20, 30, 77, 40, 50, 60, 88];
        let mut frame = Frame::from_rgba(data, 2, 1).unwrap();
        frame.set_pixel(1, 0, Color::new(1, 1, 1));
        assert_eq!(frame.pixel(1, 0), Color::new(1, 1, 1));
        assert_eq!(frame.alpha(1, 0), 88);
        assert_eq!(frame.pixel(0, 0), Color::new(10, 20, 30));

        frame.set_rgba(0, 0, Color::new(9, 9, 9), 255);
        assert_eq!(frame.alpha(0, 0), 255);
    }

    #[test]
    fn test_rgb_frame_reports_opaque_alpha() {
        let frame = Frame::new(2, 2);
        assert!(!frame.has_alpha());
        assert_eq!(frame.alpha(1, 1), 255);
    }

    #[test]
    #[should_panic(expected = "outside 2x2 frame")]
    fn test_out_of_range_pixel_panics() {
        let frame = Frame::new(2, 2);
        frame.pixel(2, 0);
    }

    #[test]
    fn test_image_crate_buffers() {
        let mut rgb = image::RgbImage::new(3, 2);
        rgb.set_pixel(2, 1, Color::new(5, 6, 7));
        assert_eq!(PixelBuffer::width(&rgb), 3);
        assert_eq!(rgb.pixel(2, 1), Color::new(5, 6, 7));

        let mut rgba = image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 0, 42]));
        rgba.set_pixel(0, 1, Color::new(9, 8, 7));
        assert_eq!(rgba.get_pixel(0, 1).0, [9, 8, 7, 42]);

        let frame = Frame::from(rgba);
        assert_eq!(frame.channels(), 4);
        assert_eq!(frame.alpha(0, 1), 42);
    }
}
