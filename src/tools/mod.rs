//! Helpers shared by the `regiontool` binary and the benches: image loading
//! and saving, color parsing and picking, frame directory iteration and
//! parallel batch detection.

use crate::config::RegionParams;
use crate::detector::{find_regions, largest_region};
use crate::error::RegionError;
use crate::models::{Color, Frame, PixelBuffer, Region};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Load an image file as an RGB frame.
pub fn load_frame<P: AsRef<Path>>(path: P) -> Result<Frame, RegionError> {
    let img = image::open(path)?;
    let frame = Frame::from(img.to_rgb8());
    if frame.width() == 0 || frame.height() == 0 {
        return Err(RegionError::InvalidGeometry {
            width: frame.width(),
            height: frame.height(),
        });
    }
    Ok(frame)
}

/// Save a frame; RGBA frames keep their alpha channel.
///
/// The format is picked from the path's extension.
pub fn save_frame<P: AsRef<Path>>(frame: &Frame, path: P) -> Result<(), RegionError> {
    let width = frame.width() as u32;
    let height = frame.height() as u32;
    let data = frame.as_bytes().to_vec();
    let actual = data.len();
    if frame.has_alpha() {
        let img = image::RgbaImage::from_raw(width, height, data).ok_or(
            RegionError::BufferSize {
                expected: frame.width() * frame.height() * 4,
                actual,
            },
        )?;
        img.save(path)?;
    } else {
        let img = image::RgbImage::from_raw(width, height, data).ok_or(
            RegionError::BufferSize {
                expected: frame.width() * frame.height() * 3,
                actual,
            },
        )?;
        img.save(path)?;
    }
    Ok(())
}

/// Parse `"r,g,b"` (whitespace around components allowed).
pub fn parse_color(text: &str) -> Result<Color, RegionError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(RegionError::InvalidColor(text.to_string()));
    };
    let channel = |s: &str| {
        s.parse::<u8>()
            .map_err(|_| RegionError::InvalidColor(text.to_string()))
    };
    Ok(Color::new(channel(*r)?, channel(*g)?, channel(*b)?))
}

/// Color under a pointer position, for choosing the target color.
pub fn pick_color<I>(image: &I, x: usize, y: usize) -> Result<Color, RegionError>
where
    I: PixelBuffer + ?Sized,
{
    if x >= image.width() || y >= image.height() {
        return Err(RegionError::OutOfBounds {
            x,
            y,
            width: image.width(),
            height: image.height(),
        });
    }
    Ok(image.pixel(x, y))
}

/// Summary of one detection cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSummary {
    /// Regions kept after the size filter
    pub regions: usize,
    /// Pixels across all kept regions
    pub total_pixels: usize,
    /// Size of the largest region, if any
    pub largest: Option<usize>,
}

/// Count regions and pixels.
pub fn summarize(regions: &[Region]) -> RegionSummary {
    RegionSummary {
        regions: regions.len(),
        total_pixels: regions.iter().map(Region::len).sum(),
        largest: largest_region(regions).map(Region::len),
    }
}

/// File extensions `frame_paths` treats as frames; all decode with the
/// `image` crate's default features.
pub const FRAME_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp", "ppm", "tga",
];

/// Sorted frame paths under `root` (recursive), optionally truncated to `limit`.
pub fn frame_paths<P: AsRef<Path>>(root: P, limit: Option<usize>) -> Vec<PathBuf> {
    frame_paths_with(root, FRAME_EXTENSIONS, limit)
}

/// Like [`frame_paths`], accepting only files whose lowercased extension is in
/// `extensions` and names a format `image` knows.
pub fn frame_paths_with<P: AsRef<Path>>(
    root: P,
    extensions: &[&str],
    limit: Option<usize>,
) -> Vec<PathBuf> {
    let mut frames = Vec::new();
    let mut pending = vec![root.as_ref().to_path_buf()];
    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            log::debug!("skipping unreadable directory {}", dir.display());
            continue;
        };
        for path in entries.flatten().map(|entry| entry.path()) {
            if path.is_dir() {
                pending.push(path);
            } else if is_frame_file(&path, extensions) {
                frames.push(path);
            }
        }
    }

    frames.sort();
    if let Some(limit) = limit {
        frames.truncate(limit);
    }
    frames
}

fn is_frame_file(path: &Path, extensions: &[&str]) -> bool {
    let Some(ext) = path.extension().map(|e| e.to_string_lossy().to_lowercase()) else {
        return false;
    };
    extensions.contains(&ext.as_str()) && image::ImageFormat::from_extension(&ext).is_some()
}

/// Detect regions in many frame files in parallel.
///
/// Each file gets its own independent, single-threaded sweep; results keep
/// the order of `paths`.
pub fn detect_frames(
    paths: &[PathBuf],
    target: Color,
    params: &RegionParams,
) -> Vec<(PathBuf, Result<Vec<Region>, RegionError>)> {
    paths
        .par_iter()
        .map(|path| {
            let result = load_frame(path).map(|frame| find_regions(&frame, target, params));
            (path.clone(), result)
        })
        .collect()
}
