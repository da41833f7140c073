use rand::Rng;

use crate::models::{Color, PixelBuffer, Region};

/// Copy `image` and paint each region with its own random color.
///
/// One color is drawn from `rng` per region, in collection order, so a seeded
/// generator gives reproducible output. Pixels outside every region are left
/// as they were; `image` itself is not touched.
pub fn recolor<I, R>(image: &I, regions: &[Region], rng: &mut R) -> I
where
    I: PixelBuffer + Clone,
    R: Rng + ?Sized,
{
    let mut recolored = image.clone();
    for region in regions {
        let color = Color::random(rng);
        paint(&mut recolored, region, color);
    }
    recolored
}

/// Overwrite every pixel of `region` with `color`
pub fn paint<I>(image: &mut I, region: &Region, color: Color)
where
    I: PixelBuffer + ?Sized,
{
    for p in region {
        image.set_pixel(p.x, p.y, color);
    }
}
