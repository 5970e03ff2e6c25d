//! Drawing primitives composed by style recipes
//!
//! Every primitive mutates an already-allocated RGB canvas in place and draws
//! all randomness from the caller's generator, in a fixed order, so a seeded
//! generator reproduces the same pixels.

use image::{Rgb, RgbImage};
use rand::Rng;
use rand::seq::IndexedRandom;

use super::palette::Palette;

/// Number of vertical bands drawn by [`layered_panels`]
pub const PANEL_COUNT: u32 = 6;
/// Number of beams drawn by [`light_beams`]
pub const BEAM_COUNT: usize = 12;
pub const BEAM_WIDTH: i64 = 200;
pub const BEAM_ALPHA: u8 = 35;
/// Beams may start this far left of the canvas
const BEAM_LEFT_OVERHANG: i64 = 300;
/// Number of ellipses drawn by [`soft_shapes`]
pub const SHAPE_COUNT: usize = 10;
pub const SHAPE_RADIUS: std::ops::RangeInclusive<i64> = 250..=450;
pub const SHAPE_ALPHA: u8 = 45;
/// Standard deviation of [`grain`] noise
pub const GRAIN_SIGMA: f64 = 6.0;

/// Direction along which a gradient varies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Colour changes from top row to bottom row
    Vertical,
    /// Colour changes from left column to right column
    Horizontal,
}

/// Per-channel linear interpolation from `from` to `to` along `axis`
pub fn gradient(img: &mut RgbImage, from: Rgb<u8>, to: Rgb<u8>, axis: Axis) {
    let (width, height) = img.dimensions();
    let steps = match axis {
        Axis::Vertical => height,
        Axis::Horizontal => width,
    };
    let ramp: Vec<Rgb<u8>> = (0..steps)
        .map(|i| lerp(from, to, f64::from(i) / f64::from(steps)))
        .collect();

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let index = match axis {
            Axis::Vertical => y,
            Axis::Horizontal => x,
        };
        *pixel = ramp[index as usize];
    }
}

/// Six equal vertical bands, colours cycling through the palette
pub fn layered_panels(img: &mut RgbImage, palette: &Palette) {
    let width = img.width();
    for (x, _, pixel) in img.enumerate_pixels_mut() {
        let band = (u64::from(x) * u64::from(PANEL_COUNT) / u64::from(width)) as usize;
        *pixel = palette.color(band);
    }
}

/// Translucent full-height vertical beams at random horizontal offsets
pub fn light_beams<R: Rng + ?Sized>(img: &mut RgbImage, palette: &Palette, rng: &mut R) {
    let (width, height) = img.dimensions();
    for _ in 0..BEAM_COUNT {
        let left = rng.random_range(-BEAM_LEFT_OVERHANG..=i64::from(width));
        let color = pick_color(palette, rng);

        let start = left.max(0) as u32;
        let end = (left + BEAM_WIDTH).clamp(0, i64::from(width)) as u32;
        for y in 0..height {
            for x in start..end {
                blend_pixel(img.get_pixel_mut(x, y), color, BEAM_ALPHA);
            }
        }
    }
}

/// Translucent circles with random centre and radius, possibly off-canvas
pub fn soft_shapes<R: Rng + ?Sized>(img: &mut RgbImage, palette: &Palette, rng: &mut R) {
    let (width, height) = img.dimensions();
    let (w, h) = (i64::from(width), i64::from(height));
    for _ in 0..SHAPE_COUNT {
        let radius = rng.random_range(SHAPE_RADIUS);
        let cx = rng.random_range(-radius..=w + radius);
        let cy = rng.random_range(-radius..=h + radius);
        let color = pick_color(palette, rng);

        let top = (cy - radius).max(0);
        let bottom = (cy + radius).min(h - 1);
        for y in top..=bottom {
            let dy = y - cy;
            let half = ((radius * radius - dy * dy) as f64).sqrt() as i64;
            let left = (cx - half).max(0);
            let right = (cx + half).min(w - 1);
            for x in left..=right {
                blend_pixel(img.get_pixel_mut(x as u32, y as u32), color, SHAPE_ALPHA);
            }
        }
    }
}

/// Zero-mean Gaussian noise on every channel of every pixel, clamped to 0..=255
pub fn grain<R: Rng + ?Sized>(img: &mut RgbImage, rng: &mut R) {
    let mut normal = StandardNormal::default();
    let channels: &mut [u8] = img;
    for channel in channels.iter_mut() {
        let noisy = f64::from(*channel) + normal.sample(rng) * GRAIN_SIGMA;
        *channel = noisy.clamp(0.0, 255.0) as u8;
    }
}

fn lerp(from: Rgb<u8>, to: Rgb<u8>, t: f64) -> Rgb<u8> {
    let mut out = [0u8; 3];
    for (c, value) in out.iter_mut().enumerate() {
        *value = (f64::from(from[c]) * (1.0 - t) + f64::from(to[c]) * t) as u8;
    }
    Rgb(out)
}

fn pick_color<R: Rng + ?Sized>(palette: &Palette, rng: &mut R) -> Rgb<u8> {
    palette
        .colors()
        .choose(rng)
        .copied()
        .unwrap_or_else(|| palette.base())
}

/// Source-over blend of an opaque colour at `alpha` onto `dst`
fn blend_pixel(dst: &mut Rgb<u8>, src: Rgb<u8>, alpha: u8) {
    let a = u32::from(alpha);
    let inv = 255 - a;
    for c in 0..3 {
        dst[c] = ((u32::from(src[c]) * a + u32::from(dst[c]) * inv + 127) / 255) as u8;
    }
}

/// Box-Muller sampler; each pair of uniforms yields two normals
#[derive(Debug, Default)]
struct StandardNormal {
    spare: Option<f64>,
}

impl StandardNormal {
    fn sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        if let Some(spare) = self.spare.take() {
            return spare;
        }
        // 1 - u keeps the log argument in (0, 1].
        let u1 = 1.0 - rng.random::<f64>();
        let u2 = rng.random::<f64>();
        let radius = (-2.0 * u1.ln()).sqrt();
        let theta = std::f64::consts::TAU * u2;
        self.spare = Some(radius * theta.sin());
        radius * theta.cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::models::Category;

    fn canvas(color: Rgb<u8>) -> RgbImage {
        RgbImage::from_pixel(192, 108, color)
    }

    #[test]
    fn test_vertical_gradient_endpoints() {
        let mut img = canvas(Rgb([0, 0, 0]));
        gradient(&mut img, Rgb([0, 0, 0]), Rgb([200, 100, 50]), Axis::Vertical);

        assert_eq!(*img.get_pixel(0, 0), Rgb([0, 0, 0]));
        assert_eq!(*img.get_pixel(191, 0), Rgb([0, 0, 0]));
        let bottom = img.get_pixel(5, 107);
        assert!(bottom[0] >= 197 && bottom[1] >= 98 && bottom[2] >= 48);
        // Rows are uniform.
        assert_eq!(img.get_pixel(0, 50), img.get_pixel(150, 50));
    }

    #[test]
    fn test_horizontal_gradient_is_monotonic() {
        let mut img = canvas(Rgb([0, 0, 0]));
        gradient(&mut img, Rgb([10, 10, 10]), Rgb([250, 250, 250]), Axis::Horizontal);
        for x in 1..img.width() {
            assert!(img.get_pixel(x, 0)[0] >= img.get_pixel(x - 1, 0)[0]);
        }
        assert_eq!(img.get_pixel(0, 0), img.get_pixel(0, 107));
    }

    #[test]
    fn test_panels_cycle_palette() {
        let palette = Palette::for_category(Category::Angry);
        let mut img = canvas(Rgb([0, 0, 0]));
        layered_panels(&mut img, palette);

        let band_width = img.width() / PANEL_COUNT;
        for band in 0..PANEL_COUNT {
            let x = band * band_width + band_width / 2;
            assert_eq!(*img.get_pixel(x, 10), palette.color(band as usize));
        }
    }

    #[test]
    fn test_beams_and_shapes_only_tint() {
        let palette = Palette::for_category(Category::Neutral);
        let mut rng = StdRng::seed_from_u64(1);
        let mut img = canvas(Rgb([0, 0, 0]));
        light_beams(&mut img, palette, &mut rng);
        soft_shapes(&mut img, palette, &mut rng);

        // Translucent layers over black can never reach the palette's brightest value.
        let max = img.pixels().map(|p| p[0]).max().unwrap();
        assert!(max < 210);
    }

    #[test]
    fn test_blend_extremes() {
        let mut px = Rgb([100, 100, 100]);
        blend_pixel(&mut px, Rgb([200, 0, 50]), 0);
        assert_eq!(px, Rgb([100, 100, 100]));
        blend_pixel(&mut px, Rgb([200, 0, 50]), 255);
        assert_eq!(px, Rgb([200, 0, 50]));
    }

    #[test]
    fn test_grain_statistics() {
        let mut img = RgbImage::from_pixel(400, 300, Rgb([128, 128, 128]));
        let mut rng = StdRng::seed_from_u64(9);
        grain(&mut img, &mut rng);

        let values: Vec<f64> = img.as_raw().iter().map(|v| f64::from(*v)).collect();
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        // Truncation toward zero shifts the mean down by about half a level.
        assert!((mean - 127.5).abs() < 0.5, "mean {mean}");
        assert!((variance.sqrt() - GRAIN_SIGMA).abs() < 0.3, "sigma {}", variance.sqrt());
    }

    #[test]
    fn test_grain_clamps() {
        let mut img = RgbImage::from_pixel(64, 64, Rgb([0, 255, 0]));
        let mut rng = StdRng::seed_from_u64(3);
        grain(&mut img, &mut rng);
        assert!(img.pixels().any(|p| p[0] == 0));
        assert!(img.pixels().any(|p| p[1] == 255));
    }
}
