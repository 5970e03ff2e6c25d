//! Procedural wallpaper synthesis
//!
//! The last tier of the acquisition cascade. Synthesis never touches the
//! network or the disk and cannot fail for a valid category; only encoding
//! returns a `Result`.
//!
//! All randomness for one render (recipe choice plus every primitive) comes
//! from a single generator local to the call. A seeded call is fully
//! reproducible and concurrent renders never share random state.

use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Cursor;
use tracing::{debug, trace};

use crate::errors::{AppError, AppResult};
use crate::models::Category;

pub mod palette;
pub mod primitives;
pub mod recipes;

pub use palette::Palette;
pub use primitives::Axis;
pub use recipes::{RECIPES, Step, StyleRecipe};

pub const CANVAS_WIDTH: u32 = 1920;
pub const CANVAS_HEIGHT: u32 = 1080;
pub const JPEG_QUALITY: u8 = 90;

/// Stateless renderer for the recipe catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleEngine;

impl StyleEngine {
    pub fn new() -> Self {
        Self
    }

    /// Render a wallpaper with a uniformly chosen recipe.
    ///
    /// With `Some(seed)` the output is bit-identical across calls; with
    /// `None` the generator is seeded from the OS.
    pub fn synthesize(&self, category: Category, seed: Option<u64>) -> RgbImage {
        let mut rng = Self::rng_for(seed);
        let index = rng.random_range(0..RECIPES.len());
        self.render(category, index, &mut rng)
    }

    /// Render with a specific recipe by index
    pub fn synthesize_with_recipe(
        &self,
        category: Category,
        recipe_index: usize,
        seed: Option<u64>,
    ) -> AppResult<RgbImage> {
        if recipe_index >= RECIPES.len() {
            return Err(AppError::internal(format!(
                "Recipe index {} out of range (0..{})",
                recipe_index,
                RECIPES.len()
            )));
        }
        let mut rng = Self::rng_for(seed);
        Ok(self.render(category, recipe_index, &mut rng))
    }

    /// Synthesize and encode as JPEG
    pub fn synthesize_jpeg(&self, category: Category, seed: Option<u64>) -> AppResult<Vec<u8>> {
        encode_jpeg(&self.synthesize(category, seed))
    }

    fn render<R: Rng + ?Sized>(&self, category: Category, index: usize, rng: &mut R) -> RgbImage {
        let palette = Palette::for_category(category);
        let recipe = &RECIPES[index];
        trace!("Rendering recipe {} ({}) for {}", index, recipe.name, category);

        let mut img = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, palette.base());
        recipe.render(&mut img, palette, rng);

        debug!("Synthesized {} wallpaper with recipe '{}'", category, recipe.name);
        img
    }

    fn rng_for(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Encode at [`JPEG_QUALITY`]
pub fn encode_jpeg(img: &RgbImage) -> AppResult<Vec<u8>> {
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY).encode_image(img)?;
    Ok(buffer)
}

/// Lossless encoding, used when exact pixels must survive transport
pub fn encode_png(img: &RgbImage) -> AppResult<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}
