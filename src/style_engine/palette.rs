//! Fixed four-colour palettes, one per category

use image::Rgb;

use crate::models::Category;

/// Ordered set of exactly four colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette([Rgb<u8>; 4]);

impl Palette {
    const fn new(colors: [[u8; 3]; 4]) -> Self {
        Self([
            Rgb(colors[0]),
            Rgb(colors[1]),
            Rgb(colors[2]),
            Rgb(colors[3]),
        ])
    }

    /// Palette for a category
    pub fn for_category(category: Category) -> &'static Palette {
        match category {
            Category::Happy => &HAPPY,
            Category::Sad => &SAD,
            Category::Angry => &ANGRY,
            Category::Fear => &FEAR,
            Category::Surprise => &SURPRISE,
            Category::Disgust => &DISGUST,
            Category::Neutral => &NEUTRAL,
        }
    }

    /// Colour at `index`, cycling past the end
    pub fn color(&self, index: usize) -> Rgb<u8> {
        self.0[index % self.0.len()]
    }

    pub fn colors(&self) -> &[Rgb<u8>; 4] {
        &self.0
    }

    /// First colour, used to prime the canvas
    pub fn base(&self) -> Rgb<u8> {
        self.0[0]
    }
}

const HAPPY: Palette = Palette::new([[255, 210, 120], [255, 180, 90], [255, 140, 70], [255, 230, 160]]);
const SAD: Palette = Palette::new([[10, 25, 60], [25, 50, 90], [60, 90, 130], [100, 130, 160]]);
const ANGRY: Palette = Palette::new([[90, 0, 0], [150, 20, 20], [200, 40, 40], [255, 80, 80]]);
const FEAR: Palette = Palette::new([[5, 15, 35], [20, 40, 70], [40, 70, 110], [80, 110, 140]]);
const SURPRISE: Palette = Palette::new([[250, 220, 130], [240, 170, 200], [190, 140, 255], [160, 120, 230]]);
const DISGUST: Palette = Palette::new([[70, 80, 40], [100, 120, 70], [140, 160, 100], [170, 190, 130]]);
const NEUTRAL: Palette = Palette::new([[210, 210, 210], [180, 180, 180], [150, 150, 150], [120, 120, 120]]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_distinct_palette() {
        let palettes: Vec<_> = Category::all().map(Palette::for_category).collect();
        for (i, a) in palettes.iter().enumerate() {
            for b in &palettes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_color_cycles() {
        let palette = Palette::for_category(Category::Sad);
        assert_eq!(palette.color(0), Rgb([10, 25, 60]));
        assert_eq!(palette.color(4), palette.color(0));
        assert_eq!(palette.color(7), Rgb([100, 130, 160]));
    }
}
