//! The fixed catalog of style recipes
//!
//! A recipe is an ordered list of primitive steps applied to a canvas primed
//! with the palette's first colour. Order is part of a recipe's identity: a
//! full-coverage step late in the chain paints over everything before it,
//! but the earlier steps still consume randomness.

use image::RgbImage;
use rand::Rng;

use super::palette::Palette;
use super::primitives::{self, Axis};

/// One drawing step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Gradient between two palette colours, by index
    Gradient { from: usize, to: usize, axis: Axis },
    LayeredPanels,
    LightBeams,
    SoftShapes,
    Grain,
}

impl Step {
    fn apply<R: Rng + ?Sized>(&self, img: &mut RgbImage, palette: &Palette, rng: &mut R) {
        match *self {
            Step::Gradient { from, to, axis } => {
                primitives::gradient(img, palette.color(from), palette.color(to), axis)
            }
            Step::LayeredPanels => primitives::layered_panels(img, palette),
            Step::LightBeams => primitives::light_beams(img, palette, rng),
            Step::SoftShapes => primitives::soft_shapes(img, palette, rng),
            Step::Grain => primitives::grain(img, rng),
        }
    }
}

/// Named composition of primitive steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRecipe {
    pub name: &'static str,
    pub steps: &'static [Step],
}

impl StyleRecipe {
    /// Run every step in order against `img`
    pub fn render<R: Rng + ?Sized>(&self, img: &mut RgbImage, palette: &Palette, rng: &mut R) {
        for step in self.steps {
            step.apply(img, palette, rng);
        }
    }
}

const fn vertical(from: usize, to: usize) -> Step {
    Step::Gradient {
        from,
        to,
        axis: Axis::Vertical,
    }
}

const fn horizontal(from: usize, to: usize) -> Step {
    Step::Gradient {
        from,
        to,
        axis: Axis::Horizontal,
    }
}

/// All recipes, in selection order
pub const RECIPES: [StyleRecipe; 20] = [
    StyleRecipe { name: "vertical-wash", steps: &[vertical(0, 1)] },
    StyleRecipe { name: "horizontal-wash", steps: &[horizontal(1, 2)] },
    StyleRecipe { name: "panels", steps: &[Step::LayeredPanels] },
    StyleRecipe { name: "beams", steps: &[Step::LightBeams] },
    StyleRecipe { name: "shapes", steps: &[Step::SoftShapes] },
    StyleRecipe { name: "grain", steps: &[Step::Grain] },
    StyleRecipe { name: "grainy-shapes", steps: &[Step::SoftShapes, Step::Grain] },
    StyleRecipe { name: "grainy-beams", steps: &[Step::LightBeams, Step::Grain] },
    StyleRecipe { name: "shapes-under-vertical", steps: &[Step::SoftShapes, vertical(2, 3)] },
    StyleRecipe { name: "beams-under-horizontal", steps: &[Step::LightBeams, horizontal(0, 2)] },
    StyleRecipe { name: "grain-under-panels", steps: &[Step::Grain, Step::LayeredPanels] },
    StyleRecipe { name: "shapes-over-grain", steps: &[Step::Grain, Step::SoftShapes] },
    StyleRecipe { name: "beams-over-grain", steps: &[Step::Grain, Step::LightBeams] },
    StyleRecipe { name: "grain-under-vertical", steps: &[Step::Grain, vertical(1, 3)] },
    StyleRecipe { name: "grain-under-horizontal", steps: &[Step::Grain, horizontal(3, 0)] },
    StyleRecipe { name: "shapes-over-panels", steps: &[Step::LayeredPanels, Step::SoftShapes] },
    StyleRecipe { name: "beams-over-panels", steps: &[Step::LayeredPanels, Step::LightBeams] },
    StyleRecipe { name: "grainy-panels", steps: &[Step::LayeredPanels, Step::Grain] },
    StyleRecipe { name: "vertical-dusk", steps: &[vertical(2, 0)] },
    StyleRecipe { name: "horizontal-dusk", steps: &[horizontal(3, 1)] },
];

/// Recipe by name, case-insensitive
pub fn find(name: &str) -> Option<(usize, &'static StyleRecipe)> {
    RECIPES
        .iter()
        .enumerate()
        .find(|(_, recipe)| recipe.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_recipe_names_unique() {
        let names: HashSet<_> = RECIPES.iter().map(|r| r.name).collect();
        assert_eq!(names.len(), RECIPES.len());
    }

    #[test]
    fn test_recipes_have_one_to_two_steps() {
        for recipe in &RECIPES {
            assert!(
                (1..=2).contains(&recipe.steps.len()),
                "{} has {} steps",
                recipe.name,
                recipe.steps.len()
            );
        }
    }

    #[test]
    fn test_gradient_indices_within_palette() {
        for recipe in &RECIPES {
            for step in recipe.steps {
                if let Step::Gradient { from, to, .. } = step {
                    assert!(*from < 4 && *to < 4);
                }
            }
        }
    }

    #[test]
    fn test_find_by_name() {
        assert_eq!(find("panels").map(|(i, _)| i), Some(2));
        assert_eq!(find(" Grainy-Beams ").map(|(i, _)| i), Some(7));
        assert!(find("watercolour").is_none());
    }
}
