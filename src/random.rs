use std::collections::BTreeSet;

use rand::prelude::*;

use crate::types::Scalar;
use crate::{Color, ColorMix};

pub trait RandomizationStrategy {
    fn generate_with(&self, rng: &mut dyn RngCore) -> Color;

    fn generate(&self) -> Color {
        self.generate_with(&mut thread_rng())
    }
}

pub mod strategies {
    use super::*;

    pub struct UniformRgb;

    impl RandomizationStrategy for UniformRgb {
        fn generate_with(&self, rng: &mut dyn RngCore) -> Color {
            Color::from_rgb(rng.gen::<u8>(), rng.gen::<u8>(), rng.gen::<u8>())
        }
    }

    pub struct UniformGray;

    impl RandomizationStrategy for UniformGray {
        fn generate_with(&self, rng: &mut dyn RngCore) -> Color {
            let value = rng.gen::<u8>();
            Color::from_rgb(value, value, value)
        }
    }
}

/// Generate a recipe with the given number of entries. The colors come from
/// the given strategy; the proportions are integer percentages, each at
/// least 1, that sum up to exactly 100 (so the recipe always validates).
///
/// Panics if `entries` is 0 or larger than 100.
pub fn random_recipe_with(
    strategy: &dyn RandomizationStrategy,
    rng: &mut dyn RngCore,
    entries: usize,
) -> Vec<ColorMix> {
    assert!(
        (1..=100).contains(&entries),
        "a recipe must have between 1 and 100 entries"
    );

    // Distinct cut points in (0, 100) divide the percentage range into
    // `entries` integer-sized parts.
    let mut cuts = BTreeSet::new();
    while cuts.len() < entries - 1 {
        cuts.insert(rng.gen_range(1..100u32));
    }

    let mut recipe = Vec::with_capacity(entries);
    let mut previous = 0;
    for cut in cuts.into_iter().chain(std::iter::once(100)) {
        recipe.push(ColorMix::new(
            strategy.generate_with(rng),
            Scalar::from(cut - previous),
        ));
        previous = cut;
    }

    recipe
}

/// Like [`random_recipe_with`], but using the thread-local RNG.
pub fn random_recipe(strategy: &dyn RandomizationStrategy, entries: usize) -> Vec<ColorMix> {
    random_recipe_with(strategy, &mut thread_rng(), entries)
}
