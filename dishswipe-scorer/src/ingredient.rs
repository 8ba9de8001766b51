//! Ingredient overlap with liked and rejected dishes.

use std::collections::HashSet;

use dishswipe_core::{Dish, PreferenceProfile, Signal};

use crate::vocabulary::is_significant;
use crate::{NEUTRAL_SCORE, count_as_f64};

const CONFLICT_PENALTY: f64 = 0.5;

/// Score the share of a dish's significant ingredients the user has liked.
///
/// Pantry staples are ignored on both sides. Each significant candidate
/// ingredient found among liked dishes adds to the match ratio; each one
/// found among rejected dishes subtracts half its share. Duplicate
/// ingredients on the candidate are counted every time they appear.
#[derive(Debug, Default, Clone, Copy)]
pub struct IngredientSignal;

impl Signal for IngredientSignal {
    #[expect(
        clippy::float_arithmetic,
        reason = "ingredient affinity is a ratio with a fractional penalty"
    )]
    fn score(&self, dish: &Dish, profile: &PreferenceProfile) -> f64 {
        if !profile.has_likes() {
            return NEUTRAL_SCORE;
        }

        let liked = significant_ingredients(profile.liked_pool());
        let disliked = significant_ingredients(profile.rejected.iter());

        let mut total = 0_usize;
        let mut matches = 0_usize;
        let mut conflicts = 0_usize;
        for ingredient in dish.ingredients.iter().map(|raw| raw.to_lowercase()) {
            if !is_significant(&ingredient) {
                continue;
            }
            total += 1;
            if liked.contains(&ingredient) {
                matches += 1;
            }
            if disliked.contains(&ingredient) {
                conflicts += 1;
            }
        }

        if total == 0 {
            return NEUTRAL_SCORE;
        }

        let total_f = count_as_f64(total);
        let mut score = count_as_f64(matches) / total_f;
        if conflicts > 0 {
            score -= count_as_f64(conflicts) / total_f * CONFLICT_PENALTY;
        }
        Self::sanitise(score)
    }
}

fn significant_ingredients<'a>(dishes: impl Iterator<Item = &'a Dish>) -> HashSet<String> {
    dishes
        .flat_map(|dish| dish.ingredients.iter())
        .map(|raw| raw.to_lowercase())
        .filter(|ingredient| is_significant(ingredient))
        .collect()
}
