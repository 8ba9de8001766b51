//! Meat, seafood and vegetarian patterns among liked dishes.

use dishswipe_core::{Dish, PreferenceProfile, Signal};

use crate::vocabulary::{MEAT_KEYWORDS, SEAFOOD_KEYWORDS, VEGETARIAN_CATEGORIES, mentions_any};
use crate::{NEUTRAL_SCORE, count_as_f64};

const BOOST: f64 = 0.4;
const MEAT_AFFINITY: f64 = 0.6;
const MEAT_AVERSION: f64 = 0.2;
const MEAT_PENALTY: f64 = 0.3;
const SEAFOOD_AFFINITY: f64 = 0.4;
const SEAFOOD_AVERSION: f64 = 0.1;
const SEAFOOD_PENALTY: f64 = 0.2;
const VEGETARIAN_AFFINITY: f64 = 0.5;

/// Dietary traits of a single dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DietTraits {
    meat: bool,
    seafood: bool,
    vegetarian_category: bool,
}

impl DietTraits {
    fn of(dish: &Dish) -> Self {
        Self {
            meat: mentions_any(&dish.ingredients, MEAT_KEYWORDS),
            seafood: mentions_any(&dish.ingredients, SEAFOOD_KEYWORDS),
            vegetarian_category: VEGETARIAN_CATEGORIES.contains(&dish.category.as_str()),
        }
    }

    /// A vegetarian category wins even when meat keywords are present.
    const fn is_vegetarian(self) -> bool {
        self.vegetarian_category || (!self.meat && !self.seafood)
    }
}

/// Share of liked dishes carrying each trait.
#[derive(Debug, Clone, Copy)]
struct DietRatios {
    meat: f64,
    seafood: f64,
    vegetarian: f64,
}

impl DietRatios {
    fn of(profile: &PreferenceProfile) -> Self {
        let (mut meat, mut seafood, mut vegetarian) = (0_usize, 0_usize, 0_usize);
        for traits in profile.liked_pool().map(DietTraits::of) {
            meat += usize::from(traits.meat);
            seafood += usize::from(traits.seafood);
            vegetarian += usize::from(traits.vegetarian_category);
        }
        let total = profile.liked_pool_len().max(1);
        Self {
            meat: ratio(meat, total),
            seafood: ratio(seafood, total),
            vegetarian: ratio(vegetarian, total),
        }
    }
}

#[expect(clippy::float_arithmetic, reason = "ratios divide counts")]
fn ratio(count: usize, total: usize) -> f64 {
    count_as_f64(count) / count_as_f64(total)
}

/// Score how well a dish fits the user's meat/seafood/vegetarian pattern.
///
/// Starting from `0.5`, a meat dish gains `0.4` when more than 60% of liked
/// dishes contain meat and loses `0.3` when fewer than 20% do. Seafood gains
/// `0.4` above 40% and loses `0.2` below 10%. A vegetarian dish gains `0.4`
/// when more than half of liked dishes sit in a vegetarian category. The
/// adjustments stack.
#[derive(Debug, Default, Clone, Copy)]
pub struct DietSignal;

impl Signal for DietSignal {
    #[expect(
        clippy::float_arithmetic,
        reason = "diet fit applies additive threshold adjustments"
    )]
    fn score(&self, dish: &Dish, profile: &PreferenceProfile) -> f64 {
        if !profile.has_likes() {
            return NEUTRAL_SCORE;
        }

        let ratios = DietRatios::of(profile);
        let traits = DietTraits::of(dish);
        let mut score = NEUTRAL_SCORE;

        if traits.meat {
            if ratios.meat > MEAT_AFFINITY {
                score += BOOST;
            } else if ratios.meat < MEAT_AVERSION {
                score -= MEAT_PENALTY;
            }
        }

        if traits.seafood {
            if ratios.seafood > SEAFOOD_AFFINITY {
                score += BOOST;
            } else if ratios.seafood < SEAFOOD_AVERSION {
                score -= SEAFOOD_PENALTY;
            }
        }

        if traits.is_vegetarian() && ratios.vegetarian > VEGETARIAN_AFFINITY {
            score += BOOST;
        }

        Self::sanitise(score)
    }
}
