//! Cuisine and category affinity.

use dishswipe_core::{Dish, PreferenceProfile, Signal};

use crate::{NEUTRAL_SCORE, count_as_f64};

const AFFINITY_SCALE: f64 = 0.8;
const SUPER_LIKE_BONUS: f64 = 0.2;
const DISLIKE_PENALTY: f64 = 0.5;

/// Score how often the dish's area and category appear among liked dishes.
///
/// Area and category matches are counted over the liked pool (liked followed
/// by super-liked, so super likes count twice) and divided by
/// `max(1, |pool| + |super_liked|) * 0.8`. A dish sharing its area or
/// category with any super like gains `0.2`, and matches among rejected
/// dishes subtract up to `0.5`.
///
/// # Examples
/// ```
/// use dishswipe_core::{Dish, PreferenceProfile, Signal};
/// use dishswipe_scorer::CuisineSignal;
///
/// let dish = Dish::new("1", "Adobo", "Chicken", "Filipino");
/// assert_eq!(CuisineSignal.score(&dish, &PreferenceProfile::default()), 0.5);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CuisineSignal;

impl Signal for CuisineSignal {
    #[expect(
        clippy::float_arithmetic,
        reason = "affinity blends normalised counts with fixed bonuses"
    )]
    fn score(&self, dish: &Dish, profile: &PreferenceProfile) -> f64 {
        if !profile.has_likes() {
            return NEUTRAL_SCORE;
        }

        let liked_matches = count_matches(profile.liked_pool(), dish);
        let total_like_weight = profile.liked_pool_len() + profile.super_liked.len();
        let mut score =
            count_as_f64(liked_matches) / (count_as_f64(total_like_weight.max(1)) * AFFINITY_SCALE);

        if profile
            .super_liked
            .iter()
            .any(|liked| liked.area == dish.area || liked.category == dish.category)
        {
            score += SUPER_LIKE_BONUS;
        }

        let disliked_matches = count_matches(profile.rejected.iter(), dish);
        if disliked_matches > 0 {
            let factor =
                count_as_f64(disliked_matches) / count_as_f64(profile.rejected.len().max(1));
            score -= factor * DISLIKE_PENALTY;
        }

        Self::sanitise(score)
    }
}

/// Count area matches plus category matches; a dish matching both counts twice.
fn count_matches<'a>(dishes: impl Iterator<Item = &'a Dish>, dish: &Dish) -> usize {
    dishes
        .map(|other| usize::from(other.area == dish.area) + usize::from(other.category == dish.category))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dishswipe_core::ActionKind;
    use dishswipe_core::test_support::{dish, profile_from};
    use rstest::rstest;

    #[expect(clippy::float_arithmetic, reason = "assertions compare floating point values")]
    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[rstest]
    fn neutral_without_likes() {
        let profile = profile_from([(
            dish("1", "Pho", "Beef", "Vietnamese", &[]),
            ActionKind::Reject,
        )]);
        let candidate = dish("2", "Bun Cha", "Pork", "Vietnamese", &[]);
        assert_close(CuisineSignal.score(&candidate, &profile), 0.5);
    }

    #[rstest]
    fn area_and_category_matches_accumulate() {
        let profile = profile_from([
            (dish("1", "Carbonara", "Pasta", "Italian", &[]), ActionKind::Like),
            (dish("2", "Risotto", "Vegetarian", "Italian", &[]), ActionKind::Like),
        ]);
        // (2 area + 1 category) / (2 * 0.8), clamped
        let lasagne = dish("3", "Lasagne", "Pasta", "Italian", &[]);
        assert_close(CuisineSignal.score(&lasagne, &profile), 1.0);

        let tacos = dish("4", "Tacos", "Beef", "Mexican", &[]);
        assert_close(CuisineSignal.score(&tacos, &profile), 0.0);
    }

    #[rstest]
    fn super_like_counts_twice_in_denominator() {
        let profile = profile_from([
            (dish("1", "Ramen", "Pork", "Japanese", &[]), ActionKind::SuperLike),
            (dish("2", "Tacos", "Beef", "Mexican", &[]), ActionKind::Like),
        ]);
        // pool = [ramen, tacos, ramen]; weight = 3 + 1; 2 / 3.2 + 0.2
        let candidate = dish("3", "Tonkatsu", "Chicken", "Japanese", &[]);
        assert_close(CuisineSignal.score(&candidate, &profile), 0.825);
    }

    #[rstest]
    fn rejections_penalise() {
        let profile = profile_from([
            (dish("1", "Pad Thai", "Pasta", "Thai", &[]), ActionKind::Like),
            (dish("2", "Tom Yum", "Seafood", "Thai", &[]), ActionKind::Reject),
            (dish("3", "Fish Pie", "Seafood", "British", &[]), ActionKind::Reject),
        ]);
        // 1 / 0.8 - (1 area + 2 category) / 2 * 0.5
        let candidate = dish("4", "Green Curry", "Seafood", "Thai", &[]);
        assert_close(CuisineSignal.score(&candidate, &profile), 0.5);
    }
}
