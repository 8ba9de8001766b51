//! Human-readable justifications for a recommendation.

use dishswipe_core::{Dish, PreferenceProfile, ScoreBreakdown};

/// Maximum number of reasons attached to a candidate.
pub const MAX_REASONS: usize = 3;

const INGREDIENT_THRESHOLD: f64 = 0.6;
const DIET_THRESHOLD: f64 = 0.8;

/// Explain why `dish` was recommended.
///
/// Rules are evaluated in a fixed order and the first [`MAX_REASONS`] that
/// apply are kept. Area and category counts consider the `liked` collection
/// only, so a super like contributes once here.
///
/// # Examples
/// ```
/// use dishswipe_core::{Dish, PreferenceProfile, ScoreBreakdown};
/// use dishswipe_scorer::generate_reasons;
///
/// let dish = Dish::new("1", "Kare-Kare", "Beef", "Filipino");
/// let reasons = generate_reasons(&dish, &PreferenceProfile::default(), ScoreBreakdown::default());
/// assert!(reasons.is_empty());
/// ```
#[must_use]
pub fn generate_reasons(
    dish: &Dish,
    profile: &PreferenceProfile,
    breakdown: ScoreBreakdown,
) -> Vec<String> {
    let mut reasons = Vec::with_capacity(MAX_REASONS);

    let same_area = profile
        .liked
        .iter()
        .filter(|liked| liked.area == dish.area)
        .count();
    if same_area > 0 {
        reasons.push(format!("You liked {same_area} {} dishes", dish.area));
    }

    let same_category = profile
        .liked
        .iter()
        .filter(|liked| liked.category == dish.category)
        .count();
    if same_category > 1 {
        reasons.push(format!(
            "Similar to {same_category} {} dishes you liked",
            dish.category
        ));
    }

    if breakdown.ingredient > INGREDIENT_THRESHOLD {
        reasons.push("Contains ingredients you enjoy".to_owned());
    }

    if breakdown.diet > DIET_THRESHOLD {
        reasons.push("Matches your dietary preferences".to_owned());
    }

    if profile
        .super_liked
        .iter()
        .any(|liked| liked.area == dish.area)
    {
        reasons.push("Matches your Super Like!".to_owned());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use dishswipe_core::ActionKind;
    use dishswipe_core::test_support::{dish, profile_from};
    use rstest::rstest;

    #[rstest]
    fn area_and_category_reasons() {
        let profile = profile_from([
            (dish("1", "Carbonara", "Pasta", "Italian", &[]), ActionKind::Like),
            (dish("2", "Cacio e Pepe", "Pasta", "Italian", &[]), ActionKind::Like),
        ]);
        let candidate = dish("3", "Lasagne", "Pasta", "Italian", &[]);
        let reasons = generate_reasons(&candidate, &profile, ScoreBreakdown::default());
        assert_eq!(
            reasons,
            vec![
                "You liked 2 Italian dishes",
                "Similar to 2 Pasta dishes you liked",
            ]
        );
    }

    #[rstest]
    fn single_category_match_is_not_reported() {
        let profile = profile_from([(
            dish("1", "Carbonara", "Pasta", "Italian", &[]),
            ActionKind::Like,
        )]);
        let candidate = dish("3", "Pad Thai", "Pasta", "Thai", &[]);
        let reasons = generate_reasons(&candidate, &profile, ScoreBreakdown::default());
        assert!(reasons.is_empty());
    }

    #[rstest]
    fn super_like_reason_and_truncation() {
        let profile = profile_from([
            (dish("1", "Ramen", "Pork", "Japanese", &[]), ActionKind::SuperLike),
            (dish("2", "Katsu", "Pork", "Japanese", &[]), ActionKind::Like),
        ]);
        let candidate = dish("3", "Tonkatsu", "Pork", "Japanese", &[]);
        let breakdown = ScoreBreakdown {
            ingredient: 0.9,
            diet: 0.9,
            ..ScoreBreakdown::default()
        };
        let reasons = generate_reasons(&candidate, &profile, breakdown);
        assert_eq!(
            reasons,
            vec![
                "You liked 2 Japanese dishes",
                "Similar to 2 Pork dishes you liked",
                "Contains ingredients you enjoy",
            ]
        );
    }

    #[rstest]
    #[case(0.6, 0.8, 0)]
    #[case(0.61, 0.8, 1)]
    #[case(0.61, 0.81, 2)]
    fn score_thresholds_are_strict(
        #[case] ingredient: f64,
        #[case] diet: f64,
        #[case] expected: usize,
    ) {
        let candidate = dish("3", "Tonkatsu", "Pork", "Japanese", &[]);
        let breakdown = ScoreBreakdown {
            ingredient,
            diet,
            ..ScoreBreakdown::default()
        };
        let reasons = generate_reasons(&candidate, &PreferenceProfile::default(), breakdown);
        assert_eq!(reasons.len(), expected);
    }
}
