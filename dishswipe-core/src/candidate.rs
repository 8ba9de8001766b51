//! Scored output of a recommendation pass.

use serde::{Deserialize, Serialize};

use crate::Dish;

/// Per-signal sub-scores, each in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Cuisine and category affinity.
    pub cuisine: f64,
    /// Ingredient overlap with liked and rejected dishes.
    pub ingredient: f64,
    /// Fit with the meat/seafood/vegetarian pattern of liked dishes.
    pub diet: f64,
    /// Appropriateness for the current meal time.
    pub time: f64,
}

/// A candidate dish with its total score and justification.
///
/// Ephemeral: recomputed on every recommendation call and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    /// The scored dish.
    pub dish: Dish,
    /// Weighted sum of the breakdown.
    pub total: f64,
    /// Individual signal scores.
    pub breakdown: ScoreBreakdown,
    /// At most three human-readable reasons.
    pub reasons: Vec<String>,
}

impl ScoredCandidate {
    /// Express the total score as a whole percentage.
    ///
    /// # Examples
    /// ```
    /// use dishswipe_core::{Dish, ScoreBreakdown, ScoredCandidate};
    ///
    /// let candidate = ScoredCandidate {
    ///     dish: Dish::new("1", "Laksa", "Seafood", "Malaysian"),
    ///     total: 0.736,
    ///     breakdown: ScoreBreakdown::default(),
    ///     reasons: Vec::new(),
    /// };
    /// assert_eq!(candidate.match_percentage(), 74);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the total is clamped to 0.0..=1.0 before scaling to a percentage"
    )]
    pub fn match_percentage(&self) -> u8 {
        let total = if self.total.is_finite() {
            self.total.clamp(0.0, 1.0)
        } else {
            0.0
        };
        (total * 100.0).round() as u8
    }
}
