//! Relative importance of each signal in the total score.

use dishswipe_core::ScoreBreakdown;
use serde::{Deserialize, Serialize};

use crate::ScorerError;

/// Multipliers applied to each sub-score before summing.
///
/// The defaults sum to one, so a candidate whose sub-scores all lie in
/// `0.0..=1.0` also receives a total in that range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalWeights {
    /// Weight of the cuisine affinity signal.
    pub cuisine: f64,
    /// Weight of the ingredient affinity signal.
    pub ingredient: f64,
    /// Weight of the dietary pattern signal.
    pub diet: f64,
    /// Weight of the time-of-day signal.
    pub time: f64,
}

impl SignalWeights {
    /// Cuisine 0.45, ingredient 0.30, diet 0.20, time 0.05.
    pub const DEFAULT: Self = Self {
        cuisine: 0.45,
        ingredient: 0.30,
        diet: 0.20,
        time: 0.05,
    };

    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScorerError::InvalidWeights`] when any value is not finite,
    /// any value is negative, or the total weight is zero.
    ///
    /// # Examples
    /// ```
    /// use dishswipe_scorer::{ScorerError, SignalWeights};
    ///
    /// assert!(SignalWeights::default().validate().is_ok());
    /// let broken = SignalWeights { diet: f64::NAN, ..SignalWeights::default() };
    /// assert_eq!(broken.validate(), Err(ScorerError::InvalidWeights));
    /// ```
    pub fn validate(self) -> Result<Self, ScorerError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ScorerError::InvalidWeights)
        }
    }

    const fn values(self) -> [f64; 4] {
        [self.cuisine, self.ingredient, self.diet, self.time]
    }

    fn is_valid(self) -> bool {
        let values = self.values();
        values.iter().all(|value| value.is_finite() && *value >= 0.0) && self.total() > 0.0
    }

    #[expect(clippy::float_arithmetic, reason = "validation sums the weights")]
    fn total(self) -> f64 {
        self.values().iter().sum()
    }

    /// Combine a breakdown into a weighted total.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the total is a weighted sum of sub-scores"
    )]
    pub fn combine(self, breakdown: ScoreBreakdown) -> f64 {
        breakdown.cuisine * self.cuisine
            + breakdown.ingredient * self.ingredient
            + breakdown.diet * self.diet
            + breakdown.time * self.time
    }
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}
