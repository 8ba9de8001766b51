//! Rank candidate dishes for a preference profile.

use dishswipe_core::{
    Clock, Dish, PreferenceProfile, ScoreBreakdown, ScoredCandidate, Signal, SystemClock,
};
use log::debug;

use crate::{
    CuisineSignal, DietSignal, IngredientSignal, ScorerError, SignalWeights, TimeOfDaySignal,
    generate_reasons,
};

/// Combine the four signals into a ranked, explained recommendation list.
///
/// The engine holds no profile state: every call to
/// [`RecommendationEngine::generate`] recomputes scores from the profile it
/// is given. The only ambient input is the clock used by the time-of-day
/// signal.
///
/// # Examples
/// ```
/// use dishswipe_core::{ActionKind, Dish, FixedClock, PreferenceProfile};
/// use dishswipe_scorer::RecommendationEngine;
///
/// let clock = FixedClock::at_hour(19).expect("valid hour");
/// let engine = RecommendationEngine::with_clock(clock);
///
/// let mut profile = PreferenceProfile::default();
/// let liked = Dish::new("1", "Carbonara", "Pasta", "Italian");
/// profile.record_swipe(liked, ActionKind::Like, Default::default());
///
/// let candidates = [
///     Dish::new("1", "Carbonara", "Pasta", "Italian"),
///     Dish::new("2", "Lasagne", "Pasta", "Italian"),
///     Dish::new("3", "Tacos", "Beef", "Mexican"),
/// ];
/// let ranked = engine.generate(&candidates, &profile, 5);
///
/// assert_eq!(ranked.len(), 2);
/// assert_eq!(ranked[0].dish.id, "2");
/// ```
#[derive(Debug, Clone)]
pub struct RecommendationEngine<C = SystemClock> {
    weights: SignalWeights,
    time: TimeOfDaySignal<C>,
}

impl RecommendationEngine<SystemClock> {
    /// Build an engine with default weights reading the host clock.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for RecommendationEngine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> RecommendationEngine<C> {
    /// Build an engine with default weights reading `clock`.
    #[must_use]
    pub const fn with_clock(clock: C) -> Self {
        Self {
            weights: SignalWeights::DEFAULT,
            time: TimeOfDaySignal::new(clock),
        }
    }

    /// Replace the signal weights.
    ///
    /// # Errors
    /// Returns [`ScorerError::InvalidWeights`] when `weights` fail
    /// [`SignalWeights::validate`].
    pub fn with_weights(mut self, weights: SignalWeights) -> Result<Self, ScorerError> {
        self.weights = weights.validate()?;
        Ok(self)
    }

    /// Weights currently applied.
    #[must_use]
    pub const fn weights(&self) -> SignalWeights {
        self.weights
    }

    /// Compute the sub-scores and weighted total for one dish.
    ///
    /// The total is left unclamped so weights summing above one still rank
    /// by score; only non-finite totals are replaced with `0.0`.
    #[must_use]
    pub fn breakdown(&self, dish: &Dish, profile: &PreferenceProfile) -> (ScoreBreakdown, f64) {
        let breakdown = ScoreBreakdown {
            cuisine: CuisineSignal.score(dish, profile),
            ingredient: IngredientSignal.score(dish, profile),
            diet: DietSignal.score(dish, profile),
            time: self.time.score(dish, profile),
        };
        let weighted = self.weights.combine(breakdown);
        let total = if weighted.is_finite() { weighted } else { 0.0 };
        (breakdown, total)
    }

    /// Score a single dish and attach its reasons.
    #[must_use]
    pub fn score(&self, dish: &Dish, profile: &PreferenceProfile) -> ScoredCandidate {
        let (breakdown, total) = self.breakdown(dish, profile);
        ScoredCandidate {
            reasons: generate_reasons(dish, profile, breakdown),
            dish: dish.clone(),
            total,
            breakdown,
        }
    }

    /// Rank `candidates` for `profile`, returning at most `limit` entries.
    ///
    /// Dishes already present in any profile collection are skipped. The
    /// remainder is sorted by descending total; ties keep their input order.
    #[must_use]
    pub fn generate(
        &self,
        candidates: &[Dish],
        profile: &PreferenceProfile,
        limit: usize,
    ) -> Vec<ScoredCandidate> {
        let swiped = profile.swiped_ids();
        let mut ranked: Vec<(&Dish, ScoreBreakdown, f64)> = candidates
            .iter()
            .filter(|dish| !swiped.contains(dish.id.as_str()))
            .map(|dish| {
                let (breakdown, total) = self.breakdown(dish, profile);
                (dish, breakdown, total)
            })
            .collect();
        let eligible = ranked.len();

        ranked.sort_by(|a, b| b.2.total_cmp(&a.2));
        ranked.truncate(limit);

        debug!(
            "ranked {} candidates ({} already swiped), returning {}",
            candidates.len(),
            candidates.len() - eligible,
            ranked.len()
        );

        ranked
            .into_iter()
            .map(|(dish, breakdown, total)| ScoredCandidate {
                reasons: generate_reasons(dish, profile, breakdown),
                dish: dish.clone(),
                total,
                breakdown,
            })
            .collect()
    }
}
