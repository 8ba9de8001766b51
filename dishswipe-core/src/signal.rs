//! Score dishes along a single preference axis.
//!
//! A [`Signal`] assigns a score to a [`Dish`](crate::Dish) given the
//! swiper's [`PreferenceProfile`](crate::PreferenceProfile). The engine
//! combines several signals into a weighted total.

use crate::{Dish, PreferenceProfile};

/// Calculate one sub-score for a candidate dish.
///
/// Higher scores indicate a better match between the dish and the profile.
/// Implementations must be thread-safe (`Send` + `Sync`) so signals can be
/// shared across threads. The method is infallible; implementers fall back
/// to a neutral score when the profile carries no evidence.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Return non-negative values.
/// - Normalise results to the range `0.0..=1.0`.
///
/// Use [`Signal::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use dishswipe_core::{Dish, PreferenceProfile, Signal};
///
/// struct Neutral;
///
/// impl Signal for Neutral {
///     fn score(&self, _dish: &Dish, _profile: &PreferenceProfile) -> f64 {
///         0.5
///     }
/// }
///
/// let dish = Dish::new("1", "Pho", "Beef", "Vietnamese");
/// assert_eq!(Neutral.score(&dish, &PreferenceProfile::default()), 0.5);
/// ```
pub trait Signal: Send + Sync {
    /// Return a score for `dish` according to `profile`.
    fn score(&self, dish: &Dish, profile: &PreferenceProfile) -> f64;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    #[must_use]
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}
