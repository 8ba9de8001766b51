//! Preference scoring and recommendation for Dishswipe.
//!
//! The crate turns a [`PreferenceProfile`](dishswipe_core::PreferenceProfile)
//! into a ranked, explained list of candidate dishes. Four independent
//! [`Signal`](dishswipe_core::Signal) implementations each produce a
//! sub-score in `0.0..=1.0`:
//!
//! - [`CuisineSignal`] rewards areas and categories the user has liked.
//! - [`IngredientSignal`] rewards significant ingredients seen in liked dishes
//!   and penalises those seen in rejected ones.
//! - [`DietSignal`] matches the meat, seafood and vegetarian balance of liked
//!   dishes.
//! - [`TimeOfDaySignal`] favours categories suited to the current meal slot.
//!
//! [`RecommendationEngine`] weights the sub-scores with [`SignalWeights`],
//! ranks the unseen candidates and attaches up to three reasons from
//! [`generate_reasons`].
//!
//! # Examples
//!
//! ```
//! use dishswipe_core::{FixedClock, PreferenceProfile};
//! use dishswipe_core::Dish;
//! use dishswipe_scorer::RecommendationEngine;
//!
//! let engine = RecommendationEngine::with_clock(FixedClock::at_hour(8).expect("valid hour"));
//! let pancakes = Dish::new("1", "Pancakes", "Breakfast", "American");
//! let ranked = engine.generate(&[pancakes], &PreferenceProfile::default(), 6);
//!
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].breakdown.time, 1.0);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cuisine;
mod diet;
mod engine;
mod error;
mod ingredient;
mod reasons;
mod time_of_day;
pub mod vocabulary;
mod weights;

pub use cuisine::CuisineSignal;
pub use diet::DietSignal;
pub use engine::RecommendationEngine;
pub use error::ScorerError;
pub use ingredient::IngredientSignal;
pub use reasons::{MAX_REASONS, generate_reasons};
pub use time_of_day::{MealTime, TimeOfDaySignal};
pub use weights::SignalWeights;

/// Score returned when the profile carries no evidence either way.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Widen a count for ratio arithmetic; counts beyond `u32::MAX` saturate.
pub(crate) fn count_as_f64(count: usize) -> f64 {
    u32::try_from(count).map_or(f64::from(u32::MAX), f64::from)
}
