//! Facade crate for the Dishswipe recommendation engine.
//!
//! This crate re-exports the core domain types and the scoring engine, and
//! exposes the TheMealDB provider and JSON profile store behind the `mealdb`
//! feature.

#![forbid(unsafe_code)]

pub use dishswipe_core::{
    ActionKind, Clock, Collection, Dish, DishProvider, FixedClock, InteractionRecord,
    MIN_SWIPES_FOR_RECOMMENDATIONS, PreferenceProfile, PreferenceSession, PreferenceStore,
    ProviderError, ScoreBreakdown, ScoredCandidate, Signal, StoreError, SystemClock,
};

pub use dishswipe_scorer::{
    CuisineSignal, DietSignal, IngredientSignal, MealTime, NEUTRAL_SCORE, RecommendationEngine,
    ScorerError, SignalWeights, TimeOfDaySignal, generate_reasons,
};

#[cfg(feature = "mealdb")]
pub use dishswipe_data::{JsonFilePreferenceStore, MealDbConfig, MealDbProvider, gather_candidates};
