//! Data adapters for Dishswipe.
//!
//! - [`mealdb`] fetches recipes from TheMealDB and converts them into
//!   [`Dish`](dishswipe_core::Dish) records.
//! - [`gather`] assembles a candidate deck across cuisine partitions,
//!   tolerating partial failure.
//! - [`store`] persists a [`PreferenceProfile`](dishswipe_core::PreferenceProfile)
//!   as a JSON file.
#![forbid(unsafe_code)]

pub mod gather;
pub mod mealdb;
pub mod store;

pub use gather::{ALLOWED_AREAS, areas_to_fetch, gather_candidates, merge_partitions};
pub use mealdb::{MealDbConfig, MealDbProvider, ProviderBuildError};
pub use store::JsonFilePreferenceStore;
