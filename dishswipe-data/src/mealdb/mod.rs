//! TheMealDB recipe source.
//!
//! This module provides [`MealDbProvider`], an HTTP implementation of
//! [`DishProvider`](dishswipe_core::DishProvider) backed by TheMealDB's free
//! JSON API, together with the payload types it decodes.

mod payload;
mod provider;

pub use payload::{AreaEntry, CategoryEntry, CategoryList, MealList, MealRecord, MealSummary};
pub use provider::{
    DEFAULT_BASE_URL, DEFAULT_USER_AGENT, MealDbConfig, MealDbProvider, ProviderBuildError,
};
