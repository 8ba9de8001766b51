//! Core domain types for the Dishswipe engine.
//!
//! The crate holds the shapes shared by the scorer, the data adapters and the
//! CLI: dishes, swipe actions, the accumulated [`PreferenceProfile`], and the
//! scored output of a recommendation pass. It also defines the traits that
//! sit at the engine boundaries:
//!
//! - [`Signal`] scores a dish along one axis for a profile.
//! - [`Clock`] supplies "now" so time-sensitive scoring can be pinned.
//! - [`DishProvider`] fetches candidate dishes from a recipe source.
//! - [`PreferenceStore`] loads and saves the profile.
//!
//! # Examples
//!
//! ```
//! use dishswipe_core::{ActionKind, Dish, PreferenceProfile};
//! use chrono::{NaiveDate, TimeZone, Utc};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
//! let mut profile = PreferenceProfile::new(today);
//! let dish = Dish::new("52772", "Teriyaki Chicken Casserole", "Chicken", "Japanese");
//! let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().expect("valid time");
//!
//! profile.record_swipe(dish, ActionKind::SuperLike, at);
//! assert_eq!(profile.liked.len(), 1);
//! assert_eq!(profile.super_liked.len(), 1);
//! assert_eq!(profile.history.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod action;
pub mod candidate;
pub mod clock;
pub mod dish;
pub mod profile;
pub mod provider;
pub mod session;
pub mod signal;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use action::{ActionKind, Collection};
pub use candidate::{ScoreBreakdown, ScoredCandidate};
pub use clock::{Clock, FixedClock, SystemClock};
pub use dish::Dish;
pub use profile::{InteractionRecord, MIN_SWIPES_FOR_RECOMMENDATIONS, PreferenceProfile};
pub use provider::{DishProvider, ProviderError};
pub use session::PreferenceSession;
pub use signal::Signal;
pub use store::{PreferenceStore, StoreError};
