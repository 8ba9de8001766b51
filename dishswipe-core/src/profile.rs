//! Preference profiles: the accumulated swipe state of a single user.
//!
//! A [`PreferenceProfile`] owns three ordered dish collections and the
//! append-only interaction history. It is mutated by exactly two operations,
//! [`PreferenceProfile::record_swipe`] and [`PreferenceProfile::undo_last`],
//! both driven by the tables on [`ActionKind`].

use std::collections::{BTreeSet, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{ActionKind, Collection, Dish};

/// Swipe count from which recommendations are considered meaningful.
pub const MIN_SWIPES_FOR_RECOMMENDATIONS: usize = 10;

/// One entry in the swipe history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRecord {
    /// Identifier of the swiped dish.
    #[serde(alias = "mealId")]
    pub dish_id: String,
    /// Decision taken.
    pub action: ActionKind,
    /// When the decision was recorded, stored as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

/// Aggregate user state used for scoring.
///
/// `super_liked` is always a subset of `liked`: a super like appends the
/// snapshot to both collections while recording a single history entry.
/// Missing fields decode as empty so profiles written by older clients load
/// cleanly.
///
/// # Examples
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use dishswipe_core::{ActionKind, Dish, PreferenceProfile};
///
/// let mut profile = PreferenceProfile::new(NaiveDate::default());
/// let before = profile.clone();
/// let at = Utc.timestamp_millis_opt(0).single().expect("epoch");
///
/// profile.record_swipe(Dish::new("1", "Pad Thai", "Pasta", "Thai"), ActionKind::Like, at);
/// let restored = profile.undo_last();
///
/// assert_eq!(restored.map(|dish| dish.id), Some("1".to_owned()));
/// assert_eq!(profile, before);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceProfile {
    /// Liked dishes, super likes included.
    #[serde(default, alias = "likes")]
    pub liked: Vec<Dish>,
    /// Rejected dishes.
    #[serde(default, alias = "dislikes")]
    pub rejected: Vec<Dish>,
    /// Super-liked dishes.
    #[serde(default, alias = "superLikes")]
    pub super_liked: Vec<Dish>,
    /// One record per swipe, oldest first.
    #[serde(default)]
    pub history: Vec<InteractionRecord>,
    /// Cuisine filter; empty means every cuisine.
    #[serde(default)]
    pub selected_cuisines: BTreeSet<String>,
    /// Date of the most recent session.
    #[serde(default)]
    pub last_session_date: NaiveDate,
}

impl PreferenceProfile {
    /// Construct an empty profile for a session starting on `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            last_session_date: today,
            ..Self::default()
        }
    }

    /// Borrow one of the dish collections.
    #[must_use]
    pub fn collection(&self, collection: Collection) -> &[Dish] {
        match collection {
            Collection::Liked => &self.liked,
            Collection::Rejected => &self.rejected,
            Collection::SuperLiked => &self.super_liked,
        }
    }

    const fn collection_mut(&mut self, collection: Collection) -> &mut Vec<Dish> {
        match collection {
            Collection::Liked => &mut self.liked,
            Collection::Rejected => &mut self.rejected,
            Collection::SuperLiked => &mut self.super_liked,
        }
    }

    /// Record a swipe on `dish`.
    ///
    /// Appends exactly one [`InteractionRecord`] and inserts the dish into
    /// every collection named by [`ActionKind::insertions`].
    pub fn record_swipe(&mut self, dish: Dish, action: ActionKind, at: DateTime<Utc>) {
        self.history.push(InteractionRecord {
            dish_id: dish.id.clone(),
            action,
            timestamp: at,
        });
        let Some((&last, rest)) = action.insertions().split_last() else {
            return;
        };
        for &collection in rest {
            self.collection_mut(collection).push(dish.clone());
        }
        self.collection_mut(last).push(dish);
    }

    /// Reverse the most recent swipe.
    ///
    /// Pops one history record and, for each collection in
    /// [`ActionKind::reversal`], removes the most recent snapshot carrying the
    /// recorded identifier. Returns the removed snapshot, or `None` when the
    /// history is empty.
    pub fn undo_last(&mut self) -> Option<Dish> {
        let record = self.history.pop()?;
        let mut restored = None;
        for &collection in record.action.reversal() {
            let dishes = self.collection_mut(collection);
            if let Some(position) = dishes.iter().rposition(|dish| dish.id == record.dish_id) {
                restored = Some(dishes.remove(position));
            }
        }
        restored
    }

    /// Iterate over `liked` followed by `super_liked`.
    ///
    /// This is a concatenation: a super-liked dish appears twice.
    pub fn liked_pool(&self) -> impl Iterator<Item = &Dish> {
        self.liked.iter().chain(self.super_liked.iter())
    }

    /// Number of entries in [`Self::liked_pool`].
    #[must_use]
    pub const fn liked_pool_len(&self) -> usize {
        self.liked.len() + self.super_liked.len()
    }

    /// Report whether the profile holds any positive signal.
    #[must_use]
    pub const fn has_likes(&self) -> bool {
        !self.liked.is_empty() || !self.super_liked.is_empty()
    }

    /// Identifiers present in any of the three collections.
    #[must_use]
    pub fn swiped_ids(&self) -> HashSet<&str> {
        self.liked
            .iter()
            .chain(&self.rejected)
            .chain(&self.super_liked)
            .map(|dish| dish.id.as_str())
            .collect()
    }

    /// Total collection size; a super like counts twice.
    #[must_use]
    pub const fn swipe_count(&self) -> usize {
        self.liked.len() + self.rejected.len() + self.super_liked.len()
    }

    /// Report whether enough swipes exist to show recommendations.
    #[must_use]
    pub const fn has_enough_swipes(&self) -> bool {
        self.swipe_count() >= MIN_SWIPES_FOR_RECOMMENDATIONS
    }

    /// Replace the cuisine filter.
    pub fn set_selected_cuisines<I, S>(&mut self, cuisines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_cuisines = cuisines.into_iter().map(Into::into).collect();
    }
}
