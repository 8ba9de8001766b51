//! Property-based tests for preference profile mutations.
//!
//! # Invariants tested
//!
//! - **Undo restores:** Recording any swipe then undoing it leaves the
//!   profile exactly as it was.
//! - **Super likes are likes:** Every super-liked identifier is also liked.
//! - **One record per swipe:** History length equals the number of swipes.

use std::collections::HashSet;

use chrono::{DateTime, TimeZone, Utc};
use dishswipe_core::{ActionKind, Dish, PreferenceProfile};
use proptest::prelude::*;

fn action_strategy() -> impl Strategy<Value = ActionKind> {
    prop::sample::select(ActionKind::ALL.to_vec())
}

fn swipe_strategy() -> impl Strategy<Value = (u8, ActionKind)> {
    (0_u8..6, action_strategy())
}

fn dish_for(id: u8) -> Dish {
    Dish::new(id.to_string(), format!("Dish {id}"), "Side", "Thai").with_ingredients(["rice"])
}

fn epoch() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(0).single().unwrap_or_default()
}

fn replay(swipes: &[(u8, ActionKind)]) -> PreferenceProfile {
    let mut profile = PreferenceProfile::default();
    for &(id, action) in swipes {
        profile.record_swipe(dish_for(id), action, epoch());
    }
    profile
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: undo is the exact inverse of the most recent swipe.
    #[test]
    fn undo_restores_previous_profile(
        prefix in prop::collection::vec(swipe_strategy(), 0..12),
        (id, action) in swipe_strategy(),
    ) {
        let mut profile = replay(&prefix);
        let before = profile.clone();

        profile.record_swipe(dish_for(id), action, epoch());
        let restored = profile.undo_last();

        prop_assert_eq!(restored.map(|dish| dish.id), Some(id.to_string()));
        prop_assert_eq!(profile, before);
    }

    /// Property: the super-liked identifiers are a subset of the liked ones.
    #[test]
    fn super_likes_are_liked(swipes in prop::collection::vec(swipe_strategy(), 0..20)) {
        let profile = replay(&swipes);
        let liked: HashSet<&str> = profile.liked.iter().map(|dish| dish.id.as_str()).collect();
        for dish in &profile.super_liked {
            prop_assert!(liked.contains(dish.id.as_str()));
        }
    }

    /// Property: history grows by one per swipe and shrinks by one per undo.
    #[test]
    fn history_tracks_swipes(
        swipes in prop::collection::vec(swipe_strategy(), 0..20),
        undos in 0_usize..25,
    ) {
        let mut profile = replay(&swipes);
        prop_assert_eq!(profile.history.len(), swipes.len());

        for _ in 0..undos {
            profile.undo_last();
        }
        prop_assert_eq!(profile.history.len(), swipes.len().saturating_sub(undos));
    }
}
