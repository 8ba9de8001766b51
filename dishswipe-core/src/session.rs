//! Persisted swipe sessions.
//!
//! [`PreferenceSession`] couples a [`PreferenceProfile`] with its
//! [`PreferenceStore`] and a [`Clock`], saving after every mutation so the
//! stored profile never lags behind the in-memory one.

use crate::{ActionKind, Clock, Dish, PreferenceProfile, PreferenceStore, StoreError};

/// A loaded profile that persists itself after each change.
///
/// # Examples
/// ```
/// use std::cell::RefCell;
///
/// use dishswipe_core::{
///     ActionKind, Dish, FixedClock, PreferenceProfile, PreferenceSession, PreferenceStore,
///     StoreError,
/// };
///
/// #[derive(Default)]
/// struct CellStore(RefCell<PreferenceProfile>);
///
/// impl PreferenceStore for CellStore {
///     fn load(&self) -> Result<PreferenceProfile, StoreError> {
///         Ok(self.0.borrow().clone())
///     }
///
///     fn save(&self, profile: &PreferenceProfile) -> Result<(), StoreError> {
///         *self.0.borrow_mut() = profile.clone();
///         Ok(())
///     }
/// }
///
/// let store = CellStore::default();
/// let clock = FixedClock::at_hour(19).expect("valid hour");
/// let mut session = PreferenceSession::open(&store, clock)?;
///
/// session.record_swipe(Dish::new("1", "Bulgogi", "Beef", "Korean"), ActionKind::Like)?;
/// assert_eq!(store.0.borrow().liked.len(), 1);
/// # Ok::<(), StoreError>(())
/// ```
#[derive(Debug)]
pub struct PreferenceSession<S, C>
where
    S: PreferenceStore,
    C: Clock,
{
    store: S,
    clock: C,
    profile: PreferenceProfile,
}

impl<S, C> PreferenceSession<S, C>
where
    S: PreferenceStore,
    C: Clock,
{
    /// Load the stored profile and stamp it with today's session date.
    ///
    /// # Errors
    /// Propagates [`StoreError`] from [`PreferenceStore::load`].
    pub fn open(store: S, clock: C) -> Result<Self, StoreError> {
        let mut profile = store.load()?;
        profile.last_session_date = clock.today();
        Ok(Self {
            store,
            clock,
            profile,
        })
    }

    /// Borrow the current profile.
    #[must_use]
    pub const fn profile(&self) -> &PreferenceProfile {
        &self.profile
    }

    /// Consume the session and return the profile.
    #[must_use]
    pub fn into_profile(self) -> PreferenceProfile {
        self.profile
    }

    /// Record a swipe and persist the profile.
    ///
    /// # Errors
    /// Returns [`StoreError`] when saving fails. The in-memory profile keeps
    /// the swipe either way.
    pub fn record_swipe(&mut self, dish: Dish, action: ActionKind) -> Result<(), StoreError> {
        let at = self.clock.now_utc();
        self.profile.record_swipe(dish, action, at);
        self.store.save(&self.profile)
    }

    /// Undo the most recent swipe and persist the profile.
    ///
    /// Returns the restored dish so callers can put it back on the deck.
    /// Nothing is written when the history is empty.
    ///
    /// # Errors
    /// Returns [`StoreError`] when saving fails.
    pub fn undo(&mut self) -> Result<Option<Dish>, StoreError> {
        let Some(restored) = self.profile.undo_last() else {
            return Ok(None);
        };
        self.store.save(&self.profile)?;
        Ok(Some(restored))
    }

    /// Replace the cuisine filter and persist the profile.
    ///
    /// # Errors
    /// Returns [`StoreError`] when saving fails.
    pub fn set_selected_cuisines<I, T>(&mut self, cuisines: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.profile.set_selected_cuisines(cuisines);
        self.store.save(&self.profile)
    }

    /// Discard the profile, replacing it with an empty one dated today.
    ///
    /// # Errors
    /// Returns [`StoreError`] when saving fails.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.profile = PreferenceProfile::new(self.clock.today());
        self.store.save(&self.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::test_support::{FailingPreferenceStore, MemoryPreferenceStore};
    use rstest::{fixture, rstest};

    #[fixture]
    fn clock() -> FixedClock {
        FixedClock::at_hour(12).expect("valid hour")
    }

    #[fixture]
    fn curry() -> Dish {
        Dish::new("3", "Green Curry", "Chicken", "Thai")
    }

    #[rstest]
    fn open_stamps_session_date(clock: FixedClock) {
        let store = MemoryPreferenceStore::default();
        let session = PreferenceSession::open(&store, clock).expect("open session");
        assert_eq!(session.profile().last_session_date, clock.today());
    }

    #[rstest]
    fn swipe_and_undo_are_persisted(clock: FixedClock, curry: Dish) {
        let store = MemoryPreferenceStore::default();
        let mut session = PreferenceSession::open(&store, clock).expect("open session");

        session
            .record_swipe(curry.clone(), ActionKind::SuperLike)
            .expect("record swipe");
        let stored = store.snapshot();
        assert_eq!(stored.super_liked, vec![curry.clone()]);
        assert_eq!(stored.history.len(), 1);

        let restored = session.undo().expect("undo swipe");
        assert_eq!(restored, Some(curry));
        assert!(store.snapshot().liked.is_empty());
        assert!(store.snapshot().history.is_empty());
    }

    #[rstest]
    fn undo_without_history_skips_save(clock: FixedClock) {
        let store = MemoryPreferenceStore::default();
        let mut session = PreferenceSession::open(&store, clock).expect("open session");
        assert_eq!(session.undo().expect("undo"), None);
        assert_eq!(store.save_count(), 0);
    }

    #[rstest]
    fn reset_replaces_profile(clock: FixedClock, curry: Dish) {
        let store = MemoryPreferenceStore::default();
        let mut session = PreferenceSession::open(&store, clock).expect("open session");
        session
            .record_swipe(curry, ActionKind::Like)
            .expect("record swipe");
        session
            .set_selected_cuisines(["Thai"])
            .expect("select cuisine");

        session.reset().expect("reset");

        assert_eq!(store.snapshot(), PreferenceProfile::new(clock.today()));
    }

    #[rstest]
    fn save_failure_surfaces(clock: FixedClock, curry: Dish) {
        let mut session =
            PreferenceSession::open(FailingPreferenceStore, clock).expect("load succeeds");
        let err = session
            .record_swipe(curry, ActionKind::Like)
            .expect_err("save should fail");
        assert!(matches!(err, StoreError::Write { .. }));
        assert_eq!(session.profile().history.len(), 1);
    }
}
