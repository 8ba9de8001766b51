//! In-memory providers, stores and dish fixtures used by unit and behaviour
//! tests.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};

use crate::{
    ActionKind, Dish, DishProvider, PreferenceProfile, PreferenceStore, ProviderError, StoreError,
};

/// In-memory `DishProvider` keyed by cuisine area.
///
/// Areas registered with [`MemoryDishProvider::failing_area`] answer with a
/// network error, which lets tests exercise partial-failure handling.
#[derive(Default, Debug, Clone)]
pub struct MemoryDishProvider {
    areas: BTreeMap<String, Vec<Dish>>,
    failing: BTreeSet<String>,
}

impl MemoryDishProvider {
    /// Create a provider from a collection of dishes, grouped by `area`.
    #[must_use]
    pub fn with_dishes<I>(dishes: I) -> Self
    where
        I: IntoIterator<Item = Dish>,
    {
        let mut areas: BTreeMap<String, Vec<Dish>> = BTreeMap::new();
        for dish in dishes {
            areas.entry(dish.area.clone()).or_default().push(dish);
        }
        Self {
            areas,
            failing: BTreeSet::new(),
        }
    }

    /// Make every lookup for `area` fail.
    #[must_use]
    pub fn failing_area(mut self, area: impl Into<String>) -> Self {
        self.failing.insert(area.into());
        self
    }

    fn failure(area: &str) -> ProviderError {
        ProviderError::Network {
            url: format!("memory://{area}"),
            message: "simulated outage".to_owned(),
        }
    }
}

impl DishProvider for MemoryDishProvider {
    fn dishes_by_area(&self, area: &str) -> Result<Vec<Dish>, ProviderError> {
        if self.failing.contains(area) {
            return Err(Self::failure(area));
        }
        Ok(self.areas.get(area).cloned().unwrap_or_default())
    }

    fn dish_by_id(&self, id: &str) -> Result<Option<Dish>, ProviderError> {
        Ok(self
            .areas
            .values()
            .flatten()
            .find(|dish| dish.id == id)
            .cloned())
    }
}

/// In-memory `PreferenceStore` that records how often it was written.
#[derive(Default, Debug)]
pub struct MemoryPreferenceStore {
    profile: Mutex<Option<PreferenceProfile>>,
    saves: Mutex<usize>,
}

impl MemoryPreferenceStore {
    /// Seed the store with an existing profile.
    #[must_use]
    pub fn with_profile(profile: PreferenceProfile) -> Self {
        Self {
            profile: Mutex::new(Some(profile)),
            saves: Mutex::new(0),
        }
    }

    /// Return the stored profile, or a default one when nothing was saved.
    #[must_use]
    pub fn snapshot(&self) -> PreferenceProfile {
        self.profile
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .unwrap_or_default()
    }

    /// Number of successful `save` calls.
    #[must_use]
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<PreferenceProfile, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, profile: &PreferenceProfile) -> Result<(), StoreError> {
        *self.profile.lock().unwrap_or_else(PoisonError::into_inner) = Some(profile.clone());
        *self.saves.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}

/// `PreferenceStore` that loads a default profile but refuses every write.
#[derive(Default, Debug, Clone, Copy)]
pub struct FailingPreferenceStore;

impl PreferenceStore for FailingPreferenceStore {
    fn load(&self) -> Result<PreferenceProfile, StoreError> {
        Ok(PreferenceProfile::default())
    }

    fn save(&self, _profile: &PreferenceProfile) -> Result<(), StoreError> {
        Err(StoreError::Write {
            location: "memory".to_owned(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only store"),
        })
    }
}

/// Build a dish with the given ingredients and no other metadata.
#[must_use]
pub fn dish(id: &str, name: &str, category: &str, area: &str, ingredients: &[&str]) -> Dish {
    Dish::new(id, name, category, area).with_ingredients(ingredients.iter().copied())
}

/// Replay `swipes` onto an empty profile, timestamping each at the epoch.
#[must_use]
pub fn profile_from<I>(swipes: I) -> PreferenceProfile
where
    I: IntoIterator<Item = (Dish, ActionKind)>,
{
    let mut profile = PreferenceProfile::default();
    for (dish, action) in swipes {
        profile.record_swipe(dish, action, DateTime::<Utc>::default());
    }
    profile
}

/// A small catalogue spanning several areas and categories.
#[must_use]
pub fn sample_dishes() -> Vec<Dish> {
    vec![
        dish(
            "52771",
            "Spicy Arrabiata Penne",
            "Vegetarian",
            "Italian",
            &["penne rigate", "olive oil", "garlic", "chopped tomatoes"],
        ),
        dish(
            "52982",
            "Spaghetti alla Carbonara",
            "Pasta",
            "Italian",
            &["spaghetti", "egg yolks", "bacon", "parmesan"],
        ),
        dish(
            "52772",
            "Teriyaki Chicken Casserole",
            "Chicken",
            "Japanese",
            &["soy sauce", "chicken breasts", "rice", "garlic"],
        ),
        dish(
            "52959",
            "Baked Salmon with Fennel",
            "Seafood",
            "Japanese",
            &["salmon", "fennel", "lemon"],
        ),
        dish(
            "52814",
            "Thai Green Curry",
            "Chicken",
            "Thai",
            &["chicken", "coconut milk", "green curry paste", "basil"],
        ),
        dish(
            "52894",
            "Battenberg Cake",
            "Dessert",
            "British",
            &["butter", "caster sugar", "self-raising flour", "marzipan"],
        ),
        dish(
            "53000",
            "Pancakes",
            "Breakfast",
            "American",
            &["flour", "eggs", "milk", "butter"],
        ),
    ]
}
