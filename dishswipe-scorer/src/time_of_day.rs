//! Meal-time appropriateness.

use dishswipe_core::{Clock, Dish, PreferenceProfile, Signal};
use serde::{Deserialize, Serialize};

use crate::NEUTRAL_SCORE;

const IN_SEASON: f64 = 1.0;

/// Meal slot derived from the local hour.
///
/// # Examples
/// ```
/// use dishswipe_scorer::MealTime;
///
/// assert_eq!(MealTime::from_hour(4), MealTime::Dinner);
/// assert_eq!(MealTime::from_hour(5), MealTime::Breakfast);
/// assert_eq!(MealTime::from_hour(11), MealTime::Lunch);
/// assert_eq!(MealTime::from_hour(17), MealTime::Dinner);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    /// Hours `5..11`.
    Breakfast,
    /// Hours `11..17`.
    Lunch,
    /// Every other hour, including the small hours.
    Dinner,
}

impl MealTime {
    /// Map a wall-clock hour to its meal slot.
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            5..=10 => Self::Breakfast,
            11..=16 => Self::Lunch,
            _ => Self::Dinner,
        }
    }

    /// Categories considered appropriate for this slot.
    #[must_use]
    pub const fn categories(self) -> &'static [&'static str] {
        match self {
            Self::Breakfast => &["Breakfast", "Dessert"],
            Self::Lunch => &["Pasta", "Side", "Starter", "Vegetarian", "Sandwich"],
            Self::Dinner => &[
                "Beef",
                "Chicken",
                "Lamb",
                "Pork",
                "Seafood",
                "Goat",
                "Miscellaneous",
            ],
        }
    }

    /// Report whether `category` suits this slot.
    #[must_use]
    pub fn suits(self, category: &str) -> bool {
        self.categories().contains(&category)
    }
}

/// Score `1.0` when the dish's category suits the current meal slot.
///
/// Everything else scores `0.5`. The profile is ignored; the clock alone
/// decides the slot.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeOfDaySignal<C> {
    clock: C,
}

impl<C: Clock> TimeOfDaySignal<C> {
    /// Build a signal reading the hour from `clock`.
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Meal slot for the clock's current hour.
    #[must_use]
    pub fn meal_time(&self) -> MealTime {
        MealTime::from_hour(self.clock.hour())
    }
}

impl<C: Clock> Signal for TimeOfDaySignal<C> {
    fn score(&self, dish: &Dish, _profile: &PreferenceProfile) -> f64 {
        if self.meal_time().suits(&dish.category) {
            IN_SEASON
        } else {
            NEUTRAL_SCORE
        }
    }
}
