//! TheMealDB response types.
//!
//! Every list endpoint wraps its payload in an object whose array may be
//! `null` when nothing matches, so the wrappers decode a missing or null array
//! as empty.
//!
//! See: <https://www.themealdb.com/api.php>

use std::collections::HashMap;

use dishswipe_core::Dish;
use serde::Deserialize;
use serde_json::Value;

/// Highest numbered `strIngredientN` field in a meal record.
const INGREDIENT_SLOTS: usize = 20;

/// Response from `filter.php`, `lookup.php` and `list.php`.
#[derive(Debug, Deserialize)]
pub struct MealList<T> {
    /// Matching entries; `None` when the service returned `null` or omitted
    /// the key.
    pub meals: Option<Vec<T>>,
}

impl<T> MealList<T> {
    /// Consume the wrapper, treating a null array as empty.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

/// Abbreviated meal returned by `filter.php`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MealSummary {
    /// Meal identifier.
    #[serde(rename = "idMeal")]
    pub id: String,
    /// Display name.
    #[serde(rename = "strMeal", default)]
    pub name: String,
    /// Thumbnail URL.
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: String,
}

/// Full meal record returned by `lookup.php`.
///
/// Ingredient and measure slots are kept in `slots` because TheMealDB emits
/// them as twenty numbered keys whose values may be strings, empty strings or
/// `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct MealRecord {
    /// Meal identifier.
    #[serde(rename = "idMeal")]
    pub id: String,
    /// Display name.
    #[serde(rename = "strMeal", default)]
    pub name: String,
    /// Category tag.
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    /// Cuisine area tag.
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    /// Preparation instructions.
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    /// Thumbnail URL.
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    /// Comma-separated tags.
    #[serde(rename = "strTags", default)]
    pub tags: Option<String>,
    /// `YouTube` link; often an empty string.
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    /// Remaining keys, including `strIngredient1..=20`.
    #[serde(flatten)]
    pub slots: HashMap<String, Value>,
}

impl MealRecord {
    /// Ingredient names from `strIngredient1..=20` in slot order.
    ///
    /// Blank and null slots are skipped; the remaining names are returned
    /// verbatim and normalised by [`Dish::with_ingredients`].
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        (1..=INGREDIENT_SLOTS).filter_map(|slot| {
            self.slots
                .get(&format!("strIngredient{slot}"))
                .and_then(Value::as_str)
                .filter(|name| !name.trim().is_empty())
        })
    }

    /// Split `strTags` on commas, dropping blank entries.
    #[must_use]
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Convert the record into a [`Dish`].
    #[must_use]
    pub fn into_dish(self) -> Dish {
        let ingredients: Vec<String> = self.ingredient_names().map(str::to_owned).collect();
        let tags = self.tag_list();
        let video = self.youtube.filter(|link| !link.trim().is_empty());
        let dish = Dish::new(
            self.id,
            self.name,
            self.category.unwrap_or_default(),
            self.area.unwrap_or_default(),
        )
        .with_image(self.thumbnail.unwrap_or_default())
        .with_instructions(self.instructions.unwrap_or_default())
        .with_ingredients(ingredients)
        .with_tags(tags);
        match video {
            Some(link) => dish.with_video(link),
            None => dish,
        }
    }
}

/// Entry returned by `list.php?a=list`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AreaEntry {
    /// Area name, e.g. `"Japanese"`.
    #[serde(rename = "strArea")]
    pub area: String,
}

/// Response from `categories.php`.
#[derive(Debug, Deserialize)]
pub struct CategoryList {
    /// Category entries; `None` when the service returned `null`.
    #[serde(default)]
    pub categories: Option<Vec<CategoryEntry>>,
}

/// Entry returned by `categories.php`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryEntry {
    /// Category name, e.g. `"Seafood"`.
    #[serde(rename = "strCategory")]
    pub name: String,
    /// Thumbnail URL.
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: Option<String>,
    /// Free-text description.
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
}
