//! Dish records as presented on swipe cards.
//!
//! A [`Dish`] is an immutable snapshot of a recipe. Profiles store full
//! snapshots rather than identifiers so scoring keeps working even if the
//! upstream catalogue later changes.

use serde::{Deserialize, Serialize};

/// A single recipe candidate with cuisine and category tags.
///
/// `area` and `category` are free-form strings; unknown values are scored
/// neutrally rather than rejected. Ingredient names are stored trimmed and
/// lowercased, in source order, with duplicates preserved.
///
/// # Examples
/// ```
/// use dishswipe_core::Dish;
///
/// let dish = Dish::new("52982", "Spaghetti alla Carbonara", "Pasta", "Italian")
///     .with_ingredients(["Spaghetti", " Egg Yolks ", "Pecorino", ""]);
///
/// assert_eq!(dish.id, "52982");
/// assert_eq!(dish.ingredients, vec!["spaghetti", "egg yolks", "pecorino"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    /// Identifier, stable and unique across the candidate universe.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category tag, e.g. `"Pasta"` or `"Seafood"`.
    pub category: String,
    /// Cuisine or area tag, e.g. `"Italian"`.
    pub area: String,
    /// Image reference.
    #[serde(default)]
    pub image: String,
    /// Lowercase ingredient names in source order.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Free-text preparation instructions.
    #[serde(default)]
    pub instructions: String,
    /// Source tags; may be empty.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional video reference.
    #[serde(default, alias = "youtubeUrl", skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

impl Dish {
    /// Construct a dish with the identifying fields and empty details.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        area: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            area: area.into(),
            image: String::new(),
            ingredients: Vec::new(),
            instructions: String::new(),
            tags: Vec::new(),
            video: None,
        }
    }

    /// Replace the ingredient list, normalising each entry.
    ///
    /// Blank entries are dropped; duplicates are kept.
    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ingredients = ingredients
            .into_iter()
            .filter_map(|raw| normalise_ingredient(raw.as_ref()))
            .collect();
        self
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the preparation instructions.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Replace the tag list.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the video reference.
    #[must_use]
    pub fn with_video(mut self, video: impl Into<String>) -> Self {
        self.video = Some(video.into());
        self
    }
}

/// Trim and lowercase an ingredient name, returning `None` when blank.
///
/// # Examples
/// ```
/// use dishswipe_core::dish::normalise_ingredient;
///
/// assert_eq!(normalise_ingredient("  Soy Sauce "), Some("soy sauce".to_owned()));
/// assert_eq!(normalise_ingredient("   "), None);
/// ```
#[must_use]
pub fn normalise_ingredient(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
