//! Fixed word lists consulted by the signals.
//!
//! Ingredient lists are matched as lowercase substrings; category lists are
//! matched exactly against `Dish::category`.

/// Pantry staples ignored when comparing ingredients.
pub const STAPLE_INGREDIENTS: &[&str] = &[
    "water",
    "salt",
    "pepper",
    "oil",
    "sugar",
    "flour",
    "butter",
    "garlic",
    "onion",
    "olive oil",
    "vegetable oil",
    "milk",
    "egg",
    "eggs",
    "sauce",
    "vinegar",
    "soy sauce",
];

/// Ingredient keywords that mark a dish as containing meat.
pub const MEAT_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "lamb", "bacon", "turkey", "duck", "ham", "sausage",
];

/// Ingredient keywords that mark a dish as containing seafood.
pub const SEAFOOD_KEYWORDS: &[&str] = &[
    "fish", "salmon", "tuna", "shrimp", "prawns", "crab", "lobster", "cod", "sardines",
];

/// Categories treated as vegetarian regardless of ingredients.
pub const VEGETARIAN_CATEGORIES: &[&str] = &["Vegetarian", "Vegan", "Side", "Pasta", "Starter"];

/// Report whether `ingredient` carries signal beyond pantry staples.
///
/// `ingredient` must already be lowercase.
#[must_use]
pub fn is_significant(ingredient: &str) -> bool {
    !STAPLE_INGREDIENTS
        .iter()
        .any(|staple| ingredient.contains(staple))
}

/// Report whether any ingredient contains any of `keywords`, ignoring case.
pub(crate) fn mentions_any<S: AsRef<str>>(ingredients: &[S], keywords: &[&str]) -> bool {
    ingredients.iter().any(|ingredient| {
        let lower = ingredient.as_ref().to_lowercase();
        keywords.iter().any(|keyword| lower.contains(keyword))
    })
}
