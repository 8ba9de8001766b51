//! Candidate deck assembly across cuisine partitions.
//!
//! A deck is built by fetching one partition per cuisine area. Partitions
//! fail independently: a failed area is logged and skipped, and gathering
//! fails only when every area fails.

use std::collections::{BTreeSet, HashSet};

use dishswipe_core::{Dish, DishProvider, ProviderError};
use log::{debug, warn};

/// Cuisine areas offered to users, in fetch order.
pub const ALLOWED_AREAS: [&str; 7] = [
    "American",
    "Chinese",
    "Italian",
    "Japanese",
    "Thai",
    "Vietnamese",
    "Filipino",
];

/// Areas to fetch for a cuisine selection.
///
/// Returns the allowed areas named in `selected`, in [`ALLOWED_AREAS`] order,
/// or every allowed area when the selection is empty or names none of them.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use dishswipe_data::areas_to_fetch;
///
/// let selected = BTreeSet::from(["Thai".to_owned(), "Martian".to_owned()]);
/// assert_eq!(areas_to_fetch(&selected), vec!["Thai"]);
/// assert_eq!(areas_to_fetch(&BTreeSet::new()).len(), 7);
/// ```
#[must_use]
pub fn areas_to_fetch(selected: &BTreeSet<String>) -> Vec<&'static str> {
    let chosen: Vec<&'static str> = ALLOWED_AREAS
        .into_iter()
        .filter(|area| selected.contains(*area))
        .collect();
    if chosen.is_empty() {
        ALLOWED_AREAS.to_vec()
    } else {
        chosen
    }
}

/// Combine per-area fetch results into a single deck.
///
/// Successful partitions are concatenated in `areas` order, deduplicated by
/// identifier (first occurrence wins) and restricted to [`ALLOWED_AREAS`].
/// Failed partitions are logged and skipped.
///
/// # Errors
///
/// Returns [`ProviderError::AllPartitionsFailed`] when `areas` is non-empty
/// and every partition failed.
pub fn merge_partitions<I>(areas: &[&str], partitions: I) -> Result<Vec<Dish>, ProviderError>
where
    I: IntoIterator<Item = Result<Vec<Dish>, ProviderError>>,
{
    let mut seen = HashSet::new();
    let mut deck = Vec::new();
    let mut failures = 0_usize;

    for (area, partition) in areas.iter().zip(partitions) {
        match partition {
            Ok(dishes) => deck.extend(
                dishes
                    .into_iter()
                    .filter(|dish| ALLOWED_AREAS.contains(&dish.area.as_str()))
                    .filter(|dish| seen.insert(dish.id.clone())),
            ),
            Err(err) => {
                warn!("skipping {area} dishes: {err}");
                failures += 1;
            }
        }
    }

    if !areas.is_empty() && failures == areas.len() {
        return Err(ProviderError::AllPartitionsFailed {
            attempted: areas.len(),
        });
    }
    debug!(
        "gathered {} candidates from {} of {} areas",
        deck.len(),
        areas.len() - failures,
        areas.len()
    );
    Ok(deck)
}

/// Fetch a deck from any [`DishProvider`], one area at a time.
///
/// [`MealDbProvider::gather`](crate::MealDbProvider::gather) performs the
/// same merge with the areas fetched concurrently.
///
/// # Errors
///
/// Returns [`ProviderError::AllPartitionsFailed`] when no area loads.
pub fn gather_candidates<P>(
    provider: &P,
    selected: &BTreeSet<String>,
) -> Result<Vec<Dish>, ProviderError>
where
    P: DishProvider + ?Sized,
{
    let areas = areas_to_fetch(selected);
    let partitions = areas.iter().map(|area| provider.dishes_by_area(area));
    merge_partitions(&areas, partitions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dishswipe_core::test_support::{MemoryDishProvider, dish, sample_dishes};
    use rstest::rstest;

    fn selection(areas: &[&str]) -> BTreeSet<String> {
        areas.iter().map(|area| (*area).to_owned()).collect()
    }

    #[rstest]
    #[case::empty(&[], 7)]
    #[case::subset(&["Italian", "Thai"], 2)]
    #[case::unknown_only(&["Martian"], 7)]
    #[case::mixed(&["Martian", "Filipino"], 1)]
    fn selects_areas(#[case] selected: &[&str], #[case] expected: usize) {
        assert_eq!(areas_to_fetch(&selection(selected)).len(), expected);
    }

    #[rstest]
    fn keeps_allowed_order() {
        let areas = areas_to_fetch(&selection(&["Thai", "American"]));
        assert_eq!(areas, vec!["American", "Thai"]);
    }

    #[rstest]
    fn first_duplicate_wins() {
        let first = dish("1", "Adobo", "Chicken", "Filipino", &["chicken"]);
        let second = dish("1", "Adobo Remix", "Chicken", "Filipino", &["pork"]);
        let deck = merge_partitions(
            &["Filipino", "Thai"],
            [Ok(vec![first.clone()]), Ok(vec![second])],
        )
        .expect("merge succeeds");
        assert_eq!(deck, vec![first]);
    }

    #[rstest]
    fn drops_disallowed_areas() {
        let deck = merge_partitions(
            &["Thai"],
            [Ok(vec![
                dish("1", "Green Curry", "Chicken", "Thai", &[]),
                dish("2", "Haggis", "Lamb", "British", &[]),
            ])],
        )
        .expect("merge succeeds");
        assert_eq!(deck.len(), 1);
    }

    #[rstest]
    fn skips_failed_partitions() {
        let provider = MemoryDishProvider::with_dishes(sample_dishes()).failing_area("Japanese");
        let deck = gather_candidates(&provider, &BTreeSet::new()).expect("partial success");
        assert!(deck.iter().all(|dish| dish.area != "Japanese"));
        assert!(deck.iter().any(|dish| dish.area == "Italian"));
    }

    #[rstest]
    fn all_failures_surface() {
        let provider = MemoryDishProvider::with_dishes(sample_dishes()).failing_area("Thai");
        let err = gather_candidates(&provider, &selection(&["Thai"])).expect_err("should fail");
        assert_eq!(err, ProviderError::AllPartitionsFailed { attempted: 1 });
    }
}
