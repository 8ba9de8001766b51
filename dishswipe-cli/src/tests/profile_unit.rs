//! Unit tests for the profile-mutating commands.

use super::helpers::{Workspace, evening};
use super::*;
use crate::profile::{
    SwipeArgs, SwipeConfig, UndoArgs, execute_cuisines, execute_reset, execute_swipe,
    execute_undo, run_undo_with,
};
use dishswipe_core::test_support::sample_dishes;
use dishswipe_core::{ActionKind, Clock, PreferenceProfile, PreferenceStore};
use dishswipe_data::JsonFilePreferenceStore;
use rstest::rstest;

fn swipe_config(workspace: &Workspace, dish: &str, action: ActionKind) -> SwipeConfig {
    SwipeConfig {
        profile: workspace.profile.clone(),
        candidates: workspace.candidates.clone(),
        dish: dish.to_owned(),
        action,
    }
}

fn stored_profile(workspace: &Workspace) -> PreferenceProfile {
    JsonFilePreferenceStore::new(workspace.profile.clone())
        .load()
        .expect("profile should load")
}

#[rstest]
#[case::candidates(SwipeArgs { dish: Some("1".into()), action: Some(ActionKind::Like), ..SwipeArgs::default() }, ARG_CANDIDATES)]
#[case::dish(SwipeArgs { candidates: Some("deck.json".into()), action: Some(ActionKind::Like), ..SwipeArgs::default() }, ARG_DISH)]
#[case::action(SwipeArgs { candidates: Some("deck.json".into()), dish: Some("1".into()), ..SwipeArgs::default() }, ARG_ACTION)]
fn converting_swipe_reports_missing_fields(
    #[case] args: SwipeArgs,
    #[case] expected_field: &'static str,
) {
    let err = SwipeConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument { field, .. } => assert_eq!(field, expected_field),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn super_like_is_persisted_in_both_collections() {
    let workspace = Workspace::with_sample_candidates();

    let output = execute_swipe(
        &swipe_config(&workspace, "52772", ActionKind::SuperLike),
        evening(),
    )
    .expect("swipe succeeds");

    assert_eq!(output.dish, "Teriyaki Chicken Casserole");
    assert_eq!(output.swipe_count, 2);
    assert!(!output.ready_for_recommendations);
    let profile = stored_profile(&workspace);
    assert_eq!(profile.liked.len(), 1);
    assert_eq!(profile.super_liked.len(), 1);
    assert_eq!(profile.history.len(), 1);
}

#[rstest]
fn swiping_an_unknown_dish_fails_without_writing() {
    let workspace = Workspace::with_sample_candidates();

    let err = execute_swipe(&swipe_config(&workspace, "missing", ActionKind::Like), evening())
        .expect_err("unknown dish should fail");

    match err {
        CliError::UnknownDish { id, .. } => assert_eq!(id, "missing"),
        other => panic!("expected UnknownDish, found {other:?}"),
    }
    assert!(!workspace.profile.exists());
}

#[rstest]
fn undo_restores_the_last_swipe() {
    let workspace = Workspace::with_sample_candidates();
    for dish in sample_dishes().iter().take(3) {
        execute_swipe(&swipe_config(&workspace, &dish.id, ActionKind::Like), evening())
            .expect("swipe succeeds");
    }

    let restored = execute_undo(&workspace.profile, evening()).expect("undo succeeds");

    assert_eq!(restored.as_deref(), Some("Teriyaki Chicken Casserole"));
    let profile = stored_profile(&workspace);
    assert_eq!(profile.liked.len(), 2);
    assert_eq!(profile.history.len(), 2);
}

#[rstest]
fn undo_with_no_history_prints_nothing() {
    let workspace = Workspace::new();
    let args = UndoArgs {
        profile: Some(workspace.profile.clone()),
    };
    let mut stdout = Vec::new();

    run_undo_with(args, evening(), &mut stdout).expect("undo succeeds");

    assert!(stdout.is_empty());
    assert!(!workspace.profile.exists(), "an empty undo must not write");
}

#[rstest]
fn reset_clears_swipes_and_cuisines() {
    let workspace = Workspace::with_sample_candidates();
    execute_swipe(&swipe_config(&workspace, "52814", ActionKind::Reject), evening())
        .expect("swipe succeeds");
    execute_cuisines(&workspace.profile, vec!["Thai".to_owned()], evening())
        .expect("cuisines succeed");

    execute_reset(&workspace.profile, evening()).expect("reset succeeds");

    let profile = stored_profile(&workspace);
    assert!(profile.rejected.is_empty());
    assert!(profile.history.is_empty());
    assert!(profile.selected_cuisines.is_empty());
    assert_eq!(
        profile.last_session_date,
        evening().today(),
        "reset dates the new profile today"
    );
}

#[rstest]
fn cuisines_are_stored_sorted_and_deduplicated() {
    let workspace = Workspace::new();

    let selected = execute_cuisines(
        &workspace.profile,
        vec!["Thai".to_owned(), "Filipino".to_owned(), "Thai".to_owned()],
        evening(),
    )
    .expect("cuisines succeed");

    assert_eq!(selected, vec!["Filipino", "Thai"]);
    assert_eq!(stored_profile(&workspace).selected_cuisines.len(), 2);
}
