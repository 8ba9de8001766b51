//! Unit tests for the fetch command using an in-memory recipe source.

use std::collections::BTreeSet;

use super::helpers::{Workspace, evening};
use super::*;
use crate::fetch::{
    CandidateSource, CandidateSourceBuilder, FetchArgs, FetchConfig, execute_fetch,
};
use crate::profile::execute_cuisines;
use dishswipe_core::test_support::{MemoryDishProvider, sample_dishes};
use dishswipe_core::{Dish, ProviderError};
use dishswipe_data::gather_candidates;
use rstest::rstest;

struct MemorySource(MemoryDishProvider);

impl CandidateSource for MemorySource {
    fn gather(&self, selected: &BTreeSet<String>) -> Result<Vec<Dish>, ProviderError> {
        gather_candidates(&self.0, selected)
    }
}

struct MemorySourceBuilder {
    failing: Option<&'static str>,
}

impl CandidateSourceBuilder for MemorySourceBuilder {
    fn build(&self, _config: &FetchConfig) -> Result<Box<dyn CandidateSource>, CliError> {
        let provider = MemoryDishProvider::with_dishes(sample_dishes());
        let provider = match self.failing {
            Some(area) => provider.failing_area(area),
            None => provider,
        };
        Ok(Box::new(MemorySource(provider)))
    }
}

fn fetch_config(workspace: &Workspace) -> FetchConfig {
    FetchConfig {
        profile: workspace.profile.clone(),
        candidates: workspace.candidates.clone(),
        base_url: "http://meals.test".to_owned(),
    }
}

#[rstest]
fn fetch_config_defaults_to_public_api() {
    let args = FetchArgs {
        candidates: Some("deck.json".into()),
        ..FetchArgs::default()
    };
    let config = FetchConfig::try_from(args).expect("config should build");
    assert_eq!(config.base_url, dishswipe_data::mealdb::DEFAULT_BASE_URL);
    assert_eq!(config.profile, DEFAULT_PROFILE_PATH);
}

#[rstest]
fn fetch_writes_the_selected_cuisines() {
    let workspace = Workspace::new();
    execute_cuisines(&workspace.profile, vec!["Italian".to_owned()], evening())
        .expect("cuisines succeed");

    let output = execute_fetch(&fetch_config(&workspace), &MemorySourceBuilder { failing: None })
        .expect("fetch succeeds");

    assert_eq!(output.candidates, 2);
    let deck = load_candidates(&workspace.candidates).expect("candidate file readable");
    assert!(deck.iter().all(|dish| dish.area == "Italian"));
}

#[rstest]
fn fetch_skips_failing_cuisines() {
    let workspace = Workspace::new();

    let output = execute_fetch(
        &fetch_config(&workspace),
        &MemorySourceBuilder {
            failing: Some("Japanese"),
        },
    )
    .expect("fetch succeeds");

    assert_eq!(output.candidates, 4);
}

#[rstest]
fn fetch_fails_when_every_cuisine_fails() {
    let workspace = Workspace::new();
    execute_cuisines(&workspace.profile, vec!["Thai".to_owned()], evening())
        .expect("cuisines succeed");

    let err = execute_fetch(
        &fetch_config(&workspace),
        &MemorySourceBuilder {
            failing: Some("Thai"),
        },
    )
    .expect_err("fetch should fail");

    match err {
        CliError::Provider(ProviderError::AllPartitionsFailed { attempted }) => {
            assert_eq!(attempted, 1);
        }
        other => panic!("expected AllPartitionsFailed, found {other:?}"),
    }
    assert!(!workspace.candidates.exists());
}
