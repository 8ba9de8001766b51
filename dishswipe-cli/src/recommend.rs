//! Recommend command implementation for the Dishswipe CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use dishswipe_core::{
    Clock, Dish, FixedClock, MIN_SWIPES_FOR_RECOMMENDATIONS, PreferenceProfile, PreferenceStore,
    ScoredCandidate, SystemClock,
};
use dishswipe_data::JsonFilePreferenceStore;
use dishswipe_scorer::RecommendationEngine;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CANDIDATES, ARG_HOUR, ARG_LIMIT, ARG_PROFILE, CliError, DEFAULT_PROFILE_PATH,
    ENV_RECOMMEND_CANDIDATES, load_candidates, write_json,
};

/// Number of recommendations printed when no `--limit` is given.
pub(crate) const DEFAULT_LIMIT: usize = 6;

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the dishes in a candidate file against the stored \
                 preference profile. Dishes already swiped are skipped. \
                 Pin --hour to score as if it were that time of day.",
    about = "Print ranked recommendations as JSON"
)]
#[ortho_config(prefix = "DISHSWIPE")]
pub(crate) struct RecommendArgs {
    /// Path to the JSON preference profile.
    #[arg(long = ARG_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Path to a JSON array of candidate dishes.
    #[arg(long = ARG_CANDIDATES, value_name = "path")]
    #[serde(default)]
    pub(crate) candidates: Option<Utf8PathBuf>,
    /// Maximum number of recommendations.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Local hour (0-23) used for time-of-day scoring.
    #[arg(long = ARG_HOUR, value_name = "hour")]
    #[serde(default)]
    pub(crate) hour: Option<u32>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) profile: Utf8PathBuf,
    pub(crate) candidates: Utf8PathBuf,
    pub(crate) limit: usize,
    pub(crate) clock: Option<FixedClock>,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let candidates = args.candidates.ok_or(CliError::MissingArgument {
            field: ARG_CANDIDATES,
            env: ENV_RECOMMEND_CANDIDATES,
        })?;
        let clock = args
            .hour
            .map(|hour| FixedClock::at_hour(hour).ok_or(CliError::InvalidHour { hour }))
            .transpose()?;
        Ok(Self {
            profile: args
                .profile
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_PROFILE_PATH)),
            candidates,
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
            clock,
        })
    }
}

/// One printed recommendation.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecommendationOutput {
    #[serde(flatten)]
    pub(crate) candidate: ScoredCandidate,
    pub(crate) match_percentage: u8,
}

impl From<ScoredCandidate> for RecommendationOutput {
    fn from(candidate: ScoredCandidate) -> Self {
        Self {
            match_percentage: candidate.match_percentage(),
            candidate,
        }
    }
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let output = execute_recommend(&config)?;
    write_json(writer, &output)
}

pub(crate) fn execute_recommend(
    config: &RecommendConfig,
) -> Result<Vec<RecommendationOutput>, CliError> {
    let candidates = load_candidates(&config.candidates)?;
    let profile = JsonFilePreferenceStore::new(config.profile.clone()).load()?;
    let ranked = match config.clock {
        Some(clock) => rank(clock, &candidates, &profile, config.limit),
        None => rank(SystemClock, &candidates, &profile, config.limit),
    };
    Ok(ranked.into_iter().map(RecommendationOutput::from).collect())
}

fn rank<C: Clock>(
    clock: C,
    candidates: &[Dish],
    profile: &PreferenceProfile,
    limit: usize,
) -> Vec<ScoredCandidate> {
    if !profile.has_enough_swipes() {
        info!(
            "only {} swipes recorded; recommendations improve after {}",
            profile.swipe_count(),
            MIN_SWIPES_FOR_RECOMMENDATIONS
        );
    }
    RecommendationEngine::with_clock(clock).generate(candidates, profile, limit)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
