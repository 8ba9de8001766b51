//! Fetch command implementation for the Dishswipe CLI.

use std::collections::BTreeSet;
use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use dishswipe_core::{Dish, PreferenceStore, ProviderError};
use dishswipe_data::{JsonFilePreferenceStore, MealDbConfig, MealDbProvider};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_BASE_URL, ARG_CANDIDATES, ARG_PROFILE, CliError, DEFAULT_PROFILE_PATH,
    ENV_FETCH_CANDIDATES, write_json,
};

/// CLI arguments for the `fetch` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Download dishes for the cuisines selected in the profile \
                 (or every supported cuisine) and write them to a candidate \
                 file. Cuisines that fail to load are skipped.",
    about = "Build a candidate file from TheMealDB"
)]
#[ortho_config(prefix = "DISHSWIPE")]
pub(crate) struct FetchArgs {
    /// Path to the JSON preference profile.
    #[arg(long = ARG_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Where to write the JSON array of candidates.
    #[arg(long = ARG_CANDIDATES, value_name = "path")]
    #[serde(default)]
    pub(crate) candidates: Option<Utf8PathBuf>,
    /// Override TheMealDB base URL.
    #[arg(long = ARG_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) base_url: Option<String>,
}

impl FetchArgs {
    pub(crate) fn into_config(self) -> Result<FetchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        FetchConfig::try_from(merged)
    }
}

/// Resolved `fetch` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FetchConfig {
    pub(crate) profile: Utf8PathBuf,
    pub(crate) candidates: Utf8PathBuf,
    pub(crate) base_url: String,
}

impl TryFrom<FetchArgs> for FetchConfig {
    type Error = CliError;

    fn try_from(args: FetchArgs) -> Result<Self, Self::Error> {
        let candidates = args.candidates.ok_or(CliError::MissingArgument {
            field: ARG_CANDIDATES,
            env: ENV_FETCH_CANDIDATES,
        })?;
        let default_base_url = MealDbConfig::default().base_url;
        Ok(Self {
            profile: args
                .profile
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_PROFILE_PATH)),
            candidates,
            base_url: args.base_url.unwrap_or(default_base_url),
        })
    }
}

/// Supplies a candidate deck for a cuisine selection.
pub(crate) trait CandidateSource {
    fn gather(&self, selected: &BTreeSet<String>) -> Result<Vec<Dish>, ProviderError>;
}

impl CandidateSource for MealDbProvider {
    fn gather(&self, selected: &BTreeSet<String>) -> Result<Vec<Dish>, ProviderError> {
        Self::gather(self, selected)
    }
}

/// Builds the candidate source for the current fetch invocation.
pub(crate) trait CandidateSourceBuilder {
    fn build(&self, config: &FetchConfig) -> Result<Box<dyn CandidateSource>, CliError>;
}

pub(crate) struct MealDbSourceBuilder;

impl CandidateSourceBuilder for MealDbSourceBuilder {
    fn build(&self, config: &FetchConfig) -> Result<Box<dyn CandidateSource>, CliError> {
        let provider = MealDbProvider::with_config(MealDbConfig::new(config.base_url.clone()))
            .map_err(|source| CliError::BuildProvider {
                base_url: config.base_url.clone(),
                source,
            })?;
        Ok(Box::new(provider))
    }
}

/// Summary printed after a fetch.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FetchOutput {
    pub(crate) candidates: usize,
    pub(crate) path: Utf8PathBuf,
}

pub(crate) fn run_fetch(args: FetchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    run_fetch_with(args, &MealDbSourceBuilder, writer)
}

pub(crate) fn run_fetch_with(
    args: FetchArgs,
    builder: &dyn CandidateSourceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let output = execute_fetch(&config, builder)?;
    write_json(writer, &output)
}

pub(crate) fn execute_fetch(
    config: &FetchConfig,
    builder: &dyn CandidateSourceBuilder,
) -> Result<FetchOutput, CliError> {
    let profile = JsonFilePreferenceStore::new(config.profile.clone()).load()?;
    let source = builder.build(config)?;
    let deck = source.gather(&profile.selected_cuisines)?;

    let payload = serde_json::to_string_pretty(&deck).map_err(CliError::SerialiseOutput)?;
    dishswipe_fs::write_replacing(&config.candidates, &payload).map_err(|source| {
        CliError::WriteCandidates {
            path: config.candidates.clone(),
            source,
        }
    })?;

    Ok(FetchOutput {
        candidates: deck.len(),
        path: config.candidates.clone(),
    })
}
