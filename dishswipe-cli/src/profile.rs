//! Profile-mutating commands: `swipe`, `undo`, `reset` and `cuisines`.
//!
//! Every command opens a [`PreferenceSession`](dishswipe_core::PreferenceSession)
//! over the JSON profile so each change is written back immediately.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use dishswipe_core::{ActionKind, Clock};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_ACTION, ARG_CANDIDATES, ARG_DISH, ARG_PROFILE, CliError, DEFAULT_PROFILE_PATH,
    ENV_SWIPE_ACTION, ENV_SWIPE_CANDIDATES, ENV_SWIPE_DISH, load_candidates, open_session,
    write_json,
};

fn profile_or_default(profile: Option<Utf8PathBuf>) -> Utf8PathBuf {
    profile.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_PROFILE_PATH))
}

/// CLI arguments for the `swipe` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Record a decision on one dish from the candidate file. \
                 A super like also counts as a like.",
    about = "Like, reject or super like a dish"
)]
#[ortho_config(prefix = "DISHSWIPE")]
pub(crate) struct SwipeArgs {
    /// Path to the JSON preference profile.
    #[arg(long = ARG_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Path to the JSON array the dish is taken from.
    #[arg(long = ARG_CANDIDATES, value_name = "path")]
    #[serde(default)]
    pub(crate) candidates: Option<Utf8PathBuf>,
    /// Identifier of the swiped dish.
    #[arg(long = ARG_DISH, value_name = "id")]
    #[serde(default)]
    pub(crate) dish: Option<String>,
    /// One of `like`, `reject` or `superlike`.
    #[arg(long = ARG_ACTION, value_name = "action")]
    #[serde(default)]
    pub(crate) action: Option<ActionKind>,
}

impl SwipeArgs {
    pub(crate) fn into_config(self) -> Result<SwipeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SwipeConfig::try_from(merged)
    }
}

/// Resolved `swipe` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SwipeConfig {
    pub(crate) profile: Utf8PathBuf,
    pub(crate) candidates: Utf8PathBuf,
    pub(crate) dish: String,
    pub(crate) action: ActionKind,
}

impl TryFrom<SwipeArgs> for SwipeConfig {
    type Error = CliError;

    fn try_from(args: SwipeArgs) -> Result<Self, Self::Error> {
        let candidates = args.candidates.ok_or(CliError::MissingArgument {
            field: ARG_CANDIDATES,
            env: ENV_SWIPE_CANDIDATES,
        })?;
        let dish = args.dish.ok_or(CliError::MissingArgument {
            field: ARG_DISH,
            env: ENV_SWIPE_DISH,
        })?;
        let action = args.action.ok_or(CliError::MissingArgument {
            field: ARG_ACTION,
            env: ENV_SWIPE_ACTION,
        })?;
        Ok(Self {
            profile: profile_or_default(args.profile),
            candidates,
            dish,
            action,
        })
    }
}

/// Summary printed after a swipe.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SwipeOutput {
    pub(crate) dish: String,
    pub(crate) action: ActionKind,
    pub(crate) swipe_count: usize,
    pub(crate) ready_for_recommendations: bool,
}

pub(crate) fn run_swipe_with<C: Clock>(
    args: SwipeArgs,
    clock: C,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let output = execute_swipe(&config, clock)?;
    write_json(writer, &output)
}

pub(crate) fn execute_swipe<C: Clock>(
    config: &SwipeConfig,
    clock: C,
) -> Result<SwipeOutput, CliError> {
    let dish = load_candidates(&config.candidates)?
        .into_iter()
        .find(|candidate| candidate.id == config.dish)
        .ok_or_else(|| CliError::UnknownDish {
            id: config.dish.clone(),
            path: config.candidates.clone(),
        })?;
    let name = dish.name.clone();

    let mut session = open_session(&config.profile, clock)?;
    session.record_swipe(dish, config.action)?;

    let profile = session.profile();
    Ok(SwipeOutput {
        dish: name,
        action: config.action,
        swipe_count: profile.swipe_count(),
        ready_for_recommendations: profile.has_enough_swipes(),
    })
}

/// CLI arguments for the `undo` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Reverse the most recent swipe and print the restored dish")]
#[ortho_config(prefix = "DISHSWIPE")]
pub(crate) struct UndoArgs {
    /// Path to the JSON preference profile.
    #[arg(long = ARG_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
}

impl UndoArgs {
    fn into_profile_path(self) -> Result<Utf8PathBuf, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(profile_or_default(merged.profile))
    }
}

pub(crate) fn run_undo_with<C: Clock>(
    args: UndoArgs,
    clock: C,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let path = args.into_profile_path()?;
    if let Some(name) = execute_undo(&path, clock)? {
        writeln!(writer, "{name}").map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

/// Undo the last swipe, returning the restored dish name.
pub(crate) fn execute_undo<C: Clock>(
    path: &Utf8Path,
    clock: C,
) -> Result<Option<String>, CliError> {
    let mut session = open_session(path, clock)?;
    Ok(session.undo()?.map(|dish| dish.name))
}

/// CLI arguments for the `reset` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Forget every swipe and cuisine choice")]
#[ortho_config(prefix = "DISHSWIPE")]
pub(crate) struct ResetArgs {
    /// Path to the JSON preference profile.
    #[arg(long = ARG_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
}

pub(crate) fn run_reset_with<C: Clock>(args: ResetArgs, clock: C) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    execute_reset(&profile_or_default(merged.profile), clock)
}

pub(crate) fn execute_reset<C: Clock>(path: &Utf8Path, clock: C) -> Result<(), CliError> {
    open_session(path, clock)?.reset()?;
    Ok(())
}

/// CLI arguments for the `cuisines` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Replace the cuisine filter used by `fetch`. Pass no areas \
                 to fetch every supported cuisine.",
    about = "Choose cuisines and print the selection"
)]
#[ortho_config(prefix = "DISHSWIPE")]
pub(crate) struct CuisinesArgs {
    /// Path to the JSON preference profile.
    #[arg(long = ARG_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Cuisine areas, e.g. `Thai Filipino`.
    #[arg(value_name = "area")]
    #[serde(default)]
    pub(crate) areas: Vec<String>,
}

pub(crate) fn run_cuisines_with<C: Clock>(
    args: CuisinesArgs,
    clock: C,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let selected = execute_cuisines(&profile_or_default(merged.profile), merged.areas, clock)?;
    write_json(writer, &selected)
}

/// Store the cuisine filter and return it in sorted order.
pub(crate) fn execute_cuisines<C: Clock>(
    path: &Utf8Path,
    areas: Vec<String>,
    clock: C,
) -> Result<Vec<String>, CliError> {
    let mut session = open_session(path, clock)?;
    session.set_selected_cuisines(areas)?;
    Ok(session.profile().selected_cuisines.iter().cloned().collect())
}
