//! Command-line interface for Dishswipe.
//!
//! Each subcommand works against a JSON preference profile on disk. Ranking
//! and swiping read candidates from a JSON array of dishes, which `fetch`
//! can populate from TheMealDB.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use dishswipe_core::{Dish, PreferenceSession, SystemClock};
use dishswipe_data::JsonFilePreferenceStore;
use serde::Serialize;

mod error;
mod fetch;
mod profile;
mod recommend;

pub use error::CliError;

use fetch::FetchArgs;
use profile::{CuisinesArgs, ResetArgs, SwipeArgs, UndoArgs};
use recommend::RecommendArgs;

pub(crate) const ARG_PROFILE: &str = "profile";
pub(crate) const ARG_CANDIDATES: &str = "candidates";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_HOUR: &str = "hour";
pub(crate) const ARG_DISH: &str = "dish";
pub(crate) const ARG_ACTION: &str = "action";
pub(crate) const ARG_BASE_URL: &str = "base-url";
pub(crate) const ENV_RECOMMEND_CANDIDATES: &str = "DISHSWIPE_CMDS_RECOMMEND_CANDIDATES";
pub(crate) const ENV_SWIPE_CANDIDATES: &str = "DISHSWIPE_CMDS_SWIPE_CANDIDATES";
pub(crate) const ENV_SWIPE_DISH: &str = "DISHSWIPE_CMDS_SWIPE_DISH";
pub(crate) const ENV_SWIPE_ACTION: &str = "DISHSWIPE_CMDS_SWIPE_ACTION";
pub(crate) const ENV_FETCH_CANDIDATES: &str = "DISHSWIPE_CMDS_FETCH_CANDIDATES";

/// Profile file used when no `--profile` is given.
pub const DEFAULT_PROFILE_PATH: &str = "dishswipe-profile.json";

/// Run the Dishswipe CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Recommend(args) => recommend::run_recommend_with(args, &mut stdout),
        Command::Swipe(args) => profile::run_swipe_with(args, SystemClock, &mut stdout),
        Command::Undo(args) => profile::run_undo_with(args, SystemClock, &mut stdout),
        Command::Reset(args) => profile::run_reset_with(args, SystemClock),
        Command::Cuisines(args) => profile::run_cuisines_with(args, SystemClock, &mut stdout),
        Command::Fetch(args) => fetch::run_fetch(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "dishswipe",
    about = "Swipe through dishes and get recommendations that learn your taste",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank unseen candidates against the stored profile.
    Recommend(RecommendArgs),
    /// Record a like, reject or super like.
    Swipe(SwipeArgs),
    /// Reverse the most recent swipe.
    Undo(UndoArgs),
    /// Replace the profile with an empty one.
    Reset(ResetArgs),
    /// Choose which cuisines to fetch.
    Cuisines(CuisinesArgs),
    /// Download a candidate deck from TheMealDB.
    Fetch(FetchArgs),
}

/// Open a preference session over the JSON profile at `path`.
pub(crate) fn open_session<C: dishswipe_core::Clock>(
    path: &Utf8Path,
    clock: C,
) -> Result<PreferenceSession<JsonFilePreferenceStore, C>, CliError> {
    Ok(PreferenceSession::open(
        JsonFilePreferenceStore::new(path),
        clock,
    )?)
}

/// Load a JSON array of dishes.
pub(crate) fn load_candidates(path: &Utf8Path) -> Result<Vec<Dish>, CliError> {
    let contents = dishswipe_fs::read_utf8(path).map_err(|source| CliError::ReadCandidates {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::ParseCandidates {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
