//! Error types emitted by the Dishswipe CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use dishswipe_core::{ProviderError, StoreError};
use dishswipe_data::ProviderBuildError;
use thiserror::Error;

/// Errors emitted by the Dishswipe CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The pinned hour is outside `0..24`.
    #[error("hour {hour} is outside 0..24")]
    InvalidHour { hour: u32 },
    /// Reading the candidate file failed.
    #[error("failed to read candidates from {path:?}: {source}")]
    ReadCandidates {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The candidate file is not a JSON array of dishes.
    #[error("failed to parse candidates JSON at {path:?}: {source}")]
    ParseCandidates {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Writing the candidate file failed.
    #[error("failed to write candidates to {path:?}: {source}")]
    WriteCandidates {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The swiped dish is not in the candidate file.
    #[error("dish {id} is not in {path:?}")]
    UnknownDish { id: String, path: Utf8PathBuf },
    /// Loading or saving the preference profile failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Fetching candidates from the recipe source failed.
    #[error("failed to fetch candidates: {0}")]
    Provider(#[from] ProviderError),
    /// Constructing the recipe provider failed.
    #[error("failed to build recipe provider for {base_url:?}: {source}")]
    BuildProvider {
        base_url: String,
        #[source]
        source: ProviderBuildError,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
