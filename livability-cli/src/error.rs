//! Error types emitted by the livability CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use livability_core::{LocationRecordError, ParseCategoryError, PreferenceError};
use livability_scorer::RankingError;
use thiserror::Error;

/// Errors emitted by the livability CLI.
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
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag name of the offending path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag name of the offending path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag name of the offending path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening an input file failed.
    #[error("failed to open {path:?}: {source}")]
    OpenInput {
        /// File that could not be opened.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// An input file did not contain the expected JSON.
    #[error("failed to parse JSON at {path:?}: {source}")]
    ParseInput {
        /// File that failed to decode.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The location collection violated a record invariant.
    #[error("locations in {path:?} are invalid: {source}")]
    InvalidLocations {
        /// File holding the collection.
        path: Utf8PathBuf,
        /// First violation found.
        #[source]
        source: LocationRecordError,
    },
    /// The preference profile was malformed.
    #[error("profile in {path:?} is invalid: {source}")]
    InvalidProfile {
        /// File holding the profile.
        path: Utf8PathBuf,
        /// First violation found.
        #[source]
        source: PreferenceError,
    },
    /// The `--sort-by` value named neither a category nor `score`.
    #[error("invalid sort key: {0}")]
    InvalidSortKey(#[from] ParseCategoryError),
    /// The scorer rejected the ranking request.
    #[error("ranking failed: {0}")]
    Ranking(#[from] RankingError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
