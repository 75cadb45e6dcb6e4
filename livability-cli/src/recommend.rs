//! Recommend command implementation for the livability CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use livability_scorer::rank_by_preference;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{load_locations, load_profile, require_file};
use crate::output::write_json;
use crate::{ARG_LOCATIONS, ARG_PROFILE, CliError, ENV_RECOMMEND_LOCATIONS, ENV_RECOMMEND_PROFILE};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Score every location against a preference profile and print \
                 the best five with their per-category sub-scores.",
    about = "Recommend the best locations for a preference profile"
)]
#[ortho_config(prefix = "LIVABILITY")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON array of location records.
    #[arg(long = ARG_LOCATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) locations: Option<Utf8PathBuf>,
    /// Path to a JSON preference profile.
    #[arg(long = ARG_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
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
    pub(crate) locations: Utf8PathBuf,
    pub(crate) profile: Utf8PathBuf,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let locations = args.locations.ok_or(CliError::MissingArgument {
            field: ARG_LOCATIONS,
            env: ENV_RECOMMEND_LOCATIONS,
        })?;
        let profile = args.profile.ok_or(CliError::MissingArgument {
            field: ARG_PROFILE,
            env: ENV_RECOMMEND_PROFILE,
        })?;
        Ok(Self { locations, profile })
    }
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_file(&config.locations, ARG_LOCATIONS)?;
    require_file(&config.profile, ARG_PROFILE)?;
    let locations = load_locations(&config.locations)?;
    let profile = load_profile(&config.profile)?;
    let recommended = rank_by_preference(&locations, &profile)?;
    log::info!(
        "recommended {} of {} locations",
        recommended.len(),
        locations.len()
    );
    write_json(writer, &recommended)
}
