//! Rank command implementation for the livability CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use livability_core::SortKey;
use livability_scorer::rank;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{load_locations, load_profile, require_file};
use crate::output::write_json;
use crate::{
    ARG_LOCATIONS, ARG_PROFILE, ARG_SORT_BY, CliError, ENV_RANK_LOCATIONS, ENV_RANK_PROFILE,
    ENV_RANK_SORT_BY,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    long_about = "Rank every location by one category, or the top five by \
                 personal preference when sorting by `score`. Paths can come \
                 from CLI flags, configuration files, or environment \
                 variables.",
    about = "Rank locations by a category or by preference score"
)]
#[ortho_config(prefix = "LIVABILITY")]
pub(crate) struct RankArgs {
    /// Path to a JSON array of location records.
    #[arg(long = ARG_LOCATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) locations: Option<Utf8PathBuf>,
    /// Category identifier (e.g. `price`, `crime_rate`) or `score`.
    #[arg(long = ARG_SORT_BY, value_name = "key")]
    #[serde(default)]
    pub(crate) sort_by: Option<String>,
    /// Path to a JSON preference profile; required when sorting by `score`.
    #[arg(long = ARG_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    /// Path to the location collection.
    pub(crate) locations: Utf8PathBuf,
    /// What to rank by.
    pub(crate) sort_by: SortKey,
    /// Path to the preference profile, if one was given.
    pub(crate) profile: Option<Utf8PathBuf>,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_file(&self.locations, ARG_LOCATIONS)?;
        if let Some(profile) = &self.profile {
            require_file(profile, ARG_PROFILE)?;
        }
        Ok(())
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let locations = args.locations.ok_or(CliError::MissingArgument {
            field: ARG_LOCATIONS,
            env: ENV_RANK_LOCATIONS,
        })?;
        let sort_by: SortKey = args
            .sort_by
            .ok_or(CliError::MissingArgument {
                field: ARG_SORT_BY,
                env: ENV_RANK_SORT_BY,
            })?
            .parse()?;
        if sort_by == SortKey::Preference && args.profile.is_none() {
            return Err(CliError::MissingArgument {
                field: ARG_PROFILE,
                env: ENV_RANK_PROFILE,
            });
        }
        Ok(Self {
            locations,
            sort_by,
            profile: args.profile,
        })
    }
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_rank(&config, writer)
}

pub(crate) fn execute_rank(config: &RankConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    config.validate_sources()?;
    let locations = load_locations(&config.locations)?;
    let profile = config.profile.as_deref().map(load_profile).transpose()?;
    let ranking = rank(&locations, config.sort_by, profile.as_ref())?;
    log::info!("ranked {} locations by {}", ranking.len(), config.sort_by);
    write_json(writer, &ranking)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
