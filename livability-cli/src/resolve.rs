//! Resolve command implementation for the livability CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use livability_matcher::{LocationMatch, match_location};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{load_locations, require_file};
use crate::output::write_json;
use crate::{ARG_LOCATIONS, ARG_QUERY, CliError, ENV_RESOLVE_LOCATIONS, ENV_RESOLVE_QUERY};

/// CLI arguments for the `resolve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "resolve",
    long_about = "Resolve a free-text search query to a canonical location \
                 name using exact, prefix, substring, and edit-distance \
                 matching. A query without a match prints `null`.",
    about = "Resolve a search query to a location name"
)]
#[ortho_config(prefix = "LIVABILITY")]
pub(crate) struct ResolveArgs {
    /// Free-text query to resolve.
    #[arg(value_name = "query")]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Path to a JSON array of location records.
    #[arg(long = ARG_LOCATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) locations: Option<Utf8PathBuf>,
}

impl ResolveArgs {
    pub(crate) fn into_config(self) -> Result<ResolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ResolveConfig::try_from(merged)
    }
}

/// Resolved `resolve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolveConfig {
    pub(crate) query: String,
    pub(crate) locations: Utf8PathBuf,
}

impl TryFrom<ResolveArgs> for ResolveConfig {
    type Error = CliError;

    fn try_from(args: ResolveArgs) -> Result<Self, Self::Error> {
        let query = args.query.ok_or(CliError::MissingArgument {
            field: ARG_QUERY,
            env: ENV_RESOLVE_QUERY,
        })?;
        let locations = args.locations.ok_or(CliError::MissingArgument {
            field: ARG_LOCATIONS,
            env: ENV_RESOLVE_LOCATIONS,
        })?;
        Ok(Self { query, locations })
    }
}

/// Printed result of a `resolve` invocation.
#[derive(Debug, Serialize)]
struct Resolution<'a> {
    query: &'a str,
    #[serde(rename = "match")]
    found: Option<LocationMatch<'a>>,
}

pub(crate) fn run_resolve_with(args: ResolveArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_file(&config.locations, ARG_LOCATIONS)?;
    let locations = load_locations(&config.locations)?;
    let found = match_location(
        &config.query,
        locations.iter().map(|location| location.name.as_str()),
    );
    if found.is_none() {
        log::info!("no location matches {:?}", config.query);
    }
    write_json(
        writer,
        &Resolution {
            query: &config.query,
            found,
        },
    )
}
