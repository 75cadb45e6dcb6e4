//! Command-line interface for ranking and resolving locations.
//!
//! Every command reads a JSON array of location records and prints pretty
//! JSON to stdout. Log output goes to stderr and is filtered by `RUST_LOG`.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod error;
mod input;
mod output;
mod rank;
mod recommend;
mod resolve;

pub use error::CliError;

use rank::{RankArgs, run_rank_with};
use recommend::{RecommendArgs, run_recommend_with};
use resolve::{ResolveArgs, run_resolve_with};

pub(crate) const ARG_LOCATIONS: &str = "locations";
pub(crate) const ARG_PROFILE: &str = "profile";
pub(crate) const ARG_SORT_BY: &str = "sort-by";
pub(crate) const ARG_QUERY: &str = "query";
pub(crate) const ENV_RANK_LOCATIONS: &str = "LIVABILITY_CMDS_RANK_LOCATIONS";
pub(crate) const ENV_RANK_SORT_BY: &str = "LIVABILITY_CMDS_RANK_SORT_BY";
pub(crate) const ENV_RANK_PROFILE: &str = "LIVABILITY_CMDS_RANK_PROFILE";
pub(crate) const ENV_RECOMMEND_LOCATIONS: &str = "LIVABILITY_CMDS_RECOMMEND_LOCATIONS";
pub(crate) const ENV_RECOMMEND_PROFILE: &str = "LIVABILITY_CMDS_RECOMMEND_PROFILE";
pub(crate) const ENV_RESOLVE_LOCATIONS: &str = "LIVABILITY_CMDS_RESOLVE_LOCATIONS";
pub(crate) const ENV_RESOLVE_QUERY: &str = "LIVABILITY_CMDS_RESOLVE_QUERY";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Run the livability CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments, configuration, inputs, or ranking
/// fail, or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    init_logging();
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Rank(args) => run_rank_with(args, writer),
        Command::Recommend(args) => run_recommend_with(args, writer),
        Command::Resolve(args) => run_resolve_with(args, writer),
    }
}

/// Install a stderr `tracing` subscriber that also receives `log` records.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        log::debug!("logging already initialised: {err}");
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "livability",
    about = "Rank residential locations by livability metrics and preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank locations by one category or by preference score.
    Rank(RankArgs),
    /// Recommend the best five locations for a preference profile.
    Recommend(RecommendArgs),
    /// Resolve a free-text query to a location name.
    Resolve(ResolveArgs),
}

#[cfg(test)]
mod tests;
