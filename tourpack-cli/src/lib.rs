//! Command-line interface for planning tour packages from a catalog file.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod catalog;
mod error;
mod output;
mod package;
mod regions;
mod report;

pub use error::CliError;

use package::{PackageArgs, run_package};
use regions::{RegionsArgs, run_regions};

pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_REGION: &str = "region";
pub(crate) const ARG_MAX_DAYS: &str = "max-days";
pub(crate) const ARG_MAX_BUDGET: &str = "max-budget";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ENV_PACKAGE_CATALOG: &str = "TOURPACK_CMDS_PACKAGE_CATALOG";
pub(crate) const ENV_PACKAGE_REGION: &str = "TOURPACK_CMDS_PACKAGE_REGION";
pub(crate) const ENV_REGIONS_CATALOG: &str = "TOURPACK_CMDS_REGIONS_CATALOG";

/// Run the CLI with the current process arguments and environment.
///
/// Help and version requests print their output and exit the process.
pub fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => return Err(CliError::ArgumentParsing(err)),
    };
    match cli.command {
        Command::Regions(args) => run_regions(args),
        Command::Package(args) => run_package(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tourpack",
    about = "Assemble the most valuable tour package a region's catalog allows",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the regions defined in a catalog.
    Regions(RegionsArgs),
    /// Plan the optimal package of tours for one region.
    Package(PackageArgs),
}

#[cfg(test)]
mod tests;
