//! Regions command implementation for the tourpack CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::catalog::load_catalog;
use crate::output::emit_json;
use crate::report::{RegionSummary, region_summaries};
use crate::{ARG_CATALOG, ARG_OUTPUT, CliError, ENV_REGIONS_CATALOG};

/// CLI arguments for the `regions` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the regions of a catalog with their tour counts")]
#[ortho_config(prefix = "TOURPACK")]
pub(crate) struct RegionsArgs {
    /// Catalog file: `.json` snapshot or SQLite database.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Write the listing here instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

pub(super) fn run_regions(args: RegionsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_regions_with(args, &mut stdout)
}

pub(super) fn run_regions_with(args: RegionsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let summaries = list_regions(merged.catalog)?;
    emit_json(merged.output.as_deref(), writer, &summaries)
}

pub(crate) fn list_regions(
    catalog_path: Option<Utf8PathBuf>,
) -> Result<Vec<RegionSummary>, CliError> {
    let path = catalog_path.ok_or(CliError::MissingArgument {
        field: ARG_CATALOG,
        env: ENV_REGIONS_CATALOG,
    })?;
    let catalog = load_catalog(&path, ARG_CATALOG)?;
    Ok(region_summaries(&catalog))
}
