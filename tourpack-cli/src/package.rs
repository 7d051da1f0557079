//! Package command implementation for the tourpack CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tourpack_core::{PackageRequest, Planner};
use tourpack_solver_bt::BacktrackingPlanner;

use crate::catalog::load_catalog;
use crate::output::emit_json;
use crate::report::PackageReport;
use crate::{
    ARG_CATALOG, ARG_MAX_BUDGET, ARG_MAX_DAYS, ARG_OUTPUT, ARG_REGION, CliError,
    ENV_PACKAGE_CATALOG, ENV_PACKAGE_REGION,
};

/// CLI arguments for the `package` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Search every combination of a region's tours for the one \
                 with the highest cultural value. Selected tours never share \
                 an attraction and together stay within the optional day \
                 and budget limits.",
    about = "Plan the optimal tour package for a region"
)]
#[ortho_config(prefix = "TOURPACK")]
pub(crate) struct PackageArgs {
    /// Identifier of the region to plan for.
    #[arg(value_name = "region")]
    #[serde(default)]
    pub(crate) region: Option<String>,
    /// Catalog file: `.json` snapshot or SQLite database.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Maximum summed duration in days.
    #[arg(long = ARG_MAX_DAYS, value_name = "days")]
    #[serde(default)]
    pub(crate) max_days: Option<u32>,
    /// Maximum summed cost.
    #[arg(
        long = ARG_MAX_BUDGET,
        value_name = "amount",
        allow_negative_numbers = true,
        value_parser = parse_budget
    )]
    #[serde(default)]
    pub(crate) max_budget: Option<f64>,
    /// Write the report here instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

/// Parse a budget flag, refusing NaN and infinities before they reach the
/// configuration layers.
fn parse_budget(raw: &str) -> Result<f64, String> {
    let budget: f64 = raw.parse().map_err(|err| format!("{err}"))?;
    if budget.is_finite() {
        Ok(budget)
    } else {
        Err(format!("budget must be a finite amount, got {raw}"))
    }
}

impl PackageArgs {
    pub(crate) fn into_config(self) -> Result<PackageConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PackageConfig::try_from(merged)
    }
}

/// Resolved `package` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PackageConfig {
    pub(crate) region: String,
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) max_days: Option<u32>,
    pub(crate) max_budget: Option<f64>,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PackageConfig {
    pub(crate) fn request(&self) -> PackageRequest {
        PackageRequest {
            region_id: self.region.clone(),
            max_days: self.max_days,
            max_budget: self.max_budget,
        }
    }
}

impl TryFrom<PackageArgs> for PackageConfig {
    type Error = CliError;

    fn try_from(args: PackageArgs) -> Result<Self, Self::Error> {
        let region = args.region.ok_or(CliError::MissingArgument {
            field: ARG_REGION,
            env: ENV_PACKAGE_REGION,
        })?;
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_PACKAGE_CATALOG,
        })?;
        Ok(Self {
            region,
            catalog,
            max_days: args.max_days,
            max_budget: args.max_budget,
            output: args.output,
        })
    }
}

pub(super) fn run_package(args: PackageArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_package_with(args, &mut stdout)
}

pub(super) fn run_package_with(args: PackageArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_package(&config)?;
    emit_json(config.output.as_deref(), writer, &report)
}

pub(crate) fn execute_package(config: &PackageConfig) -> Result<PackageReport, CliError> {
    let request = config.request();
    request.validate_detailed()?;
    let planner = BacktrackingPlanner::new(load_catalog(&config.catalog, ARG_CATALOG)?);
    let response = planner
        .generate_package(&request)
        .map_err(|source| CliError::Plan { source })?;
    info!(
        "planned {} tours for region {:?} worth {}",
        response.package.tours.len(),
        request.region_id,
        response.package.total_value,
    );
    Ok(PackageReport::new(
        planner.catalog(),
        &request.region_id,
        &response,
    ))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PackageConfig, CliError> {
    let merged = PackageArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PackageConfig::try_from(merged)
}
