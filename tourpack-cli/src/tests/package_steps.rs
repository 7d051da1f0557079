//! Behaviour-driven step definitions driving the package and regions commands.

use super::helpers::CatalogFiles;
use super::*;
use crate::package::run_package_with;
use crate::regions::run_regions_with;
use crate::report::{PackageReport, RegionSummary};
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug)]
struct CommandWorld {
    files: CatalogFiles,
    catalog: RefCell<Option<Utf8PathBuf>>,
    cli_args: RefCell<Vec<String>>,
    output: RefCell<Option<Utf8PathBuf>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl CommandWorld {
    fn new() -> Self {
        Self {
            files: CatalogFiles::new(),
            catalog: RefCell::new(None),
            cli_args: RefCell::new(Vec::new()),
            output: RefCell::new(None),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self, subcommand: &str) -> Vec<String> {
        let mut argv = vec!["tourpack".to_owned(), subcommand.to_owned()];
        if subcommand == "package" {
            argv.extend(self.cli_args.borrow().iter().cloned());
        }
        if let Some(catalog) = self.catalog.borrow().as_ref() {
            argv.extend([format!("--{ARG_CATALOG}"), catalog.as_str().to_owned()]);
        }
        if let Some(output) = self.output.borrow().as_ref() {
            argv.extend([format!("--{ARG_OUTPUT}"), output.as_str().to_owned()]);
        }
        argv
    }

    fn run(&self, subcommand: &str) {
        let invocation = self.build_command_line(subcommand);
        let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
        let outcome = parsed.and_then(|cli| {
            let mut buffer = self.stdout.borrow_mut();
            match cli.command {
                Command::Package(args) => run_package_with(args, &mut *buffer),
                Command::Regions(args) => run_regions_with(args, &mut *buffer),
            }
        });
        self.result.replace(Some(outcome));
    }

    fn expect_error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }

    fn expect_success(&self) {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        result.as_ref().expect("expected success");
    }
}

#[fixture]
fn world() -> CommandWorld {
    CommandWorld::new()
}

fn ids(report: &PackageReport) -> Vec<u64> {
    report.tours.iter().map(|tour| tour.id).collect()
}

#[given("a JSON catalog with three tours in R1")]
fn json_catalog(#[from(world)] world: &CommandWorld) {
    world.catalog.replace(Some(world.files.scenario_json()));
}

#[given("I request a package for R1 within 5 days and a budget of 300")]
fn bounded_request(#[from(world)] world: &CommandWorld) {
    world.cli_args.replace(
        ["R1", "--max-days", "5", "--max-budget", "300"]
            .map(str::to_owned)
            .to_vec(),
    );
}

#[given("I request a package for R1 with a budget that is not a number")]
fn nan_request(#[from(world)] world: &CommandWorld) {
    world
        .cli_args
        .replace(["R1", "--max-budget", "NaN"].map(str::to_owned).to_vec());
}

#[given("I ask for the report to be written to a nested file")]
fn nested_output(#[from(world)] world: &CommandWorld) {
    world
        .output
        .replace(Some(world.files.path("reports/r1/package.json")));
}

#[when("I run the package command")]
fn run_package_command(#[from(world)] world: &CommandWorld) {
    world.run("package");
}

#[when("I run the regions command")]
fn run_regions_command(#[from(world)] world: &CommandWorld) {
    world.run("regions");
}

#[then("the command succeeds and reports tours 1 and 2")]
fn succeeds_with_tours(#[from(world)] world: &CommandWorld) {
    world.expect_success();
    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    let report: PackageReport = serde_json::from_str(&stdout).expect("stdout should be a report");
    assert_eq!(ids(&report), vec![1, 2]);
    assert_eq!(report.total_value, 35);
}

#[then("the report file lists tours 1 and 2")]
fn report_file_lists_tours(#[from(world)] world: &CommandWorld) {
    world.expect_success();
    assert!(world.stdout.borrow().is_empty());
    let path = world.output.borrow().clone().expect("output path");
    let contents = std::fs::read_to_string(&path).expect("read report file");
    let report: PackageReport = serde_json::from_str(&contents).expect("file should be a report");
    assert_eq!(ids(&report), vec![1, 2]);
}

#[then("the command fails because the budget is rejected")]
fn fails_rejected_budget(#[from(world)] world: &CommandWorld) {
    match &*world.expect_error() {
        CliError::ArgumentParsing(err) => {
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        }
        other => panic!("expected ArgumentParsing, found {other:?}"),
    }
}

#[then("the command fails because the catalog path is missing")]
fn fails_missing_catalog(#[from(world)] world: &CommandWorld) {
    match &*world.expect_error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_CATALOG),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command lists regions R1 and R2")]
fn lists_regions(#[from(world)] world: &CommandWorld) {
    world.expect_success();
    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    let regions: Vec<RegionSummary> =
        serde_json::from_str(&stdout).expect("stdout should list regions");
    let ids: Vec<&str> = regions.iter().map(|region| region.id.as_str()).collect();
    assert_eq!(ids, vec!["R1", "R2"]);
}

macro_rules! register_command_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/package_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CommandWorld) {
            let _ = world;
        }
    };
}

register_command_scenario!(package_from_json, "planning a package from a JSON catalog");
register_command_scenario!(package_to_file, "writing the report to a file");
register_command_scenario!(package_nan_budget, "rejecting a budget that is not a number");
register_command_scenario!(package_missing_catalog, "rejecting a missing catalog path");
register_command_scenario!(regions_listing, "listing catalog regions");
