//! Unit tests for the regions listing.

use super::helpers::CatalogFiles;
use super::*;
use crate::regions::list_regions;
use crate::report::RegionSummary;
use rstest::rstest;

#[rstest]
fn listing_reports_tour_counts_in_id_order() {
    let files = CatalogFiles::new();
    let summaries = list_regions(Some(files.scenario_json())).expect("regions should list");
    assert_eq!(
        summaries,
        vec![
            RegionSummary {
                id: "R1".to_owned(),
                name: "Region one".to_owned(),
                tour_count: 3,
            },
            RegionSummary {
                id: "R2".to_owned(),
                name: "Region two".to_owned(),
                tour_count: 0,
            },
        ]
    );
}

#[rstest]
fn listing_without_catalog_errors() {
    let err = list_regions(None).expect_err("catalog is required");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(env, ENV_REGIONS_CATALOG);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[cfg(feature = "store-sqlite")]
#[rstest]
fn listing_reads_sqlite_catalogs() {
    let files = CatalogFiles::new();
    let summaries = list_regions(Some(files.scenario_sqlite())).expect("regions should list");
    let ids: Vec<&str> = summaries.iter().map(|summary| summary.id.as_str()).collect();
    assert_eq!(ids, vec!["R1", "R2"]);
}

#[cfg(feature = "store-sqlite")]
#[rstest]
fn corrupt_sqlite_catalog_is_reported() {
    let files = CatalogFiles::new();
    let path = files.path("catalog.db");
    super::helpers::write_utf8(&path, b"not a database");
    let err = list_regions(Some(path)).expect_err("corrupt database");
    match err {
        CliError::OpenCatalogDatabase(_) | CliError::LoadCatalog { .. } => {}
        other => panic!("expected a catalog database error, found {other:?}"),
    }
}
