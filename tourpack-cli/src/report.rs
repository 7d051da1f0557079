//! Serialisable views of planner output and catalog contents.

use serde::{Deserialize, Serialize};
use tourpack_core::{AttractionId, Catalog, PackageResponse, TourId};

/// JSON report printed by the `package` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PackageReport {
    pub(crate) region_id: String,
    pub(crate) tours: Vec<TourReport>,
    pub(crate) total_days: u64,
    pub(crate) total_cost: f64,
    pub(crate) total_value: u64,
    pub(crate) diagnostics: DiagnosticsReport,
}

/// One selected tour with the attractions it covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct TourReport {
    pub(crate) id: TourId,
    pub(crate) name: String,
    pub(crate) duration_days: u32,
    pub(crate) cost: f64,
    pub(crate) cultural_value: u64,
    pub(crate) attractions: Vec<AttractionId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct DiagnosticsReport {
    pub(crate) solve_time_micros: u64,
    pub(crate) candidates_evaluated: u64,
    pub(crate) nodes_explored: u64,
}

impl PackageReport {
    pub(crate) fn new(catalog: &Catalog, region_id: &str, response: &PackageResponse) -> Self {
        let package = &response.package;
        let tours = package
            .tours
            .iter()
            .map(|tour| TourReport {
                id: tour.id,
                name: tour.name.clone(),
                duration_days: tour.duration_days,
                cost: tour.cost,
                cultural_value: catalog.tour_value(tour.id),
                attractions: catalog.attractions_of(tour.id).iter().copied().collect(),
            })
            .collect();
        let diagnostics = &response.diagnostics;
        Self {
            region_id: region_id.to_owned(),
            tours,
            total_days: package.total_days(),
            total_cost: package.total_cost,
            total_value: package.total_value,
            diagnostics: DiagnosticsReport {
                solve_time_micros: u64::try_from(diagnostics.solve_time.as_micros())
                    .unwrap_or(u64::MAX),
                candidates_evaluated: diagnostics.candidates_evaluated,
                nodes_explored: diagnostics.nodes_explored,
            },
        }
    }
}

/// One entry of the `regions` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct RegionSummary {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) tour_count: usize,
}

pub(crate) fn region_summaries(catalog: &Catalog) -> Vec<RegionSummary> {
    catalog
        .regions()
        .map(|region| RegionSummary {
            id: region.id.clone(),
            name: region.name.clone(),
            tour_count: catalog.get_tours_in_region(&region.id).len(),
        })
        .collect()
}
