//! `BacktrackingPlanner` implementation over a shared [`Catalog`].

use std::sync::Arc;
use std::time::Instant;

use log::debug;
use tourpack_core::{
    Catalog, Diagnostics, Package, PackageRequest, PackageResponse, PlanError, Planner,
};

use crate::search::{Bounds, Candidate, search};

/// Exhaustive planner returning the optimal package for a region.
///
/// The planner shares its catalog through an [`Arc`], so clones are cheap and
/// several threads may plan against the same data at once. Every call builds
/// its own search state; nothing carries over between calls.
///
/// # Examples
/// ```rust
/// use tourpack_core::{
///     Association, Attraction, Catalog, CatalogSnapshot, PackageRequest, Planner, Region, Tour,
/// };
/// use tourpack_solver_bt::BacktrackingPlanner;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let snapshot = CatalogSnapshot {
///     regions: vec![Region::new("R1", "Veneto")],
///     tours: vec![Tour::new(1, "R1", "Lagoon", 2, 100.0)?],
///     attractions: vec![Attraction::new(1, "San Marco", 30)],
///     associations: vec![Association::new(1, 1)],
/// };
/// let planner = BacktrackingPlanner::new(Catalog::load(&snapshot)?);
///
/// let response = planner.generate_package(&PackageRequest::new("R1").with_max_days(3))?;
/// assert_eq!(response.package.total_value, 30);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BacktrackingPlanner {
    catalog: Arc<Catalog>,
}

impl BacktrackingPlanner {
    /// Construct a planner over `catalog`.
    pub fn new(catalog: impl Into<Arc<Catalog>>) -> Self {
        Self {
            catalog: catalog.into(),
        }
    }

    /// The catalog searched by this planner.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Planner for BacktrackingPlanner {
    fn generate_package(&self, request: &PackageRequest) -> Result<PackageResponse, PlanError> {
        request.validate()?;
        let started_at = Instant::now();

        let candidates = Candidate::for_region(&self.catalog, &request.region_id);
        debug!(
            "planning region {:?} over {} tours (max_days = {:?}, max_budget = {:?})",
            request.region_id,
            candidates.len(),
            request.max_days,
            request.max_budget,
        );

        let outcome = search(&candidates, Bounds::from(request));
        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            candidates_evaluated: u64::try_from(candidates.len()).unwrap_or(u64::MAX),
            nodes_explored: outcome.nodes_explored,
        };
        debug!(
            "region {:?}: selected {} tours, value {}, cost {}, {} nodes in {:?}",
            request.region_id,
            outcome.selection.len(),
            outcome.total_value,
            outcome.total_cost,
            diagnostics.nodes_explored,
            diagnostics.solve_time,
        );

        Ok(PackageResponse {
            package: Package {
                tours: outcome.selection.into_iter().cloned().collect(),
                total_cost: outcome.total_cost,
                total_value: outcome.total_value,
            },
            diagnostics,
        })
    }
}
