//! Facade crate for the tour package engine.
//!
//! This crate re-exports the catalog and planning types and exposes the
//! optional SQLite catalog source and backtracking planner behind feature
//! flags.

#![forbid(unsafe_code)]

pub use tourpack_core::{
    Association, Attraction, AttractionId, Catalog, CatalogBuilder, CatalogError, CatalogSnapshot,
    CatalogSource, Diagnostics, Package, PackageRequest, PackageRequestValidationError,
    PackageResponse, PlanError, Planner, Region, RegionId, Tour, TourError, TourId,
};

#[cfg(feature = "store-sqlite")]
pub use tourpack_core::{SqliteCatalogError, SqliteCatalogSource};

#[cfg(feature = "solver-bt")]
pub use tourpack_solver_bt::BacktrackingPlanner;
