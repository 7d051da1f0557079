//! Core domain types for the Tourpack engine.
//!
//! The crate models regions, tours and attractions, the in-memory
//! [`Catalog`] that links them, the [`CatalogSource`] port used to populate
//! it, and the [`Planner`] boundary implemented by package search engines.
//! Record constructors return `Result` to surface invalid input early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod attraction;
pub mod catalog;
pub mod planner;
pub mod region;
pub mod source;
pub mod store;
pub mod tour;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use attraction::{Attraction, AttractionId};
pub use catalog::{Catalog, CatalogBuilder, CatalogError};
pub use planner::{
    Diagnostics, Package, PackageRequest, PackageRequestValidationError, PackageResponse,
    PlanError, Planner,
};
pub use region::{Region, RegionId};
pub use source::{Association, CatalogSnapshot, CatalogSource};
#[cfg(feature = "store-sqlite")]
pub use store::{SqliteCatalogError, SqliteCatalogSource};
pub use tour::{Tour, TourError, TourId};
