use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{RegionId, Tour};

/// Parameters for a package request.
///
/// Both bounds are optional; `None` leaves the dimension unbounded. Zero and
/// negative bounds are ordinary bounds that reject every non-empty package.
///
/// # Examples
/// ```rust
/// use tourpack_core::PackageRequest;
///
/// let request = PackageRequest::new("R1").with_max_days(5).with_max_budget(300.0);
/// assert_eq!(request.max_days, Some(5));
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackageRequest {
    /// Region whose tours are eligible.
    pub region_id: RegionId,
    /// Upper bound on the summed tour durations, in days.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_days: Option<u32>,
    /// Upper bound on the summed tour costs.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_budget: Option<f64>,
}

/// Detailed validation failures for [`PackageRequest`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackageRequestValidationError {
    /// The budget bound was NaN or infinite.
    #[error("max_budget must be a finite amount, got {0}")]
    NonFiniteBudget(f64),
}

impl PackageRequest {
    /// Construct an unbounded request for `region_id`.
    pub fn new(region_id: impl Into<RegionId>) -> Self {
        Self {
            region_id: region_id.into(),
            max_days: None,
            max_budget: None,
        }
    }

    /// Bound the summed duration.
    #[must_use]
    pub fn with_max_days(mut self, max_days: u32) -> Self {
        self.max_days = Some(max_days);
        self
    }

    /// Bound the summed cost.
    #[must_use]
    pub fn with_max_budget(mut self, max_budget: f64) -> Self {
        self.max_budget = Some(max_budget);
        self
    }

    /// Validate the request, mapping failures to [`PlanError::InvalidRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidRequest`] when the budget is not finite.
    pub fn validate(&self) -> Result<(), PlanError> {
        self.validate_detailed()
            .map_err(|_| PlanError::InvalidRequest)
    }

    /// Validate the request, reporting which field is wrong.
    ///
    /// # Errors
    ///
    /// Returns [`PackageRequestValidationError::NonFiniteBudget`] for a NaN
    /// or infinite budget.
    pub fn validate_detailed(&self) -> Result<(), PackageRequestValidationError> {
        match self.max_budget {
            Some(budget) if !budget.is_finite() => {
                Err(PackageRequestValidationError::NonFiniteBudget(budget))
            }
            _ => Ok(()),
        }
    }
}

/// The tours chosen for a request and their totals.
///
/// `tours` keeps selection order. `total_value` counts each attraction once.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Package {
    /// Selected tours in the order they were chosen.
    pub tours: Vec<Tour>,
    /// Sum of the selected tours' costs.
    pub total_cost: f64,
    /// Sum of the cultural values of all covered attractions.
    pub total_value: u64,
}

impl Package {
    /// The package with no tours, zero cost and zero value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether no tour was selected.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Summed duration of the selected tours, in days.
    pub fn total_days(&self) -> u64 {
        self.tours
            .iter()
            .map(|tour| u64::from(tour.duration_days))
            .sum()
    }
}

/// Search statistics reported alongside a package.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Diagnostics {
    /// Wall-clock time spent searching.
    pub solve_time: Duration,
    /// Number of tours in the requested region.
    pub candidates_evaluated: u64,
    /// Number of partial packages visited by the search.
    pub nodes_explored: u64,
}

/// Response from a successful package search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PackageResponse {
    /// The optimal package.
    pub package: Package,
    /// Statistics describing the search.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`Planner::generate_package`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Request parameters were invalid, e.g. a NaN budget.
    #[error("invalid request")]
    InvalidRequest,
}

/// Choose the most valuable package of tours for a request.
///
/// Implementations never mutate the catalog they read, return an empty
/// package rather than an error when nothing fits, and start each call from a
/// clean state. Planners must be `Send + Sync` so independent searches can run
/// on separate threads.
pub trait Planner: Send + Sync {
    /// Search for the package maximising cultural value.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidRequest`] for requests that fail
    /// [`PackageRequest::validate`].
    fn generate_package(&self, request: &PackageRequest) -> Result<PackageResponse, PlanError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct EmptyPlanner;

    impl Planner for EmptyPlanner {
        fn generate_package(
            &self,
            request: &PackageRequest,
        ) -> Result<PackageResponse, PlanError> {
            request.validate()?;
            Ok(PackageResponse {
                package: Package::empty(),
                diagnostics: Diagnostics::default(),
            })
        }
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some(0.0), true)]
    #[case(Some(-5.0), true)]
    #[case(Some(f64::NAN), false)]
    #[case(Some(f64::INFINITY), false)]
    fn budget_validation(#[case] budget: Option<f64>, #[case] should_succeed: bool) {
        let request = PackageRequest {
            region_id: "R1".into(),
            max_days: None,
            max_budget: budget,
        };
        assert_eq!(EmptyPlanner.generate_package(&request).is_ok(), should_succeed);
    }

    #[rstest]
    fn detailed_validation_names_the_budget() {
        let request = PackageRequest::new("R1").with_max_budget(f64::NEG_INFINITY);
        let err = request.validate_detailed().expect_err("infinite budget");
        assert!(matches!(err, PackageRequestValidationError::NonFiniteBudget(b) if b.is_infinite()));
    }

    #[rstest]
    fn empty_package_has_zero_totals() {
        let package = Package::empty();
        assert!(package.is_empty());
        assert_eq!(package.total_days(), 0);
        assert_eq!(package.total_value, 0);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn request_bounds_default_to_unbounded() {
        let request: PackageRequest =
            serde_json::from_str(r#"{"region_id": "R2"}"#).expect("valid request");
        assert_eq!(request, PackageRequest::new("R2"));
    }
}
