//! Multi-day excursions offered in a region.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::RegionId;

/// Identifier of a tour.
pub type TourId = u64;

/// A purchasable excursion with a fixed duration and cost.
///
/// The attractions a tour visits are held by the [`Catalog`](crate::Catalog)
/// association index rather than by the record itself, so a `Tour` stays a
/// plain value that can be cloned into results.
///
/// # Examples
/// ```
/// use tourpack_core::Tour;
///
/// # fn main() -> Result<(), tourpack_core::TourError> {
/// let tour = Tour::new(1, "TOS", "Renaissance Florence", 2, 100.0)?;
/// assert_eq!(tour.duration_days, 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTour"))]
pub struct Tour {
    /// Unique identifier.
    pub id: TourId,
    /// Region the tour runs in.
    pub region_id: RegionId,
    /// Display name.
    pub name: String,
    /// Length of the tour in days.
    pub duration_days: u32,
    /// Price of the tour.
    pub cost: f64,
}

/// Errors returned by [`Tour::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TourError {
    /// The tour lasts zero days.
    #[error("tour {id} must last at least one day")]
    ZeroDuration {
        /// Identifier of the offending tour.
        id: TourId,
    },
    /// The cost was negative, NaN or infinite.
    #[error("tour {id} has invalid cost {cost}; expected a finite, non-negative amount")]
    InvalidCost {
        /// Identifier of the offending tour.
        id: TourId,
        /// Rejected cost.
        cost: f64,
    },
}

impl Tour {
    /// Validates and constructs a [`Tour`].
    ///
    /// # Errors
    ///
    /// Returns [`TourError::ZeroDuration`] when `duration_days` is zero and
    /// [`TourError::InvalidCost`] when `cost` is negative or not finite.
    pub fn new(
        id: TourId,
        region_id: impl Into<RegionId>,
        name: impl Into<String>,
        duration_days: u32,
        cost: f64,
    ) -> Result<Self, TourError> {
        if duration_days == 0 {
            return Err(TourError::ZeroDuration { id });
        }
        if !cost.is_finite() || cost < 0.0 {
            return Err(TourError::InvalidCost { id, cost });
        }
        Ok(Self {
            id,
            region_id: region_id.into(),
            name: name.into(),
            duration_days,
            cost,
        })
    }
}

/// Unvalidated wire form of a [`Tour`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawTour {
    id: TourId,
    region_id: RegionId,
    #[serde(default)]
    name: String,
    duration_days: u32,
    cost: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTour> for Tour {
    type Error = TourError;

    fn try_from(raw: RawTour) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.region_id, raw.name, raw.duration_days, raw.cost)
    }
}
