//! Population port for the [`Catalog`](crate::Catalog).
//!
//! A [`CatalogSource`] hands over the raw records held by some storage
//! backend: regions, tours, attractions and the tour/attraction association
//! pairs. The catalog resolves and links them; sources never validate
//! associations themselves.

use std::convert::Infallible;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Attraction, AttractionId, Region, Tour, TourId};

/// A membership link between a tour and one attraction it visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Association {
    /// Tour side of the link.
    pub tour_id: TourId,
    /// Attraction side of the link.
    pub attraction_id: AttractionId,
}

impl Association {
    /// Construct an association pair.
    pub const fn new(tour_id: TourId, attraction_id: AttractionId) -> Self {
        Self {
            tour_id,
            attraction_id,
        }
    }
}

/// Read-only access to persisted catalog records.
///
/// Each method returns the complete relation. The catalog calls them once,
/// in the order regions, tours, attractions, associations.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
/// use tourpack_core::{Association, Attraction, Catalog, CatalogSource, Region, Tour};
///
/// struct OneTour;
///
/// impl CatalogSource for OneTour {
///     type Error = Infallible;
///
///     fn regions(&self) -> Result<Vec<Region>, Self::Error> {
///         Ok(vec![Region::new("R1", "Lazio")])
///     }
///     fn tours(&self) -> Result<Vec<Tour>, Self::Error> {
///         Ok(vec![Tour::new(1, "R1", "Rome", 2, 90.0).expect("valid tour")])
///     }
///     fn attractions(&self) -> Result<Vec<Attraction>, Self::Error> {
///         Ok(vec![Attraction::new(10, "Colosseum", 50)])
///     }
///     fn associations(&self) -> Result<Vec<Association>, Self::Error> {
///         Ok(vec![Association::new(1, 10)])
///     }
/// }
///
/// let catalog = Catalog::load(&OneTour).expect("catalog loads");
/// assert_eq!(catalog.tour_value(1), 50);
/// ```
pub trait CatalogSource {
    /// Error raised when the backend cannot be read.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return every region.
    fn regions(&self) -> Result<Vec<Region>, Self::Error>;

    /// Return every tour.
    fn tours(&self) -> Result<Vec<Tour>, Self::Error>;

    /// Return every attraction.
    fn attractions(&self) -> Result<Vec<Attraction>, Self::Error>;

    /// Return every tour/attraction pair, including pairs that may not
    /// resolve.
    fn associations(&self) -> Result<Vec<Association>, Self::Error>;
}

/// In-memory catalog records.
///
/// Serves as the file-based source when the `serde` feature is enabled: the
/// JSON form is an object with `regions`, `tours`, `attractions` and
/// `associations` arrays, each defaulting to empty.
///
/// # Examples
/// ```
/// use tourpack_core::{Catalog, CatalogSnapshot, Region};
///
/// let snapshot = CatalogSnapshot {
///     regions: vec![Region::new("R1", "Umbria")],
///     ..CatalogSnapshot::default()
/// };
/// let catalog = Catalog::load(&snapshot).expect("catalog loads");
/// assert!(catalog.get_tours_in_region("R1").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogSnapshot {
    /// Region records.
    #[cfg_attr(feature = "serde", serde(default))]
    pub regions: Vec<Region>,
    /// Tour records.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tours: Vec<Tour>,
    /// Attraction records.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attractions: Vec<Attraction>,
    /// Tour/attraction pairs.
    #[cfg_attr(feature = "serde", serde(default))]
    pub associations: Vec<Association>,
}

#[cfg(feature = "serde")]
impl CatalogSnapshot {
    /// Parse a JSON catalog document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the document is malformed or a
    /// tour record fails validation.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}

impl CatalogSource for CatalogSnapshot {
    type Error = Infallible;

    fn regions(&self) -> Result<Vec<Region>, Self::Error> {
        Ok(self.regions.clone())
    }

    fn tours(&self) -> Result<Vec<Tour>, Self::Error> {
        Ok(self.tours.clone())
    }

    fn attractions(&self) -> Result<Vec<Attraction>, Self::Error> {
        Ok(self.attractions.clone())
    }

    fn associations(&self) -> Result<Vec<Association>, Self::Error> {
        Ok(self.associations.clone())
    }
}
