//! In-memory catalog of regions, tours and attractions.
//!
//! The catalog is populated once from a [`CatalogSource`] and is read-only
//! afterwards. Tour/attraction membership is kept as a bidirectional index of
//! identifiers; neither side owns the other.

use std::collections::{BTreeMap, BTreeSet, btree_map::Entry};

use log::debug;
use thiserror::Error;

use crate::{Attraction, AttractionId, CatalogSource, Region, RegionId, Tour, TourId};

static NO_ATTRACTIONS: BTreeSet<AttractionId> = BTreeSet::new();
static NO_TOURS: BTreeSet<TourId> = BTreeSet::new();

/// Errors raised while populating a [`Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing source could not be read.
    #[error("failed to read catalog source: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// Two regions share an identifier.
    #[error("duplicate region id {id:?}")]
    DuplicateRegion {
        /// Repeated identifier.
        id: RegionId,
    },
    /// Two tours share an identifier.
    #[error("duplicate tour id {id}")]
    DuplicateTour {
        /// Repeated identifier.
        id: TourId,
    },
    /// Two attractions share an identifier.
    #[error("duplicate attraction id {id}")]
    DuplicateAttraction {
        /// Repeated identifier.
        id: AttractionId,
    },
}

impl CatalogError {
    fn from_source<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Source(Box::new(err))
    }
}

/// All tours, attractions and regions known to the engine.
///
/// Tours are kept ordered by identifier, which fixes the order returned by
/// [`Catalog::get_tours_in_region`].
///
/// # Examples
/// ```
/// use tourpack_core::{Attraction, CatalogBuilder, Tour};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut builder = CatalogBuilder::default();
/// builder.add_tour(Tour::new(1, "R1", "Etruscan hills", 2, 80.0)?)?;
/// builder.add_attraction(Attraction::new(3, "Necropolis", 15))?;
/// assert!(builder.link(1, 3));
/// assert!(!builder.link(1, 99));
///
/// let catalog = builder.build();
/// assert_eq!(catalog.get_tours_in_region("R1").len(), 1);
/// assert_eq!(catalog.tour_value(1), 15);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    regions: BTreeMap<RegionId, Region>,
    tours: BTreeMap<TourId, Tour>,
    attractions: BTreeMap<AttractionId, Attraction>,
    tour_attractions: BTreeMap<TourId, BTreeSet<AttractionId>>,
    attraction_tours: BTreeMap<AttractionId, BTreeSet<TourId>>,
}

impl Catalog {
    /// Populate a catalog from `source`.
    ///
    /// Regions, tours and attractions are inserted first; associations are
    /// linked afterwards and pairs referencing unknown ids are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Source`] when the source fails and a
    /// `Duplicate*` variant when an identifier repeats.
    pub fn load<S>(source: &S) -> Result<Self, CatalogError>
    where
        S: CatalogSource + ?Sized,
    {
        let mut builder = CatalogBuilder::default();
        for region in source.regions().map_err(CatalogError::from_source)? {
            builder.add_region(region)?;
        }
        for tour in source.tours().map_err(CatalogError::from_source)? {
            builder.add_tour(tour)?;
        }
        for attraction in source.attractions().map_err(CatalogError::from_source)? {
            builder.add_attraction(attraction)?;
        }

        let associations = source.associations().map_err(CatalogError::from_source)?;
        let total = associations.len();
        let linked = associations
            .into_iter()
            .filter(|pair| builder.link(pair.tour_id, pair.attraction_id))
            .count();

        let catalog = builder.build();
        debug!(
            "catalog loaded: {} regions, {} tours, {} attractions, {linked}/{total} associations linked",
            catalog.regions.len(),
            catalog.tours.len(),
            catalog.attractions.len(),
        );
        Ok(catalog)
    }

    /// Return every tour whose region matches `region_id`, ordered by tour id.
    ///
    /// Unknown regions yield an empty list.
    pub fn get_tours_in_region(&self, region_id: &str) -> Vec<&Tour> {
        self.tours
            .values()
            .filter(|tour| tour.region_id == region_id)
            .collect()
    }

    /// Attractions visited by `tour_id`; empty for unknown tours.
    pub fn attractions_of(&self, tour_id: TourId) -> &BTreeSet<AttractionId> {
        self.tour_attractions
            .get(&tour_id)
            .unwrap_or(&NO_ATTRACTIONS)
    }

    /// Tours visiting `attraction_id`; empty for unknown attractions.
    pub fn tours_containing(&self, attraction_id: AttractionId) -> &BTreeSet<TourId> {
        self.attraction_tours
            .get(&attraction_id)
            .unwrap_or(&NO_TOURS)
    }

    /// Sum of the cultural values of the attractions `tour_id` visits.
    pub fn tour_value(&self, tour_id: TourId) -> u64 {
        self.attractions_of(tour_id)
            .iter()
            .filter_map(|id| self.attractions.get(id))
            .map(|attraction| u64::from(attraction.cultural_value))
            .sum()
    }

    /// Look up a tour by id.
    pub fn tour(&self, id: TourId) -> Option<&Tour> {
        self.tours.get(&id)
    }

    /// Look up an attraction by id.
    pub fn attraction(&self, id: AttractionId) -> Option<&Attraction> {
        self.attractions.get(&id)
    }

    /// Look up a region by id.
    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.get(id)
    }

    /// All regions, ordered by id.
    pub fn regions(&self) -> impl Iterator<Item = &Region> + '_ {
        self.regions.values()
    }

    /// All tours, ordered by id.
    pub fn tours(&self) -> impl Iterator<Item = &Tour> + '_ {
        self.tours.values()
    }

    /// All attractions, ordered by id.
    pub fn attractions(&self) -> impl Iterator<Item = &Attraction> + '_ {
        self.attractions.values()
    }

    /// Number of tours in the catalog.
    pub fn tour_count(&self) -> usize {
        self.tours.len()
    }

    /// Number of attractions in the catalog.
    pub fn attraction_count(&self) -> usize {
        self.attractions.len()
    }
}

/// Incremental construction of a [`Catalog`].
///
/// Mirrors the loading steps of [`Catalog::load`] for callers that assemble
/// records themselves.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    /// Insert a region.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateRegion`] if the id is already present.
    pub fn add_region(&mut self, region: Region) -> Result<(), CatalogError> {
        match self.catalog.regions.entry(region.id.clone()) {
            Entry::Occupied(_) => Err(CatalogError::DuplicateRegion { id: region.id }),
            Entry::Vacant(slot) => {
                slot.insert(region);
                Ok(())
            }
        }
    }

    /// Insert a tour with an empty attraction set.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateTour`] if the id is already present.
    pub fn add_tour(&mut self, tour: Tour) -> Result<(), CatalogError> {
        match self.catalog.tours.entry(tour.id) {
            Entry::Occupied(_) => Err(CatalogError::DuplicateTour { id: tour.id }),
            Entry::Vacant(slot) => {
                slot.insert(tour);
                Ok(())
            }
        }
    }

    /// Insert an attraction.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateAttraction`] if the id is already
    /// present.
    pub fn add_attraction(&mut self, attraction: Attraction) -> Result<(), CatalogError> {
        match self.catalog.attractions.entry(attraction.id) {
            Entry::Occupied(_) => Err(CatalogError::DuplicateAttraction { id: attraction.id }),
            Entry::Vacant(slot) => {
                slot.insert(attraction);
                Ok(())
            }
        }
    }

    /// Link a tour to an attraction in both directions.
    ///
    /// Returns `false`, leaving the catalog untouched, when either id does
    /// not resolve. Repeated pairs are absorbed by the underlying sets.
    pub fn link(&mut self, tour_id: TourId, attraction_id: AttractionId) -> bool {
        let known_tour = self.catalog.tours.contains_key(&tour_id);
        let known_attraction = self.catalog.attractions.contains_key(&attraction_id);
        if !(known_tour && known_attraction) {
            debug!(
                "dropping association tour {tour_id} -> attraction {attraction_id}: \
                 tour known = {known_tour}, attraction known = {known_attraction}"
            );
            return false;
        }

        self.catalog
            .tour_attractions
            .entry(tour_id)
            .or_default()
            .insert(attraction_id);
        self.catalog
            .attraction_tours
            .entry(attraction_id)
            .or_default()
            .insert(tour_id);
        true
    }

    /// Finish construction.
    pub fn build(self) -> Catalog {
        self.catalog
    }
}
