//! Test-only fixtures and sources used by unit and behaviour tests.

use std::fmt;

use crate::{Association, Attraction, CatalogSnapshot, CatalogSource, Region, Tour};

/// Construct a tour without running [`Tour::new`] validation.
///
/// # Examples
/// ```rust
/// use tourpack_core::test_support::tour;
///
/// let tour = tour(1, "R1", 2, 100.0);
/// assert_eq!(tour.name, "T1");
/// ```
pub fn tour(id: u64, region_id: &str, duration_days: u32, cost: f64) -> Tour {
    Tour {
        id,
        region_id: region_id.to_owned(),
        name: format!("T{id}"),
        duration_days,
        cost,
    }
}

/// Construct an attraction named after its id.
pub fn attraction(id: u64, cultural_value: u32) -> Attraction {
    Attraction::new(id, format!("A{id}"), cultural_value)
}

/// Three tours in region `R1` plus an empty region `R2`.
///
/// - `T1`: 2 days, cost 100, attractions `A1` (10) and `A2` (5)
/// - `T2`: 3 days, cost 150, attraction `A3` (20)
/// - `T3`: 1 day, cost 50, attraction `A1` (10)
///
/// Records are listed in ascending id order.
pub fn scenario_snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        regions: vec![Region::new("R1", "Region one"), Region::new("R2", "Region two")],
        tours: vec![
            tour(1, "R1", 2, 100.0),
            tour(2, "R1", 3, 150.0),
            tour(3, "R1", 1, 50.0),
        ],
        attractions: vec![attraction(1, 10), attraction(2, 5), attraction(3, 20)],
        associations: vec![
            Association::new(1, 1),
            Association::new(1, 2),
            Association::new(2, 3),
            Association::new(3, 1),
        ],
    }
}

/// Error reported by [`FailingSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceUnavailable;

impl fmt::Display for SourceUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("catalog source unavailable")
    }
}

impl std::error::Error for SourceUnavailable {}

/// A [`CatalogSource`] whose every read fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSource;

impl CatalogSource for FailingSource {
    type Error = SourceUnavailable;

    fn regions(&self) -> Result<Vec<Region>, Self::Error> {
        Err(SourceUnavailable)
    }

    fn tours(&self) -> Result<Vec<Tour>, Self::Error> {
        Err(SourceUnavailable)
    }

    fn attractions(&self) -> Result<Vec<Attraction>, Self::Error> {
        Err(SourceUnavailable)
    }

    fn associations(&self) -> Result<Vec<Association>, Self::Error> {
        Err(SourceUnavailable)
    }
}

/// Persist `snapshot` into a fresh SQLite database at `path`.
///
/// Creates the tables read by
/// [`SqliteCatalogSource`](crate::SqliteCatalogSource). Associations are
/// written verbatim, dangling pairs included.
#[cfg(feature = "store-sqlite")]
pub fn write_sqlite_catalog(
    path: &std::path::Path,
    snapshot: &CatalogSnapshot,
) -> Result<(), rusqlite::Error> {
    use rusqlite::{Connection, params};

    let mut connection = Connection::open(path)?;
    connection.execute_batch(
        "CREATE TABLE regions (id TEXT PRIMARY KEY, name TEXT NOT NULL);
         CREATE TABLE tours (
             id INTEGER PRIMARY KEY,
             region_id TEXT NOT NULL,
             name TEXT NOT NULL,
             duration_days INTEGER NOT NULL,
             cost REAL NOT NULL
         );
         CREATE TABLE attractions (
             id INTEGER PRIMARY KEY,
             name TEXT NOT NULL,
             cultural_value INTEGER NOT NULL
         );
         CREATE TABLE tour_attractions (
             tour_id INTEGER NOT NULL,
             attraction_id INTEGER NOT NULL
         );",
    )?;

    let tx = connection.transaction()?;
    for region in &snapshot.regions {
        tx.execute(
            "INSERT INTO regions (id, name) VALUES (?1, ?2)",
            params![region.id, region.name],
        )?;
    }
    for tour in &snapshot.tours {
        tx.execute(
            "INSERT INTO tours (id, region_id, name, duration_days, cost) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![tour.id, tour.region_id, tour.name, tour.duration_days, tour.cost],
        )?;
    }
    for attraction in &snapshot.attractions {
        tx.execute(
            "INSERT INTO attractions (id, name, cultural_value) VALUES (?1, ?2, ?3)",
            params![attraction.id, attraction.name, attraction.cultural_value],
        )?;
    }
    for pair in &snapshot.associations {
        tx.execute(
            "INSERT INTO tour_attractions (tour_id, attraction_id) VALUES (?1, ?2)",
            params![pair.tour_id, pair.attraction_id],
        )?;
    }
    tx.commit()
}
