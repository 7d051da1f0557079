//! SQLite-backed catalog source.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use rusqlite::{Connection, OpenFlags, Row};
use thiserror::Error;

use crate::{Association, Attraction, CatalogSource, Region, Tour, TourError};

const SELECT_REGIONS: &str = "SELECT id, name FROM regions ORDER BY id";
const SELECT_TOURS: &str =
    "SELECT id, region_id, name, duration_days, cost FROM tours ORDER BY id";
const SELECT_ATTRACTIONS: &str =
    "SELECT id, name, cultural_value FROM attractions ORDER BY id";
const SELECT_ASSOCIATIONS: &str =
    "SELECT tour_id, attraction_id FROM tour_attractions ORDER BY tour_id, attraction_id";

/// Error raised when reading catalog records from SQLite.
#[derive(Debug, Error)]
pub enum SqliteCatalogError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A stored tour row failed validation.
    #[error("invalid tour row: {0}")]
    InvalidTour(#[from] TourError),
    /// Generic SQLite error when reading rows.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

/// Read-only catalog source backed by a SQLite database.
///
/// Expects the tables `regions(id, name)`, `tours(id, region_id, name,
/// duration_days, cost)`, `attractions(id, name, cultural_value)` and
/// `tour_attractions(tour_id, attraction_id)`. Association rows are returned
/// as stored; foreign keys are not enforced here.
pub struct SqliteCatalogSource {
    connection: Connection,
    path: PathBuf,
}

impl fmt::Debug for SqliteCatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteCatalogSource")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SqliteCatalogSource {
    /// Open the database at `database_path` in read-only mode.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteCatalogError::OpenDatabase`] when the file cannot be
    /// opened.
    pub fn open<P>(database_path: P) -> Result<Self, SqliteCatalogError>
    where
        P: AsRef<Path>,
    {
        let path = database_path.as_ref().to_path_buf();
        let connection = Connection::open_with_flags(&path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|source| SqliteCatalogError::OpenDatabase {
                path: path.clone(),
                source,
            })?;
        Ok(Self { connection, path })
    }

    /// Location of the underlying database.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn query_all<T, F>(&self, sql: &str, mut decode: F) -> Result<Vec<T>, SqliteCatalogError>
    where
        F: FnMut(&Row<'_>) -> Result<T, SqliteCatalogError>,
    {
        let mut statement = self.connection.prepare(sql)?;
        let mut rows = statement.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(decode(row)?);
        }
        Ok(records)
    }
}

impl CatalogSource for SqliteCatalogSource {
    type Error = SqliteCatalogError;

    fn regions(&self) -> Result<Vec<Region>, Self::Error> {
        self.query_all(SELECT_REGIONS, |row| {
            let id: String = row.get(0)?;
            let name: String = row.get(1)?;
            Ok(Region::new(id, name))
        })
    }

    fn tours(&self) -> Result<Vec<Tour>, Self::Error> {
        self.query_all(SELECT_TOURS, |row| {
            let id: u64 = row.get(0)?;
            let region_id: String = row.get(1)?;
            let name: String = row.get(2)?;
            let duration_days: u32 = row.get(3)?;
            let cost: f64 = row.get(4)?;
            Ok(Tour::new(id, region_id, name, duration_days, cost)?)
        })
    }

    fn attractions(&self) -> Result<Vec<Attraction>, Self::Error> {
        self.query_all(SELECT_ATTRACTIONS, |row| {
            let id: u64 = row.get(0)?;
            let name: String = row.get(1)?;
            let cultural_value: u32 = row.get(2)?;
            Ok(Attraction::new(id, name, cultural_value))
        })
    }

    fn associations(&self) -> Result<Vec<Association>, Self::Error> {
        self.query_all(SELECT_ASSOCIATIONS, |row| {
            let tour_id: u64 = row.get(0)?;
            let attraction_id: u64 = row.get(1)?;
            Ok(Association::new(tour_id, attraction_id))
        })
    }
}
