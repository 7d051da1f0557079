//! Catalog loading for CLI commands.
//!
//! Paths ending in `.json` are read as a [`CatalogSnapshot`]; anything else is
//! opened as a SQLite catalog database.

use camino::Utf8Path;
use log::debug;
use std::io::BufReader;
use tourpack_core::{Catalog, CatalogSnapshot, CatalogSource};
use tourpack_fs::open_utf8_file;

use crate::CliError;

/// On-disk encoding of a catalog, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CatalogFormat {
    Json,
    Sqlite,
}

impl CatalogFormat {
    pub(crate) fn for_path(path: &Utf8Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Sqlite,
        }
    }
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match tourpack_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load and index the catalog stored at `path`.
pub(crate) fn load_catalog(path: &Utf8Path, field: &'static str) -> Result<Catalog, CliError> {
    require_existing(path, field)?;
    let format = CatalogFormat::for_path(path);
    let catalog = match format {
        CatalogFormat::Json => index(path, &load_snapshot(path)?)?,
        CatalogFormat::Sqlite => load_sqlite(path)?,
    };
    debug!(
        "loaded {format:?} catalog from {path}: {} tours, {} attractions",
        catalog.tour_count(),
        catalog.attraction_count(),
    );
    Ok(catalog)
}

/// Decode a JSON-encoded [`CatalogSnapshot`] from disk.
pub(crate) fn load_snapshot(path: &Utf8Path) -> Result<CatalogSnapshot, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    CatalogSnapshot::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseCatalog {
        path: path.to_path_buf(),
        source,
    })
}

fn index<S: CatalogSource + ?Sized>(path: &Utf8Path, source: &S) -> Result<Catalog, CliError> {
    Catalog::load(source).map_err(|source| CliError::LoadCatalog {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(feature = "store-sqlite")]
fn load_sqlite(path: &Utf8Path) -> Result<Catalog, CliError> {
    let source = tourpack_core::SqliteCatalogSource::open(path.as_std_path())?;
    index(path, &source)
}

#[cfg(not(feature = "store-sqlite"))]
fn load_sqlite(_path: &Utf8Path) -> Result<Catalog, CliError> {
    Err(CliError::MissingFeature {
        feature: "store-sqlite",
        action: "reading SQLite catalogs",
    })
}
