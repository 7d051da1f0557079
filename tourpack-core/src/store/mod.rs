//! Persistent catalog sources.
//!
//! Storage backends implement [`CatalogSource`](crate::CatalogSource) so a
//! [`Catalog`](crate::Catalog) can be populated from them. The SQLite backend
//! is compiled with the `store-sqlite` feature.

#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteCatalogError, SqliteCatalogSource};
