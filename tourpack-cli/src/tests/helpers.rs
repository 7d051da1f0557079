//! Test helpers for writing catalog fixtures into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use tourpack_core::test_support::scenario_snapshot;

/// Temporary directory holding catalog files for one test.
#[derive(Debug)]
pub(super) struct CatalogFiles {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl CatalogFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write the three-tour scenario as a JSON snapshot.
    pub(super) fn scenario_json(&self) -> Utf8PathBuf {
        let path = self.path("catalog.json");
        let payload =
            serde_json::to_string_pretty(&scenario_snapshot()).expect("serialize snapshot");
        write_utf8(&path, payload.as_bytes());
        path
    }

    /// Write the three-tour scenario as a SQLite database.
    #[cfg(feature = "store-sqlite")]
    pub(super) fn scenario_sqlite(&self) -> Utf8PathBuf {
        let path = self.path("catalog.db");
        tourpack_core::test_support::write_sqlite_catalog(path.as_std_path(), &scenario_snapshot())
            .expect("write sqlite catalog");
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}
