//! Error types emitted by the tourpack CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use tourpack_core::{CatalogError, PackageRequestValidationError, PlanError};

/// Errors emitted by the tourpack CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        feature: &'static str,
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening a JSON catalog failed.
    #[error("failed to open catalog at {path:?}: {source}")]
    OpenCatalog {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A JSON catalog could not be decoded.
    #[error("failed to parse catalog JSON at {path:?}: {source}")]
    ParseCatalog {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Opening or reading a SQLite catalog failed.
    #[cfg(feature = "store-sqlite")]
    #[error(transparent)]
    OpenCatalogDatabase(#[from] tourpack_core::SqliteCatalogError),
    /// The catalog records were inconsistent.
    #[error("failed to load catalog from {path:?}: {source}")]
    LoadCatalog {
        path: Utf8PathBuf,
        #[source]
        source: CatalogError,
    },
    /// The package request failed validation.
    #[error("invalid package request: {0}")]
    InvalidRequest(#[from] PackageRequestValidationError),
    /// The planner rejected the request.
    #[error("planner failed: {source}")]
    Plan { source: PlanError },
    /// Serialising a report failed.
    #[error("failed to serialise report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Creating the output file failed.
    #[error("failed to create output file {path:?}: {source}")]
    CreateOutput {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    WriteOutput(#[source] std::io::Error),
}
