//! Errors arising while parsing configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::values::CatalogPathError;

/// The configuration file could not be read or understood.
#[derive(Debug, Error)]
pub enum ParseConfigurationError {
    #[error("could not read configuration file '{path}': {error}")]
    Io {
        path: PathBuf,
        error: std::io::Error,
    },
    #[error("could not parse configuration file '{path}': {error}")]
    Parse {
        path: PathBuf,
        error: serde_json::Error,
    },
    #[error(transparent)]
    InvalidCatalogPath(#[from] CatalogPathError),
}
