//! Validated path to a Gaia catalog database file.

use std::fmt;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File extensions we recognize as catalog databases.
const CATALOG_EXTENSIONS: [&str; 2] = ["sqlite3", "db"];

/// Suffix inserted before the extension to name the heavy companion file.
const HEAVY_SUFFIX: &str = "_heavy";

/// Path to a catalog file, checked at construction to end in a recognized
/// extension.
///
/// The catalog ships as a pair of files: the light database holds positions
/// and magnitudes, the heavy one holds source ids, per-field standard errors
/// and correlation coefficients. Only the light path is configured;
/// [`CatalogPath::heavy_variant`] derives its companion by inserting `_heavy`
/// before the extension (`gaia.sqlite3` becomes `gaia_heavy.sqlite3`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub struct CatalogPath(PathBuf);

/// Errors arising when validating a catalog path.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogPathError {
    #[error("catalog path '{0}' does not end in a recognized extension (.sqlite3 or .db)")]
    UnrecognizedExtension(String),
    #[error("catalog path '{0}' has no file name")]
    NoFileName(String),
}

impl CatalogPath {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, CatalogPathError> {
        let path = path.into();
        let display = path.display().to_string();
        if path.file_stem().is_none() {
            return Err(CatalogPathError::NoFileName(display));
        }
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if CATALOG_EXTENSIONS.contains(&ext) => Ok(CatalogPath(path)),
            _ => Err(CatalogPathError::UnrecognizedExtension(display)),
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Path of the heavy companion database, derived by naming convention.
    pub fn heavy_variant(&self) -> PathBuf {
        // Both components exist: `new` rejected paths without them.
        let stem = self.0.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        let ext = self.0.extension().and_then(|s| s.to_str()).unwrap_or("");
        self.0.with_file_name(format!("{stem}{HEAVY_SUFFIX}.{ext}"))
    }
}

impl fmt::Display for CatalogPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl std::str::FromStr for CatalogPath {
    type Err = CatalogPathError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        CatalogPath::new(value)
    }
}

impl TryFrom<String> for CatalogPath {
    type Error = CatalogPathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CatalogPath::new(value)
    }
}

impl From<CatalogPath> for String {
    fn from(value: CatalogPath) -> Self {
        value.0.display().to_string()
    }
}
