mod catalog_path;

pub use catalog_path::{CatalogPath, CatalogPathError};
